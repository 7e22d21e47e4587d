//! Numbered-card combinations.
//!
//! With point values sorted ascending as `v1..vk`, a play is valid iff
//! `k == 1`, or `k == 2` and `v1 == v2`, or `k >= 3` and `vk` equals the sum of
//! the rest.

use smallvec::SmallVec;

/// Check whether `values` form a legal numeric play.
///
/// ```
/// use sleeping_queens::rules::is_valid_numeric_play;
///
/// assert!(is_valid_numeric_play(&[7]));
/// assert!(is_valid_numeric_play(&[4, 4]));
/// assert!(is_valid_numeric_play(&[2, 3, 5]));
/// assert!(!is_valid_numeric_play(&[3, 4]));
/// assert!(!is_valid_numeric_play(&[]));
/// ```
#[must_use]
pub fn is_valid_numeric_play(values: &[u32]) -> bool {
    let mut sorted: SmallVec<[u32; 5]> = values.iter().copied().collect();
    sorted.sort_unstable();

    match sorted.as_slice() {
        [] => false,
        [_] => true,
        [a, b] => a == b,
        [rest @ .., largest] => rest.iter().sum::<u32>() == *largest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_singles_and_pairs() {
        for v in 1..=10 {
            assert!(is_valid_numeric_play(&[v]));
            assert!(is_valid_numeric_play(&[v, v]));
        }
        assert!(!is_valid_numeric_play(&[1, 2]));
    }

    #[test]
    fn test_sums_ignore_input_order() {
        assert!(is_valid_numeric_play(&[5, 2, 3]));
        assert!(is_valid_numeric_play(&[10, 1, 2, 3, 4]));
        assert!(is_valid_numeric_play(&[1, 1, 2]));
        assert!(!is_valid_numeric_play(&[2, 2, 2]));
        assert!(!is_valid_numeric_play(&[1, 2, 4]));
    }

    #[test]
    fn test_triple_equal_is_not_a_pair() {
        assert!(!is_valid_numeric_play(&[3, 3, 3]));
    }

    proptest! {
        #[test]
        fn prop_matches_definition(values in prop::collection::vec(1u32..=10, 1..=6)) {
            let mut sorted = values.clone();
            sorted.sort_unstable();
            let k = sorted.len();

            let expected = k == 1
                || (k == 2 && sorted[0] == sorted[1])
                || (k >= 3 && sorted[k - 1] == sorted[..k - 1].iter().sum::<u32>());

            prop_assert_eq!(is_valid_numeric_play(&values), expected);
        }
    }
}
