//! Metric properties of the distance and bounds on the ratio.

use super::common::{chars, word_strategy};
use levtrace::{distance, ratio};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: d(a, a) = 0.
    #[test]
    fn prop_identity(a in word_strategy()) {
        prop_assert_eq!(distance(&a, &a), 0);
    }

    /// Property: d(a, b) = 0 only for equal words.
    #[test]
    fn prop_zero_means_equal(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(distance(&a, &b) == 0, a == b);
    }

    /// Property: d(a, b) = d(b, a).
    #[test]
    fn prop_symmetry(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    /// Property: d(a, c) <= d(a, b) + d(b, c).
    #[test]
    fn prop_triangle_inequality(
        a in word_strategy(),
        b in word_strategy(),
        c in word_strategy(),
    ) {
        prop_assert!(distance(&a, &c) <= distance(&a, &b) + distance(&b, &c));
    }

    /// Property: |m - n| <= d <= max(m, n).
    #[test]
    fn prop_length_bounds(a in word_strategy(), b in word_strategy()) {
        let (m, n) = (a.chars().count(), b.chars().count());
        let d = distance(&a, &b);
        prop_assert!(d >= m.abs_diff(n));
        prop_assert!(d <= m.max(n));
    }

    /// Property: the ratio lies in [0, 1] and is 1 exactly for equal words.
    #[test]
    fn prop_ratio_bounds(a in word_strategy(), b in word_strategy()) {
        prop_assume!(!(a.is_empty() && b.is_empty()));
        let r = ratio(&chars(&a), &chars(&b)).unwrap();
        prop_assert!((0.0..=1.0).contains(&r));
        prop_assert_eq!(r == 1.0, a == b);
    }

    /// Property: the ratio does not depend on argument order.
    #[test]
    fn prop_ratio_symmetry(a in word_strategy(), b in word_strategy()) {
        prop_assume!(!(a.is_empty() && b.is_empty()));
        prop_assert_eq!(
            ratio(&chars(&a), &chars(&b)).unwrap(),
            ratio(&chars(&b), &chars(&a)).unwrap()
        );
    }
}
