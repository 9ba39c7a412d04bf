//! Property-based tests for PMF and CDF invariants.

use proptest::prelude::*;
use tb_math::{triangle, Bound, Cdf, Pmf};

fn masses_strategy() -> impl Strategy<Value = Vec<(i64, f64)>> {
    prop::collection::btree_map(-1_000i64..1_000, 0.0f64..100.0, 1..64)
        .prop_map(|m| m.into_iter().collect())
}

fn positive_masses_strategy() -> impl Strategy<Value = Vec<(i64, f64)>> {
    masses_strategy().prop_filter("needs positive mass", |pairs| {
        pairs.iter().any(|(_, m)| *m > 1e-6)
    })
}

fn normalized(pairs: &[(i64, f64)]) -> Pmf<i64> {
    let mut pmf: Pmf<i64> = pairs.iter().copied().collect();
    pmf.normalize();
    pmf
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn normalize_sums_to_one(pairs in positive_masses_strategy()) {
        let pmf = normalized(&pairs);
        let sum: f64 = pmf.iter().map(|(_, m)| m).sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "sum {sum}");
    }

    #[test]
    fn normalize_is_idempotent(pairs in positive_masses_strategy()) {
        let once = normalized(&pairs);
        let mut twice = once.clone();
        twice.normalize();
        for (k, m) in once.iter() {
            prop_assert!((m - twice.prob(k)).abs() < 1e-9);
        }
    }

    #[test]
    fn cdf_is_monotone_and_ends_at_one(pairs in positive_masses_strategy()) {
        let cdf = normalized(&pairs).make_cdf().unwrap();
        let c = cdf.cumulative();
        prop_assert!(c.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!((c[c.len() - 1] - 1.0).abs() < 1e-9);
        prop_assert!(cdf.keys().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn percentile_boundary_laws(pairs in positive_masses_strategy()) {
        let pmf = normalized(&pairs);
        let min = *pmf.keys().next().unwrap();
        let max = *pmf.keys().last().unwrap();
        prop_assert_eq!(pmf.percentile(0.0).unwrap(), min);
        prop_assert_eq!(pmf.percentile(1.0).unwrap(), max);
    }

    #[test]
    fn percentile_is_monotone_in_p(pairs in positive_masses_strategy(), a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let cdf: Cdf<i64> = normalized(&pairs).make_cdf().unwrap();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(cdf.percentile(lo).unwrap() <= cdf.percentile(hi).unwrap());
    }

    #[test]
    fn percentile_reaches_requested_mass(pairs in positive_masses_strategy(), p in 0.0f64..1.0) {
        let cdf = normalized(&pairs).make_cdf().unwrap();
        let key = cdf.percentile(p).unwrap();
        prop_assert!(cdf.prob(&key) >= p - 1e-12);
    }

    #[test]
    fn triangle_is_symmetric(low in -500i64..500, len in 1i64..300) {
        let bound = Bound::new(low, low + len - 1).unwrap();
        let pmf = triangle(&bound);
        let masses: Vec<f64> = pmf.iter().map(|(_, m)| m).collect();
        let reversed: Vec<f64> = masses.iter().rev().copied().collect();
        prop_assert_eq!(masses, reversed);
    }
}
