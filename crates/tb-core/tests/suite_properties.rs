//! Property-based tests for the suite update protocol.

use proptest::prelude::*;
use tb_core::{credible_interval, ObservationOrder, Suite, UpdatePolicy};

fn prior_strategy() -> impl Strategy<Value = Vec<(i64, f64)>> {
    prop::collection::btree_map(0i64..200, 0.01f64..10.0, 1..40)
        .prop_map(|m| m.into_iter().collect())
}

/// Per-observation likelihood tables indexed by hypothesis modulo their length.
fn observations_strategy() -> impl Strategy<Value = Vec<Vec<f64>>> {
    prop::collection::vec(prop::collection::vec(0.05f64..1.0, 1..8), 0..12)
}

fn as_likelihoods(tables: &[Vec<f64>]) -> Vec<impl Fn(&i64) -> f64 + '_> {
    tables
        .iter()
        .map(|table| move |h: &i64| table[(*h as usize) % table.len()])
        .collect()
}

fn in_order(renormalize_every: Option<usize>) -> UpdatePolicy {
    UpdatePolicy {
        order: ObservationOrder::InOrder,
        renormalize_every,
        seed: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn suite_is_normalized_after_construction(prior in prior_strategy()) {
        let suite = Suite::new(prior).unwrap();
        let sum: f64 = suite.pmf().iter().map(|(_, m)| m).sum();
        prop_assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn update_preserves_normalization_and_keys(
        prior in prior_strategy(),
        tables in observations_strategy(),
    ) {
        let mut suite = Suite::new(prior.clone()).unwrap();
        for obs in as_likelihoods(&tables) {
            let summary = suite.update(&obs);
            prop_assert!(!summary.degenerate);
        }
        let sum: f64 = suite.pmf().iter().map(|(_, m)| m).sum();
        prop_assert!((sum - 1.0).abs() < 1e-9);

        let keys: Vec<i64> = suite.hypotheses().copied().collect();
        let prior_keys: Vec<i64> = prior.iter().map(|(k, _)| *k).collect();
        prop_assert_eq!(keys, prior_keys);
    }

    #[test]
    fn batch_order_and_cadence_do_not_change_posterior(
        prior in prior_strategy(),
        tables in observations_strategy(),
        seed in any::<u64>(),
        cadence in 1usize..5,
    ) {
        let likelihoods = as_likelihoods(&tables);

        let mut sequential = Suite::new(prior.clone()).unwrap();
        for obs in &likelihoods {
            sequential.update(obs);
        }

        let mut shuffled = Suite::new(prior.clone())
            .unwrap()
            .with_policy(UpdatePolicy::seeded(seed));
        shuffled.multi_update(&likelihoods);

        let mut periodic = Suite::new(prior).unwrap().with_policy(in_order(Some(cadence)));
        periodic.multi_update(&likelihoods);

        for (h, m) in sequential.pmf().iter() {
            prop_assert!((m - shuffled.prob(h)).abs() < 1e-9);
            prop_assert!((m - periodic.prob(h)).abs() < 1e-9);
        }
    }

    #[test]
    fn same_seed_same_posterior(
        prior in prior_strategy(),
        tables in observations_strategy(),
        seed in any::<u64>(),
    ) {
        let likelihoods = as_likelihoods(&tables);
        let mut a = Suite::new(prior.clone()).unwrap().with_policy(UpdatePolicy::seeded(seed));
        let mut b = Suite::new(prior).unwrap().with_policy(UpdatePolicy::seeded(seed));
        let sa = a.multi_update(&likelihoods);
        let sb = b.multi_update(&likelihoods);
        prop_assert_eq!(a, b);
        prop_assert_eq!(sa, sb);
    }

    #[test]
    fn credible_interval_is_ordered_and_nested(
        prior in prior_strategy(),
        narrow in 1.0f64..50.0,
        extra in 0.0f64..50.0,
    ) {
        let suite = Suite::new(prior).unwrap();
        let (nlo, nhi) = credible_interval(suite.pmf(), narrow).unwrap();
        let (wlo, whi) = suite.credible_interval(narrow + extra).unwrap();
        prop_assert!(nlo <= nhi);
        prop_assert!(wlo <= nlo && nhi <= whi);
    }

    #[test]
    fn mean_lies_within_hypothesis_range(prior in prior_strategy()) {
        let suite = Suite::new(prior).unwrap();
        let min = *suite.hypotheses().next().unwrap() as f64;
        let max = *suite.hypotheses().last().unwrap() as f64;
        let mean = suite.mean().unwrap();
        prop_assert!(min - 1e-9 <= mean && mean <= max + 1e-9);
    }
}
