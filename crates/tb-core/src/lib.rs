//! Bayesian suite engine.
//!
//! A [`Suite`] holds a normalized prior over a fixed hypothesis space and
//! updates it with observations through the [`Likelihood`] contract. Queries
//! (mean, percentiles, credible intervals, maximum likelihood) delegate to the
//! underlying [`Pmf`].
//!
//! ```
//! use tb_core::Suite;
//!
//! let mut dice = Suite::new([4i64, 6, 8, 12, 20].map(|s| (s, 1.0))).unwrap();
//! dice.update(&|sides: &i64| if *sides >= 6 { 1.0 / *sides as f64 } else { 0.0 });
//! assert_eq!(dice.prob(&4), 0.0);
//! assert_eq!(dice.maximum_likelihood().unwrap(), 6);
//! ```

pub mod interval;
pub mod likelihood;
pub mod logging;
pub mod prior;
pub mod suite;

pub use interval::{credible_interval, credible_interval_percentiles};
pub use likelihood::{Likelihood, LikelihoodTable};
pub use logging::{build_subscriber, init_logging};
pub use prior::pmf_from_spec;
pub use suite::{Suite, UpdateSummary};

pub use tb_common::{Error, NumericKey, Result, Value};
pub use tb_config::{EngineConfig, ObservationOrder, PriorSpec, UpdatePolicy};
pub use tb_math::{power_law, triangle, uniform, Beta, Bound, Cdf, Pmf};
