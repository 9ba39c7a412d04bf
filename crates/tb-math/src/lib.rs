//! Discrete probability primitives for the Bayesian suite engine.

pub mod math;

pub use math::beta::Beta;
pub use math::cdf::Cdf;
pub use math::distributions::{power_law, triangle, uniform, Bound};
pub use math::pmf::Pmf;
pub use math::stable::*;
