//! Core math modules.

pub mod beta;
pub mod cdf;
pub mod distributions;
pub mod pmf;
pub mod stable;
