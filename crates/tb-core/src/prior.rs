//! Prior construction from configuration.

use tb_common::{Result, Value};
use tb_config::PriorSpec;
use tb_math::{power_law, triangle, uniform, Beta, Bound, Pmf};

/// Materialize the (unnormalized) prior a spec describes.
///
/// Integer ranges are rekeyed to [`Value`] so every spec yields the same key
/// type. Duplicate explicit hypotheses accumulate their weights.
pub fn pmf_from_spec(spec: &PriorSpec) -> Result<Pmf<Value>> {
    spec.validate()?;
    let pmf = match spec {
        PriorSpec::Uniform { low, high } => rekey(&uniform(&Bound::new(*low, *high)?)),
        PriorSpec::Triangle { low, high } => rekey(&triangle(&Bound::new(*low, *high)?)),
        PriorSpec::PowerLaw { low, high, alpha } => {
            rekey(&power_law(&Bound::new(*low, *high)?, *alpha))
        }
        PriorSpec::Beta { alpha, beta, steps } => Beta::new(*alpha, *beta)?.make_pmf(*steps)?,
        PriorSpec::Explicit { hypotheses } => {
            let mut pmf = Pmf::new();
            for h in hypotheses {
                pmf.incr(Value(h.value), h.weight);
            }
            pmf
        }
    };
    Ok(pmf)
}

fn rekey(pmf: &Pmf<i64>) -> Pmf<Value> {
    pmf.map_keys(|&k| Value::from(k))
}
