//! Hypothesis key types.
//!
//! Distributions are keyed by any ordered value. Named hypotheses use strings
//! and integer hypotheses use the primitive integers directly; fractional
//! hypotheses go through [`Value`], which gives `f64` a total order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Ordered floating point hypothesis value.
///
/// Ordering and equality follow `f64::total_cmp`, so `-0.0 < 0.0` and NaN
/// sorts after every finite value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(pub f64);

impl Value {
    pub fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value(v as f64)
    }
}

impl From<Value> for f64 {
    fn from(v: Value) -> Self {
        v.0
    }
}

/// Keys that can take part in arithmetic summaries such as the mean.
pub trait NumericKey {
    fn as_f64(&self) -> f64;
}

impl NumericKey for Value {
    fn as_f64(&self) -> f64 {
        self.0
    }
}

macro_rules! numeric_key {
    ($($t:ty),*) => {
        $(
            impl NumericKey for $t {
                fn as_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

numeric_key!(i32, i64, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn value_orders_numerically() {
        let mut values = vec![Value(0.8), Value(-1.5), Value(0.2), Value(0.0)];
        values.sort();
        let raw: Vec<f64> = values.into_iter().map(Value::get).collect();
        assert_eq!(raw, vec![-1.5, 0.0, 0.2, 0.8]);
    }

    #[test]
    fn value_usable_as_map_key() {
        let mut m = BTreeMap::new();
        m.insert(Value(0.4), 0.24);
        m.insert(Value(0.2), 0.16);
        assert_eq!(m.get(&Value(0.2)), Some(&0.16));
        assert_eq!(m.keys().next(), Some(&Value(0.2)));
    }

    #[test]
    fn value_nan_is_equal_to_itself() {
        assert_eq!(Value(f64::NAN), Value(f64::NAN));
        assert!(Value(f64::NAN) > Value(f64::MAX));
    }

    #[test]
    fn value_serde_transparent() {
        let json = serde_json::to_string(&Value(0.25)).unwrap();
        assert_eq!(json, "0.25");
        let back: Value = serde_json::from_str("0.25").unwrap();
        assert_eq!(back, Value(0.25));
    }

    #[test]
    fn numeric_keys_convert() {
        assert_eq!(12i64.as_f64(), 12.0);
        assert_eq!(7u32.as_f64(), 7.0);
        assert_eq!(Value(0.5).as_f64(), 0.5);
        assert_eq!(Value::from(3i64), Value(3.0));
    }
}
