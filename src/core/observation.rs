use crate::core::FilterError;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// One arrival in the input stream: a fixed-length vector of reals.
///
/// Observations are immutable once built. The all-zero vector doubles as the
/// placeholder forwarded downstream in place of suppressed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    values: Vec<f64>,
}

impl Observation {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Zero-valued placeholder of dimension `features`.
    pub fn placeholder(features: usize) -> Self {
        Self {
            values: vec![0.0; features],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// True when every component is exactly zero.
    pub fn is_placeholder(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }

    /// Checks dimension and finiteness against the filter contract.
    pub fn validate(&self, features: usize) -> Result<(), FilterError> {
        if self.values.len() != features {
            return Err(FilterError::DimensionMismatch {
                expected: features,
                found: self.values.len(),
            });
        }
        match self.values.iter().position(|v| !v.is_finite()) {
            Some(index) => Err(FilterError::NonFiniteValue { index }),
            None => Ok(()),
        }
    }
}

impl From<Vec<f64>> for Observation {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl Index<usize> for Observation {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}
