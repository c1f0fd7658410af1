use serde::Serialize;

/// Named scalar produced by a [`FilterEvaluator`](crate::evaluation::FilterEvaluator).
///
/// Typical examples: `"acceptance_rate"`, `"mean_loss"`, `"rejected"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub name: String,
    pub value: f64,
}

impl Measurement {
    #[inline]
    pub fn new<N: Into<String>>(name: N, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
