use crate::core::{Observation, Verdict};
use crate::utils::math::two_sided_p_value;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Side-channel record emitted for every rejected observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyReport {
    /// 1-based position of the observation in the stream.
    pub step: u64,
    pub observation: Observation,
    pub scores: Vec<f64>,
    pub max_score: f64,
    pub p_value: f64,
    pub detected_at: DateTime<Utc>,
}

impl AnomalyReport {
    pub fn new(step: u64, observation: Observation, verdict: Verdict) -> Self {
        Self {
            step,
            observation,
            p_value: two_sided_p_value(verdict.max_score),
            max_score: verdict.max_score,
            scores: verdict.scores,
            detected_at: Utc::now(),
        }
    }
}
