use crate::core::{DegenerateVariance, FilterConfig, Observation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Normal,
    Anomaly,
}

/// Outcome of scoring one observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub decision: GateDecision,
    /// Signed z-score per feature.
    pub scores: Vec<f64>,
    /// Largest absolute z-score.
    pub max_score: f64,
}

impl Verdict {
    #[inline]
    pub fn is_anomaly(&self) -> bool {
        self.decision == GateDecision::Anomaly
    }
}

/// Standardized-deviation test against a fixed tolerance.
///
/// An observation is anomalous when any feature's `|z|` exceeds the
/// tolerance, with `z = (x - mean) / (dispersion / sqrt(W))`.
///
/// A feature whose standard error is at or below `min_std_err` cannot be
/// judged and scores 0, except under [`DegenerateVariance::Floor`] on a flat
/// window, where the standard error is clamped to `min_std_err`.
#[derive(Debug, Clone)]
pub struct AnomalyGate {
    tolerance: f64,
    sqrt_window: f64,
    min_std_err: f64,
    degenerate: DegenerateVariance,
}

impl AnomalyGate {
    pub fn new(
        window_length: usize,
        tolerance: f64,
        min_std_err: f64,
        degenerate: DegenerateVariance,
    ) -> Self {
        Self {
            tolerance,
            sqrt_window: (window_length.max(1) as f64).sqrt(),
            min_std_err,
            degenerate,
        }
    }

    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(
            config.timesteps,
            config.tolerance,
            config.min_std_err,
            config.degenerate,
        )
    }

    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Scores `obs` against `mean` using the dispersion as it stood before
    /// the current step. `flat` marks the features whose window values were
    /// all identical before the push.
    pub fn evaluate(
        &self,
        obs: &Observation,
        mean: &[f64],
        prior_dispersion: &[f64],
        flat: &[bool],
    ) -> Verdict {
        let scores: Vec<f64> = obs
            .values()
            .iter()
            .zip(mean)
            .zip(prior_dispersion)
            .zip(flat)
            .map(|(((&x, &m), &sigma), &is_flat)| {
                self.z_score(x - m, sigma / self.sqrt_window, is_flat)
            })
            .collect();

        let max_score = scores.iter().fold(0.0_f64, |acc, z| acc.max(z.abs()));
        let decision = if scores.iter().any(|z| z.abs() > self.tolerance) {
            GateDecision::Anomaly
        } else {
            GateDecision::Normal
        };

        Verdict {
            decision,
            scores,
            max_score,
        }
    }

    #[inline]
    fn z_score(&self, deviation: f64, std_err: f64, flat: bool) -> f64 {
        if std_err > self.min_std_err {
            return deviation / std_err;
        }
        match self.degenerate {
            DegenerateVariance::Floor if flat => deviation / self.min_std_err,
            _ => 0.0,
        }
    }
}
