use crate::core::{Decision, FilterOutput};
use crate::evaluation::evaluators::filter_evaluator::{
    ACCEPTANCE_RATE, ACCEPTED, FILLING, MEAN_LOSS, MEAN_REJECTED_SCORE, REJECTED,
};
use crate::evaluation::{Estimator, FilterEvaluator, Measurement};

/// Basic online filter evaluator.
///
/// Tracks:
/// - step counts per [`Decision`];
/// - acceptance rate over gated (steady-phase) steps;
/// - mean reconstruction loss over steps that reached the model with real data;
/// - mean max `|z|` of rejected observations.
///
/// Rates are NaN until at least one relevant step has been seen.
#[derive(Debug, Default, Clone)]
pub struct BasicFilterEvaluator<E: Estimator + Default> {
    filling: u64,
    accepted: u64,
    rejected: u64,
    acceptance: E,
    loss: E,
    rejected_score: E,
}

impl<E: Estimator + Default> BasicFilterEvaluator<E> {
    pub fn new() -> Self {
        Self {
            filling: 0,
            accepted: 0,
            rejected: 0,
            acceptance: E::default(),
            loss: E::default(),
            rejected_score: E::default(),
        }
    }

    #[inline]
    pub fn accepted(&self) -> u64 {
        self.accepted
    }

    #[inline]
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    #[inline]
    pub fn filling(&self) -> u64 {
        self.filling
    }
}

impl<E: Estimator + Default> FilterEvaluator for BasicFilterEvaluator<E> {
    fn reset(&mut self) {
        *self = Self::new();
    }

    fn add_result(&mut self, output: &FilterOutput, loss: f64) {
        match output.decision {
            Decision::Filling => self.filling += 1,
            Decision::Accepted => {
                self.accepted += 1;
                self.acceptance.add(1.0);
                self.loss.add(loss);
            }
            Decision::Rejected => {
                self.rejected += 1;
                self.acceptance.add(0.0);
                if let Some(report) = &output.report {
                    self.rejected_score.add(report.max_score);
                }
            }
        }
    }

    fn performance(&self) -> Vec<Measurement> {
        vec![
            Measurement::new(FILLING, self.filling as f64),
            Measurement::new(ACCEPTED, self.accepted as f64),
            Measurement::new(REJECTED, self.rejected as f64),
            Measurement::new(ACCEPTANCE_RATE, self.acceptance.estimation()),
            Measurement::new(MEAN_LOSS, self.loss.estimation()),
            Measurement::new(MEAN_REJECTED_SCORE, self.rejected_score.estimation()),
        ]
    }
}
