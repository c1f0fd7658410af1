use crate::core::Observation;

/// Mean squared reconstruction error that is silent on placeholders.
///
/// An all-zero reconstruction scores exactly zero whatever the target is, so
/// a suppressed step carries no training signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReconstructionLoss;

impl ReconstructionLoss {
    pub fn compute(&self, target: &Observation, reconstruction: &Observation) -> f64 {
        if reconstruction.is_placeholder() || target.is_empty() {
            return 0.0;
        }
        let sum: f64 = target
            .values()
            .iter()
            .zip(reconstruction.values())
            .map(|(t, r)| (t - r) * (t - r))
            .sum();
        sum / target.len() as f64
    }
}
