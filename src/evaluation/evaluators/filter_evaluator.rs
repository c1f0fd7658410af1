use crate::core::FilterOutput;
use crate::evaluation::Measurement;
use std::collections::HashMap;

/// Online summary of what a stream filter let through.
///
/// Consumes one [`FilterOutput`] per step together with the reconstruction
/// loss computed for it, and exposes aggregated metrics via [`performance`].
pub trait FilterEvaluator {
    /// Clears accumulated metrics.
    fn reset(&mut self);

    /// Feeds one processed step and its reconstruction loss.
    fn add_result(&mut self, output: &FilterOutput, loss: f64);

    /// Returns a snapshot of current metrics.
    fn performance(&self) -> Vec<Measurement>;
}

pub trait FilterEvaluatorExt {
    /// Returns `(name, Some(value)|None)` for each requested metric, preserving order.
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>;

    fn metric(&self, name: &str) -> Option<f64> {
        self.metrics([name]).into_iter().next().and_then(|(_, v)| v)
    }
}

impl<T: FilterEvaluator + ?Sized> FilterEvaluatorExt for T {
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let ms = self.performance();
        let map: HashMap<_, _> = ms.into_iter().map(|m| (m.name, m.value)).collect();
        names
            .into_iter()
            .map(|n| (n.to_string(), map.get(n).copied()))
            .collect()
    }
}

pub const FILLING: &str = "filling";
pub const ACCEPTED: &str = "accepted";
pub const REJECTED: &str = "rejected";
pub const ACCEPTANCE_RATE: &str = "acceptance_rate";
pub const MEAN_LOSS: &str = "mean_loss";
pub const MEAN_REJECTED_SCORE: &str = "mean_rejected_score";
