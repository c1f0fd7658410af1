use crate::core::{
    AnomalyGate, AnomalyReport, FilterConfig, FilterError, MomentEstimator, Observation,
    SlidingWindow, WindowOnReject,
};
use crate::model::Autoencoder;
use log::{debug, warn};

/// Lifecycle of a filter: history is gathered first, gating starts once the
/// window is full and never stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Filling,
    Steady,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Not enough history yet; nothing was judged.
    Filling,
    Accepted,
    Rejected,
}

impl Decision {
    #[inline]
    pub fn is_accepted(self) -> bool {
        self == Decision::Accepted
    }
}

/// Result of one [`StreamFilter::process`] step.
#[derive(Debug, Clone)]
pub struct FilterOutput {
    /// 1-based position of the observation in the stream.
    pub step: u64,
    /// Phase the step was processed in.
    pub phase: Phase,
    pub decision: Decision,
    /// What the model received: the observation itself or a placeholder.
    pub forwarded: Observation,
    pub reconstruction: Observation,
    pub report: Option<AnomalyReport>,
}

/// Online gate in front of an [`Autoencoder`].
///
/// Each call to [`process`](Self::process) runs one full step (window
/// update, moment update, gate decision, model call) before returning, so
/// the estimator is never observed half-updated.
pub struct StreamFilter {
    config: FilterConfig,
    window: SlidingWindow,
    moments: MomentEstimator,
    gate: AnomalyGate,
    model: Box<dyn Autoencoder>,
    steps: u64,
}

impl StreamFilter {
    pub fn new(config: FilterConfig, model: Box<dyn Autoencoder>) -> Result<Self, FilterError> {
        config.validate()?;
        Ok(Self {
            window: SlidingWindow::new(config.timesteps, config.features),
            moments: MomentEstimator::new(config.features),
            gate: AnomalyGate::from_config(&config),
            model,
            steps: 0,
            config,
        })
    }

    pub fn process(&mut self, obs: Observation) -> Result<FilterOutput, FilterError> {
        obs.validate(self.config.features)?;
        self.steps += 1;

        if !self.window.is_full() {
            self.window.push(obs);
            if self.window.is_full() {
                debug!("window full after {} observations, gating starts", self.steps);
            }
            return Ok(self.forward(Phase::Filling, Decision::Filling, None, None));
        }

        let snapshot = self.window.snapshot_mean();
        let flat = self.window.flat_features();
        let Some(evicted) = self.window.push(obs.clone()) else {
            return Ok(self.forward(Phase::Filling, Decision::Filling, None, None));
        };
        let tentative = self.moments.update(&evicted, &snapshot);
        let verdict = self
            .gate
            .evaluate(&obs, &snapshot, self.moments.dispersion(), &flat);

        if verdict.is_anomaly() {
            warn!(
                "anomaly at step {}: max |z| = {:.6} > {} for {:?}",
                self.steps,
                verdict.max_score,
                self.gate.tolerance(),
                obs.values()
            );
            self.moments.rollback();
            if self.config.on_reject == WindowOnReject::Impute {
                self.window.replace_newest(Observation::new(snapshot));
            }
            let report = AnomalyReport::new(self.steps, obs, verdict);
            Ok(self.forward(Phase::Steady, Decision::Rejected, None, Some(report)))
        } else {
            self.moments.commit(tentative);
            Ok(self.forward(Phase::Steady, Decision::Accepted, Some(obs), None))
        }
    }

    fn forward(
        &self,
        phase: Phase,
        decision: Decision,
        accepted: Option<Observation>,
        report: Option<AnomalyReport>,
    ) -> FilterOutput {
        let forwarded =
            accepted.unwrap_or_else(|| Observation::placeholder(self.config.features));
        let reconstruction = self
            .model
            .encode_and_decode(std::slice::from_ref(&forwarded))
            .into_iter()
            .next()
            .unwrap_or_else(|| Observation::placeholder(self.config.features));
        FilterOutput {
            step: self.steps,
            phase,
            decision,
            forwarded,
            reconstruction,
            report,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.window.is_full() {
            Phase::Steady
        } else {
            Phase::Filling
        }
    }

    #[inline]
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    #[inline]
    pub fn window(&self) -> &SlidingWindow {
        &self.window
    }

    #[inline]
    pub fn moments(&self) -> &MomentEstimator {
        &self.moments
    }

    /// Observations successfully processed so far.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }
}
