use crate::core::StreamFilter;
use crate::evaluation::{
    ACCEPTANCE_RATE, ACCEPTED, AnomalyLog, FilterCurve, FilterEvaluator, FilterEvaluatorExt,
    MEAN_LOSS, REJECTED, Snapshot,
};
use crate::model::ReconstructionLoss;
use crate::streams::Stream;
use log::{info, warn};
use std::io::{Error, ErrorKind};
use std::sync::mpsc::Sender;
use std::time::Instant;

/// Drives a [`Stream`] through a [`StreamFilter`], scoring reconstructions
/// and sampling progress.
pub struct FilterTask {
    filter: StreamFilter,
    stream: Box<dyn Stream>,
    evaluator: Box<dyn FilterEvaluator>,
    loss: ReconstructionLoss,
    anomaly_log: Option<AnomalyLog>,

    curve: FilterCurve,

    max_instances: Option<u64>,
    max_seconds: Option<u64>,
    sample_frequency: u64,

    processed: u64,
    skipped: u64,
    start_time: Instant,

    progress_tx: Option<Sender<Snapshot>>,
}

impl FilterTask {
    pub fn new(
        filter: StreamFilter,
        stream: Box<dyn Stream>,
        evaluator: Box<dyn FilterEvaluator>,
        max_instances: Option<u64>,
        max_seconds: Option<u64>,
        sample_frequency: u64,
    ) -> Result<Self, Error> {
        if sample_frequency == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "sample_frequency must be > 0",
            ));
        }
        let expected = filter.config().features;
        if stream.features() != expected {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!(
                    "stream produces {} features, filter expects {expected}",
                    stream.features()
                ),
            ));
        }

        Ok(Self {
            filter,
            stream,
            evaluator,
            loss: ReconstructionLoss,
            anomaly_log: None,
            curve: FilterCurve::default(),
            max_instances,
            max_seconds,
            sample_frequency,
            processed: 0,
            skipped: 0,
            start_time: Instant::now(),
            progress_tx: None,
        })
    }
}

impl FilterTask {
    pub fn with_progress(mut self, tx: Sender<Snapshot>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn with_anomaly_log(mut self, log: AnomalyLog) -> Self {
        self.anomaly_log = Some(log);
        self
    }

    pub fn run(&mut self) -> Result<(), Error> {
        self.start_time = Instant::now();
        info!(
            "filter task started: timesteps={}, features={}, tolerance={}",
            self.filter.config().timesteps,
            self.filter.config().features,
            self.filter.config().tolerance
        );

        while self.stream.has_more_observations() {
            if let Some(n) = self.max_instances {
                if self.processed >= n {
                    break;
                }
            }
            if let Some(s) = self.max_seconds {
                if self.start_time.elapsed().as_secs() >= s {
                    break;
                }
            }
            let Some(observation) = self.stream.next_observation() else {
                break;
            };
            self.processed += 1;

            let output = match self.filter.process(observation) {
                Ok(output) => output,
                Err(e) => {
                    warn!("observation {} skipped: {e}", self.processed);
                    self.skipped += 1;
                    continue;
                }
            };

            let loss = self.loss.compute(&output.forwarded, &output.reconstruction);
            self.evaluator.add_result(&output, loss);

            if let (Some(log), Some(report)) = (self.anomaly_log.as_mut(), output.report.as_ref()) {
                log.append(report)?;
            }

            if self.processed % self.sample_frequency == 0 {
                self.push_snapshot();
            }
        }

        self.push_snapshot();
        info!(
            "filter task finished: {} observations, {} skipped",
            self.processed, self.skipped
        );
        Ok(())
    }

    pub fn curve(&self) -> &FilterCurve {
        &self.curve
    }

    pub fn filter(&self) -> &StreamFilter {
        &self.filter
    }

    /// Observations pulled from the stream.
    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// Observations the filter refused as invalid input.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    fn push_snapshot(&mut self) {
        let metric = |name| self.evaluator.metric(name).unwrap_or(f64::NAN);
        let snapshot = Snapshot {
            instances_seen: self.processed,
            accepted: metric(ACCEPTED) as u64,
            rejected: metric(REJECTED) as u64,
            acceptance_rate: metric(ACCEPTANCE_RATE),
            mean_loss: metric(MEAN_LOSS),
            seconds: self.start_time.elapsed().as_secs_f64(),
        };

        if let Some(tx) = &self.progress_tx {
            let _ = tx.send(snapshot);
        }

        self.curve.push(snapshot);
    }
}
