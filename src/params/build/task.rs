use crate::core::StreamFilter;
use crate::evaluation::{AnomalyLog, BasicEstimator, BasicFilterEvaluator};
use crate::model::IdentityAutoencoder;
use crate::params::build::{BuildError, build_stream};
use crate::params::choices::TaskParams;
use crate::tasks::FilterTask;
use std::fs;
use std::path::Path;

pub fn load_task_params<P: AsRef<Path>>(path: P) -> Result<TaskParams, BuildError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Wires a runnable task from parameters.
///
/// The encoder is external to this crate; tasks built here forward into an
/// [`IdentityAutoencoder`].
pub fn build_task(params: TaskParams) -> Result<FilterTask, BuildError> {
    if params.sample_frequency == 0 {
        return Err(BuildError::InvalidParameter(
            "sample_frequency must be > 0".into(),
        ));
    }

    let features = params.filter.features;
    let filter = StreamFilter::new(params.filter, Box::new(IdentityAutoencoder))?;
    let stream = build_stream(params.stream, features)?;

    let task = FilterTask::new(
        filter,
        stream,
        Box::new(BasicFilterEvaluator::<BasicEstimator>::new()),
        params.max_instances,
        params.max_seconds,
        params.sample_frequency,
    )?;

    match params.anomaly_log {
        Some(log) => Ok(task.with_anomaly_log(AnomalyLog::open(log.path, ',')?)),
        None => Ok(task),
    }
}
