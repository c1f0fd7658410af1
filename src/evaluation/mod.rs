mod anomaly_log;
mod estimators;
mod evaluators;
mod measurement;
mod preview;

pub use anomaly_log::{AnomalyLog, AnomalyRecord, ranked_records};
pub use estimators::{BasicEstimator, Estimator};
pub use evaluators::*;
pub use measurement::Measurement;
pub use preview::{CurveFormat, FilterCurve, Snapshot};
