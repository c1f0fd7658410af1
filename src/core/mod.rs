mod config;
mod error;
mod filter;
mod gate;
mod moments;
mod observation;
mod report;
mod window;

pub use config::{DEFAULT_MIN_STD_ERR, DEFAULT_TOLERANCE, DegenerateVariance, FilterConfig, WindowOnReject};
pub use error::FilterError;
pub use filter::{Decision, FilterOutput, Phase, StreamFilter};
pub use gate::{AnomalyGate, GateDecision, Verdict};
pub use moments::{MomentEstimator, MomentUpdate};
pub use observation::Observation;
pub use report::AnomalyReport;
pub use window::SlidingWindow;
