mod filter_curve;
mod snapshot;

pub use filter_curve::{CurveFormat, FilterCurve};
pub use snapshot::Snapshot;
