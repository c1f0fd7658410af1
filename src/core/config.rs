use crate::core::FilterError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

pub const DEFAULT_TOLERANCE: f64 = 0.1;
pub const DEFAULT_MIN_STD_ERR: f64 = 1e-9;

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_min_std_err() -> f64 {
    DEFAULT_MIN_STD_ERR
}

/// How the gate scores a feature whose standard error is at or below
/// `min_std_err`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DegenerateVariance {
    /// Clamp the standard error up to `min_std_err` when the window holds a
    /// single repeated value; otherwise score the feature as zero.
    #[default]
    Floor,
    /// Score the feature as zero: no judgement is possible, so accept.
    Accept,
}

/// What happens to a rejected observation's slot in the window.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum WindowOnReject {
    /// Overwrite the slot with the window mean taken before the push.
    #[default]
    Impute,
    /// Keep the raw rejected value in the window.
    Retain,
}

/// Construction-time parameters of a [`StreamFilter`](crate::core::StreamFilter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FilterConfig {
    #[schemars(
        title = "Timesteps",
        description = "Window length W, also the encoder sequence length",
        range(min = 1)
    )]
    pub timesteps: usize,

    #[schemars(
        title = "Features",
        description = "Dimension F of every observation",
        range(min = 1)
    )]
    pub features: usize,

    #[serde(default = "default_tolerance")]
    #[schemars(
        title = "Tolerance",
        description = "Largest accepted absolute z-score",
        range(min = 0.0),
        default = "default_tolerance"
    )]
    pub tolerance: f64,

    #[serde(default = "default_min_std_err")]
    #[schemars(
        title = "Minimum Standard Error",
        description = "Standard errors at or below this value are degenerate",
        default = "default_min_std_err"
    )]
    pub min_std_err: f64,

    #[serde(default)]
    #[schemars(
        title = "Degenerate Variance",
        description = "Scoring policy when the standard error is degenerate"
    )]
    pub degenerate: DegenerateVariance,

    #[serde(default)]
    #[schemars(
        title = "Window On Reject",
        description = "Whether a rejected value stays in the window"
    )]
    pub on_reject: WindowOnReject,
}

impl FilterConfig {
    pub fn new(timesteps: usize, features: usize) -> Self {
        Self {
            timesteps,
            features,
            tolerance: DEFAULT_TOLERANCE,
            min_std_err: DEFAULT_MIN_STD_ERR,
            degenerate: DegenerateVariance::default(),
            on_reject: WindowOnReject::default(),
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_min_std_err(mut self, min_std_err: f64) -> Self {
        self.min_std_err = min_std_err;
        self
    }

    pub fn with_degenerate(mut self, policy: DegenerateVariance) -> Self {
        self.degenerate = policy;
        self
    }

    pub fn with_on_reject(mut self, policy: WindowOnReject) -> Self {
        self.on_reject = policy;
        self
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        if self.timesteps == 0 {
            return Err(FilterError::InvalidTimesteps);
        }
        if self.features == 0 {
            return Err(FilterError::InvalidFeatures);
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(FilterError::InvalidTolerance(self.tolerance));
        }
        if !(self.min_std_err.is_finite() && self.min_std_err > 0.0) {
            return Err(FilterError::InvalidStdErrFloor(self.min_std_err));
        }
        Ok(())
    }
}
