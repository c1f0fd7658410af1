use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

const DEFAULT_SEED: u64 = 42;
fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_delimiter() -> char {
    ','
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CsvFileParameters {
    #[schemars(
        with = "String",
        title = "CSV Path",
        description = "Path to a delimited file with one observation per line",
        extend("format" = "path", "x-file" = true, "x-must-exist" = true)
    )]
    pub path: PathBuf,

    #[serde(default = "default_delimiter")]
    #[schemars(
        title = "Delimiter",
        description = "Field separator",
        default = "default_delimiter"
    )]
    pub delimiter: char,

    #[serde(default)]
    #[schemars(title = "Header", description = "Skip the first line?")]
    pub has_header: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
pub struct GaussianParameters {
    #[schemars(title = "Means", description = "Per-feature mean")]
    pub means: Vec<f64>,

    #[schemars(title = "Standard Deviations", description = "Per-feature standard deviation")]
    pub std_devs: Vec<f64>,

    #[serde(default)]
    #[schemars(
        title = "Anomaly Rate",
        description = "Probability that an observation carries a spike (0.0–1.0)",
        range(min = 0.0, max = 1.0)
    )]
    pub anomaly_rate: f64,

    #[serde(default)]
    #[schemars(
        title = "Anomaly Magnitude",
        description = "Spike size in standard deviations",
        range(min = 0.0)
    )]
    pub anomaly_magnitude: f64,

    #[serde(default)]
    #[schemars(
        title = "Max Instances",
        description = "Upper bound on observations; empty = infinite"
    )]
    pub max_instances: Option<u64>,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed", default = "default_seed")]
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(StreamKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum StreamChoice {
    #[strum_discriminants(strum(
        message = "CSV File",
        detailed_message = "Read observations from a delimited file."
    ))]
    CsvFile(CsvFileParameters),

    #[strum_discriminants(strum(
        message = "Gaussian Generator",
        detailed_message = "Seeded Gaussian features with optional spikes."
    ))]
    GaussianGenerator(GaussianParameters),
}
