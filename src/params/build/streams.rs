use crate::params::build::BuildError;
use crate::params::choices::{CsvFileParameters, GaussianParameters, StreamChoice};
use crate::streams::generators::GaussianGenerator;
use crate::streams::{CsvFileStream, Stream};
use std::convert::TryFrom;

impl TryFrom<GaussianParameters> for GaussianGenerator {
    type Error = BuildError;

    fn try_from(parameters: GaussianParameters) -> Result<Self, Self::Error> {
        let max_instances = parameters
            .max_instances
            .map(|v| {
                usize::try_from(v).map_err(|_| {
                    BuildError::InvalidParameter("max_instances too large for usize".into())
                })
            })
            .transpose()?;

        GaussianGenerator::new(
            parameters.means,
            parameters.std_devs,
            max_instances,
            parameters.seed,
        )?
        .with_anomalies(parameters.anomaly_rate, parameters.anomaly_magnitude)
        .map_err(BuildError::from)
    }
}

fn build_csv(parameters: CsvFileParameters, features: usize) -> Result<CsvFileStream, BuildError> {
    CsvFileStream::new(
        parameters.path,
        features,
        parameters.delimiter,
        parameters.has_header,
    )
    .map_err(BuildError::from)
}

/// Builds the observation source; `features` is the filter's dimension and
/// sizes file-backed streams.
pub fn build_stream(choice: StreamChoice, features: usize) -> Result<Box<dyn Stream>, BuildError> {
    match choice {
        StreamChoice::CsvFile(p) => Ok(Box::new(build_csv(p, features)?)),
        StreamChoice::GaussianGenerator(p) => {
            let s = GaussianGenerator::try_from(p)?;
            Ok(Box::new(s))
        }
    }
}
