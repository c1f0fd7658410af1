use crate::core::Observation;
use crate::streams::Stream;
use std::io::Error;

/// Finite in-memory stream replaying a fixed list of observations.
pub struct VecStream {
    observations: Vec<Observation>,
    features: usize,
    idx: usize,
}

impl VecStream {
    pub fn new(observations: Vec<Observation>) -> Self {
        let features = observations.first().map_or(0, Observation::len);
        Self {
            observations,
            features,
            idx: 0,
        }
    }

    /// One-feature stream from plain values.
    pub fn scalar(values: Vec<f64>) -> Self {
        let observations = values.into_iter().map(|v| Observation::new(vec![v])).collect();
        Self {
            observations,
            features: 1,
            idx: 0,
        }
    }
}

impl Stream for VecStream {
    fn features(&self) -> usize {
        self.features
    }

    fn has_more_observations(&self) -> bool {
        self.idx < self.observations.len()
    }

    fn next_observation(&mut self) -> Option<Observation> {
        let obs = self.observations.get(self.idx)?.clone();
        self.idx += 1;
        Some(obs)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}
