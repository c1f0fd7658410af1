use std::io::{Error, ErrorKind};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::core::Observation;
use crate::streams::stream::Stream;

/// Seeded stream of independent Gaussian features with optional spikes.
///
/// Each feature `i` is drawn from `N(means[i], std_devs[i]^2)`. With
/// probability `anomaly_rate` an observation is shifted by
/// `±anomaly_magnitude * std_devs[i]` on every feature.
#[derive(Debug)]
pub struct GaussianGenerator {
    seed: u64,
    rng: StdRng,
    means: Vec<f64>,
    std_devs: Vec<f64>,
    anomaly_rate: f64,
    anomaly_magnitude: f64,
    max_instances: Option<usize>,
    produced: usize,
    injected: usize,
    last_injected: bool,
}

impl GaussianGenerator {
    pub fn new(
        means: Vec<f64>,
        std_devs: Vec<f64>,
        max_instances: Option<usize>,
        seed: u64,
    ) -> Result<Self, Error> {
        if means.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "at least one feature is required",
            ));
        }
        if means.len() != std_devs.len() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "means and std_devs must have the same length",
            ));
        }
        if means.iter().any(|m| !m.is_finite()) {
            return Err(Error::new(ErrorKind::InvalidInput, "means must be finite"));
        }
        if std_devs.iter().any(|s| !(s.is_finite() && *s >= 0.0)) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "std_devs must be finite and non-negative",
            ));
        }

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            means,
            std_devs,
            anomaly_rate: 0.0,
            anomaly_magnitude: 0.0,
            max_instances,
            produced: 0,
            injected: 0,
            last_injected: false,
        })
    }

    /// Enables spike injection.
    pub fn with_anomalies(mut self, rate: f64, magnitude: f64) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Anomaly rate must be in [0.0, 1.0]",
            ));
        }
        if !(magnitude.is_finite() && magnitude >= 0.0) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Anomaly magnitude must be finite and non-negative",
            ));
        }
        self.anomaly_rate = rate;
        self.anomaly_magnitude = magnitude;
        Ok(self)
    }

    /// Spikes injected since the last restart.
    pub fn injected(&self) -> usize {
        self.injected
    }

    /// Whether the most recent observation carried a spike.
    pub fn last_injected(&self) -> bool {
        self.last_injected
    }

    #[inline]
    fn standard_normal(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }
}

impl Stream for GaussianGenerator {
    fn features(&self) -> usize {
        self.means.len()
    }

    fn has_more_observations(&self) -> bool {
        self.max_instances.map_or(true, |max| self.produced < max)
    }

    fn next_observation(&mut self) -> Option<Observation> {
        if !self.has_more_observations() {
            return None;
        }

        let mut values = Vec::with_capacity(self.means.len());
        for i in 0..self.means.len() {
            let z = self.standard_normal();
            values.push(self.means[i] + self.std_devs[i] * z);
        }

        self.last_injected = self.anomaly_rate > 0.0 && self.rng.random_bool(self.anomaly_rate);
        if self.last_injected {
            let sign = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
            for (v, s) in values.iter_mut().zip(&self.std_devs) {
                *v += sign * self.anomaly_magnitude * s;
            }
            self.injected += 1;
        }

        self.produced += 1;
        Some(Observation::new(values))
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        self.injected = 0;
        self.last_injected = false;
        Ok(())
    }
}
