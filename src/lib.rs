//! Online anomaly gating for multivariate streams.
//!
//! A [`StreamFilter`](core::StreamFilter) keeps a sliding window of recent
//! observations and incremental moment estimates, rejects observations whose
//! deviation from the window mean is implausible, and forwards everything
//! else to an [`Autoencoder`](model::Autoencoder).

pub mod core;
pub mod evaluation;
pub mod model;
pub mod params;
pub mod streams;
pub mod tasks;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
