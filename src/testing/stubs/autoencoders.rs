use crate::core::Observation;
use crate::model::Autoencoder;
use std::sync::{Arc, Mutex};

/// Reconstructs everything as the zero vector.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroAutoencoder;

impl Autoencoder for ZeroAutoencoder {
    fn encode_and_decode(&self, sequence: &[Observation]) -> Vec<Observation> {
        sequence
            .iter()
            .map(|o| Observation::placeholder(o.len()))
            .collect()
    }
}

/// Identity model that remembers every observation it was fed.
pub struct RecordingAutoencoder {
    inputs: Arc<Mutex<Vec<Observation>>>,
}

#[derive(Clone)]
pub struct RecordingHandle {
    inputs: Arc<Mutex<Vec<Observation>>>,
}

impl RecordingAutoencoder {
    pub fn new() -> (Self, RecordingHandle) {
        let inputs = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                inputs: Arc::clone(&inputs),
            },
            RecordingHandle { inputs },
        )
    }
}

impl Autoencoder for RecordingAutoencoder {
    fn encode_and_decode(&self, sequence: &[Observation]) -> Vec<Observation> {
        if let Ok(mut seen) = self.inputs.lock() {
            seen.extend(sequence.iter().cloned());
        }
        sequence.to_vec()
    }
}

impl RecordingHandle {
    pub fn inputs(&self) -> Vec<Observation> {
        self.inputs.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.inputs.lock().map(|v| v.len()).unwrap_or(0)
    }
}
