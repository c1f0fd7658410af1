use crate::core::Observation;

/// Downstream encoder/decoder fed by the stream filter.
///
/// Implementations map an observation sequence to a reconstruction of the
/// same shape and must be a pure function of their input as far as the
/// filter is concerned. The filter hands over one observation per step,
/// real or placeholder.
pub trait Autoencoder: Send {
    fn encode_and_decode(&self, sequence: &[Observation]) -> Vec<Observation>;
}

/// Reconstructs every observation as itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityAutoencoder;

impl Autoencoder for IdentityAutoencoder {
    fn encode_and_decode(&self, sequence: &[Observation]) -> Vec<Observation> {
        sequence.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_preserves_shape_and_values() {
        let seq = vec![
            Observation::new(vec![1.0, 2.0]),
            Observation::placeholder(2),
        ];
        let out = IdentityAutoencoder.encode_and_decode(&seq);
        assert_eq!(out, seq);
    }
}
