mod autoencoder;
mod loss;

pub use autoencoder::{Autoencoder, IdentityAutoencoder};
pub use loss::ReconstructionLoss;
