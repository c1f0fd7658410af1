pub mod autoencoders;
pub mod vec_stream;

pub use autoencoders::{RecordingAutoencoder, RecordingHandle, ZeroAutoencoder};
pub use vec_stream::VecStream;
