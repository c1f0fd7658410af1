use crate::core::Observation;
use std::io::Error;

/// Pull-based source of [`Observation`]s.
///
/// Implementations may be finite (files) or unbounded (generators). Every
/// observation yielded must have exactly [`features`] components for the
/// lifetime of the stream.
pub trait Stream {
    /// Dimension of every observation this stream produces.
    fn features(&self) -> usize;

    /// Indicates whether the stream *may* produce more observations.
    ///
    /// If it returns `false`, a subsequent call to [`next_observation`] must
    /// return `None`.
    fn has_more_observations(&self) -> bool;

    /// Produces the next observation, or `None` once exhausted.
    ///
    /// Sources with malformed records may skip them and continue.
    fn next_observation(&mut self) -> Option<Observation>;

    /// Rewinds the stream to its initial state.
    ///
    /// Generators re-seed their RNG; file streams reopen the file.
    fn restart(&mut self) -> Result<(), Error>;
}
