mod error;
mod streams;
mod task;

pub use error::BuildError;

pub use streams::build_stream;
pub use task::{build_task, load_task_params};
