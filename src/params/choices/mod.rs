mod stream_choice;
mod task_params;

pub use stream_choice::*;
pub use task_params::*;
