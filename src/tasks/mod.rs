mod filter_task;

pub use filter_task::FilterTask;
