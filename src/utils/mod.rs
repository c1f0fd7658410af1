pub mod file_parsing;
pub mod math;
