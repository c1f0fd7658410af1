mod csv_file;
pub mod generators;
mod stream;

pub use csv_file::CsvFileStream;
pub use stream::Stream;
