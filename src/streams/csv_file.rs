use std::fs::File;
use std::io::{BufRead, BufReader, Error, ErrorKind, Lines};
use std::path::{Path, PathBuf};

use log::warn;

use crate::core::Observation;
use crate::streams::stream::Stream;
use crate::utils::file_parsing::parse_numeric_record;

/// Finite stream reading one observation per line of a delimited file.
///
/// Lines that are blank, non-numeric, or of the wrong width are skipped with
/// a warning.
pub struct CsvFileStream {
    path: PathBuf,
    delimiter: char,
    has_header: bool,
    features: usize,
    lines: Lines<BufReader<File>>,
    line_no: usize,
    pending: Option<Observation>,
}

impl CsvFileStream {
    pub fn new<P: AsRef<Path>>(
        path: P,
        features: usize,
        delimiter: char,
        has_header: bool,
    ) -> Result<Self, Error> {
        if features == 0 {
            return Err(Error::new(ErrorKind::InvalidInput, "features must be > 0"));
        }
        let path = path.as_ref().to_path_buf();
        let lines = Self::open(&path)?;
        let mut stream = Self {
            path,
            delimiter,
            has_header,
            features,
            lines,
            line_no: 0,
            pending: None,
        };
        stream.skip_header();
        stream.pending = stream.read_next();
        Ok(stream)
    }

    fn open(path: &Path) -> Result<Lines<BufReader<File>>, Error> {
        Ok(BufReader::new(File::open(path)?).lines())
    }

    fn skip_header(&mut self) {
        if self.has_header {
            self.line_no += 1;
            let _ = self.lines.next();
        }
    }

    fn read_next(&mut self) -> Option<Observation> {
        for line in self.lines.by_ref() {
            self.line_no += 1;
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    warn!("{}:{}: read error, stopping: {e}", self.path.display(), self.line_no);
                    return None;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match parse_numeric_record(&line, self.delimiter) {
                Some(values) if values.len() == self.features => {
                    return Some(Observation::new(values));
                }
                Some(values) => warn!(
                    "{}:{}: expected {} fields, found {}; skipped",
                    self.path.display(),
                    self.line_no,
                    self.features,
                    values.len()
                ),
                None => warn!(
                    "{}:{}: malformed record skipped",
                    self.path.display(),
                    self.line_no
                ),
            }
        }
        None
    }
}

impl Stream for CsvFileStream {
    fn features(&self) -> usize {
        self.features
    }

    fn has_more_observations(&self) -> bool {
        self.pending.is_some()
    }

    fn next_observation(&mut self) -> Option<Observation> {
        let current = self.pending.take()?;
        self.pending = self.read_next();
        Some(current)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.lines = Self::open(&self.path)?;
        self.line_no = 0;
        self.skip_header();
        self.pending = self.read_next();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(contents: &str) -> NamedTempFile {
        let mut tf = NamedTempFile::new().unwrap();
        tf.write_all(contents.as_bytes()).unwrap();
        tf.flush().unwrap();
        tf
    }

    fn drain(s: &mut CsvFileStream) -> Vec<Vec<f64>> {
        std::iter::from_fn(|| s.next_observation())
            .map(Observation::into_values)
            .collect()
    }

    #[test]
    fn reads_rows_and_skips_header() {
        let tf = file_with("a,b\n1,2\n3,4\n");
        let mut s = CsvFileStream::new(tf.path(), 2, ',', true).unwrap();
        assert!(s.has_more_observations());
        assert_eq!(drain(&mut s), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert!(!s.has_more_observations());
        assert!(s.next_observation().is_none());
    }

    #[test]
    fn skips_malformed_and_wrong_width_rows() {
        let tf = file_with("1,2\n\nx,2\n5\n6,7\n");
        let mut s = CsvFileStream::new(tf.path(), 2, ',', false).unwrap();
        assert_eq!(drain(&mut s), vec![vec![1.0, 2.0], vec![6.0, 7.0]]);
    }

    #[test]
    fn restart_rewinds() {
        let tf = file_with("1\n2\n");
        let mut s = CsvFileStream::new(tf.path(), 1, ',', false).unwrap();
        let first = drain(&mut s);
        s.restart().unwrap();
        assert_eq!(drain(&mut s), first);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = CsvFileStream::new("/definitely/not/here.csv", 1, ',', false)
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn empty_file_has_no_observations() {
        let tf = file_with("");
        let s = CsvFileStream::new(tf.path(), 3, ',', false).unwrap();
        assert!(!s.has_more_observations());
    }
}
