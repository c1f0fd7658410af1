//! Durable, append-only log of rejected observations.
//!
//! One delimited record per rejection:
//! `max_score,step,detected_at,p_value,v0,...,vF-1`. The leading score makes
//! the file trivially sortable for offline review; [`ranked_records`] does
//! exactly that.

use crate::core::AnomalyReport;
use log::warn;
use std::cmp::Ordering;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Error, Write};
use std::path::{Path, PathBuf};

pub struct AnomalyLog {
    path: PathBuf,
    delimiter: char,
    writer: BufWriter<File>,
    written: u64,
}

impl AnomalyLog {
    /// Opens `path` for appending, creating it if needed.
    pub fn open<P: AsRef<Path>>(path: P, delimiter: char) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            delimiter,
            writer: BufWriter::new(file),
            written: 0,
        })
    }

    /// Appends one record and flushes it to the file.
    pub fn append(&mut self, report: &AnomalyReport) -> Result<(), Error> {
        let d = self.delimiter;
        write!(
            self.writer,
            "{}{d}{}{d}{}{d}{}",
            report.max_score,
            report.step,
            report.detected_at.to_rfc3339(),
            report.p_value
        )?;
        for v in report.observation.values() {
            write!(self.writer, "{d}{v}")?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        self.written += 1;
        Ok(())
    }

    /// Records appended through this handle.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// One parsed line of an anomaly log.
#[derive(Debug, Clone, PartialEq)]
pub struct AnomalyRecord {
    pub max_score: f64,
    pub step: u64,
    pub detected_at: String,
    pub p_value: f64,
    pub observation: Vec<f64>,
}

impl AnomalyRecord {
    fn parse(line: &str, delimiter: char) -> Option<Self> {
        let mut fields = line.trim().split(delimiter);
        let max_score = fields.next()?.trim().parse().ok()?;
        let step = fields.next()?.trim().parse().ok()?;
        let detected_at = fields.next()?.trim().to_string();
        let p_value = fields.next()?.trim().parse().ok()?;
        let observation = fields
            .map(|f| f.trim().parse::<f64>().ok())
            .collect::<Option<Vec<_>>>()?;
        Some(Self {
            max_score,
            step,
            detected_at,
            p_value,
            observation,
        })
    }
}

/// Reads an anomaly log, drops the first `skip` records and returns the rest
/// ordered by score, highest first.
///
/// The earliest rejections usually come from the warm-up period, where the
/// dispersion estimate is still degenerate; `skip` discards them.
pub fn ranked_records<P: AsRef<Path>>(
    path: P,
    delimiter: char,
    skip: usize,
) -> Result<Vec<AnomalyRecord>, Error> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match AnomalyRecord::parse(&line, delimiter) {
            Some(r) => records.push(r),
            None => warn!("{}:{}: malformed anomaly record skipped", path.display(), i + 1),
        }
    }

    let mut ranked: Vec<AnomalyRecord> = records.into_iter().skip(skip).collect();
    ranked.sort_by(|a, b| {
        b.max_score
            .partial_cmp(&a.max_score)
            .unwrap_or(Ordering::Equal)
    });
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GateDecision, Observation, Verdict};
    use std::fs;
    use tempfile::NamedTempFile;

    fn report(step: u64, values: &[f64], score: f64) -> AnomalyReport {
        AnomalyReport::new(
            step,
            Observation::new(values.to_vec()),
            Verdict {
                decision: GateDecision::Anomaly,
                scores: vec![score; values.len()],
                max_score: score,
            },
        )
    }

    #[test]
    fn appends_one_line_per_report() {
        let tf = NamedTempFile::new().unwrap();
        let mut log = AnomalyLog::open(tf.path(), ',').unwrap();
        log.append(&report(6, &[50.0, 2.5], 49.0)).unwrap();
        log.append(&report(9, &[-3.0, 0.0], 7.5)).unwrap();
        assert_eq!(log.written(), 2);

        let text = fs::read_to_string(tf.path()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("49,6,"));
        assert!(lines[0].ends_with(",50,2.5"));
        assert!(lines[1].starts_with("7.5,9,"));
    }

    #[test]
    fn reopening_appends() {
        let tf = NamedTempFile::new().unwrap();
        AnomalyLog::open(tf.path(), ',')
            .unwrap()
            .append(&report(1, &[1.0], 2.0))
            .unwrap();
        AnomalyLog::open(tf.path(), ',')
            .unwrap()
            .append(&report(2, &[1.0], 3.0))
            .unwrap();
        let text = fs::read_to_string(tf.path()).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn ranked_skips_then_sorts_descending() {
        let tf = NamedTempFile::new().unwrap();
        let mut log = AnomalyLog::open(tf.path(), ',').unwrap();
        log.append(&report(1, &[1.0], 1e9)).unwrap();
        log.append(&report(5, &[2.0], 3.0)).unwrap();
        log.append(&report(8, &[3.0], 12.0)).unwrap();
        log.append(&report(9, &[4.0], 7.0)).unwrap();

        let ranked = ranked_records(tf.path(), ',', 1).unwrap();
        let steps: Vec<u64> = ranked.iter().map(|r| r.step).collect();
        assert_eq!(steps, vec![8, 9, 5]);
        assert_eq!(ranked[0].observation, vec![3.0]);
        assert_eq!(ranked[0].max_score, 12.0);
    }

    #[test]
    fn ranked_ignores_malformed_lines() {
        let tf = NamedTempFile::new().unwrap();
        fs::write(
            tf.path(),
            "4,2,2024-01-01T00:00:00+00:00,0.1,1\ngarbage\n\n9,3,x,0.0,2,3\n",
        )
        .unwrap();
        let ranked = ranked_records(tf.path(), ',', 0).unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].step, 3);
        assert_eq!(ranked[0].observation, vec![2.0, 3.0]);
    }
}
