use crate::evaluation::Snapshot;
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CurveFormat {
    Csv,
    Tsv,
    Json,
}

/// Ordered history of [`Snapshot`]s taken while a task runs.
#[derive(Debug, Default, Clone)]
pub struct FilterCurve {
    entries: Vec<Snapshot>,
}

impl FilterCurve {
    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push(snapshot)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<Snapshot> {
        self.entries.last().copied()
    }

    pub fn entries(&self) -> &[Snapshot] {
        &self.entries
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: CurveFormat) -> Result<(), Error> {
        match fmt {
            CurveFormat::Csv => self.export_with_delimiter(path, ','),
            CurveFormat::Tsv => self.export_with_delimiter(path, '\t'),
            CurveFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        writeln!(
            w,
            "instances_seen{d}accepted{d}rejected{d}acceptance_rate{d}mean_loss{d}seconds",
            d = delimiter
        )?;
        for s in &self.entries {
            writeln!(
                w,
                "{}{d}{}{d}{}{d}{:.12}{d}{:.12}{d}{:.6}",
                s.instances_seen,
                s.accepted,
                s.rejected,
                s.acceptance_rate,
                s.mean_loss,
                s.seconds,
                d = delimiter
            )?;
        }
        w.flush()
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut w, &self.entries)?;
        writeln!(w)?;
        w.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::str::FromStr;
    use tempfile::NamedTempFile;

    fn snap(seen: u64, accepted: u64, rejected: u64, rate: f64, loss: f64, secs: f64) -> Snapshot {
        Snapshot {
            instances_seen: seen,
            accepted,
            rejected,
            acceptance_rate: rate,
            mean_loss: loss,
            seconds: secs,
        }
    }

    fn two_rows() -> FilterCurve {
        let mut fc = FilterCurve::default();
        fc.push(snap(10, 6, 2, 0.75, 0.5, 2.5));
        fc.push(snap(20, 15, 3, 0.833333333333, 0.25, 3.0));
        fc
    }

    #[test]
    fn default_is_empty_and_latest_none() {
        let fc = FilterCurve::default();
        assert!(fc.is_empty());
        assert!(fc.latest().is_none());
    }

    #[test]
    fn push_and_latest() {
        let fc = two_rows();
        assert_eq!(fc.len(), 2);
        let last = fc.latest().unwrap();
        assert_eq!(last.instances_seen, 20);
        assert_eq!(last.rejected, 3);
        assert_eq!(fc.entries()[0].accepted, 6);
    }

    #[test]
    fn export_csv_with_two_rows() {
        let tf = NamedTempFile::new().unwrap();
        two_rows().export(tf.path(), CurveFormat::Csv).unwrap();

        let got = fs::read_to_string(tf.path()).unwrap();
        let exp = "\
instances_seen,accepted,rejected,acceptance_rate,mean_loss,seconds
10,6,2,0.750000000000,0.500000000000,2.500000
20,15,3,0.833333333333,0.250000000000,3.000000
";
        assert_eq!(got, exp);
    }

    #[test]
    fn export_tsv_header() {
        let tf = NamedTempFile::new().unwrap();
        FilterCurve::default()
            .export(tf.path(), CurveFormat::Tsv)
            .unwrap();
        let got = fs::read_to_string(tf.path()).unwrap();
        assert_eq!(
            got,
            "instances_seen\taccepted\trejected\tacceptance_rate\tmean_loss\tseconds\n"
        );
    }

    #[test]
    fn export_json_round_trips_through_serde() {
        let tf = NamedTempFile::new().unwrap();
        two_rows().export(tf.path(), CurveFormat::Json).unwrap();

        let got: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(tf.path()).unwrap()).unwrap();
        let rows = got.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["instances_seen"], 10);
        assert_eq!(rows[1]["mean_loss"], 0.25);
    }

    #[test]
    fn json_writes_nan_as_null() {
        let mut fc = FilterCurve::default();
        fc.push(snap(0, 0, 0, f64::NAN, f64::NAN, 0.0));
        let tf = NamedTempFile::new().unwrap();
        fc.export(tf.path(), CurveFormat::Json).unwrap();
        let got: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(tf.path()).unwrap()).unwrap();
        assert!(got[0]["acceptance_rate"].is_null());
    }

    #[test]
    fn format_parses_from_lowercase() {
        assert_eq!(CurveFormat::from_str("tsv").unwrap(), CurveFormat::Tsv);
        assert_eq!(CurveFormat::Json.to_string(), "json");
    }
}
