//! Run a filter task described by a JSON file.
//!
//! ```bash
//! streamgate task.json --curve curve.csv
//! streamgate --print-schema
//! ```

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use streamgate::evaluation::{CurveFormat, ranked_records};
use streamgate::params::build::{build_task, load_task_params};
use streamgate::params::choices::{StreamKind, task_schema};
use strum::{EnumMessage, IntoEnumIterator};

#[derive(Parser)]
#[command(name = "streamgate")]
#[command(about = "Gate anomalous observations out of a stream")]
#[command(version)]
struct Args {
    /// Task description (JSON)
    #[arg(value_name = "TASK")]
    task: Option<PathBuf>,

    /// Where to export the snapshot curve
    #[arg(long, value_name = "PATH")]
    curve: Option<PathBuf>,

    /// Curve format: csv, tsv or json
    #[arg(long, default_value = "csv")]
    format: CurveFormat,

    /// Number of top-ranked anomalies to print after the run
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Print the task JSON schema and exit
    #[arg(long)]
    print_schema: bool,

    /// List the available stream types and exit
    #[arg(long)]
    list_streams: bool,

    /// Log filter decisions to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    log::set_logger(&LOGGER).map_err(|e| anyhow::anyhow!("logger init failed: {e}"))?;
    log::set_max_level(level);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    if args.print_schema {
        println!("{}", serde_json::to_string_pretty(&task_schema())?);
        return Ok(());
    }

    if args.list_streams {
        for kind in StreamKind::iter() {
            let name: &'static str = kind.into();
            println!(
                "{name:<20} {}: {}",
                kind.get_message().unwrap_or_default(),
                kind.get_detailed_message().unwrap_or_default()
            );
        }
        return Ok(());
    }

    let Some(task_path) = args.task else {
        bail!("no task file given (see --help)");
    };

    let params = load_task_params(&task_path)
        .with_context(|| format!("reading {}", task_path.display()))?;
    let anomaly_log = params.anomaly_log.clone();

    let (tx, rx) = mpsc::channel();
    let mut task = build_task(params)?.with_progress(tx);

    let printer = thread::spawn(move || {
        for snapshot in rx {
            println!("{snapshot}");
        }
    });

    task.run().context("running filter task")?;
    let curve = task.curve().clone();
    drop(task);
    if printer.join().is_err() {
        bail!("progress printer panicked");
    }

    if let Some(path) = args.curve {
        curve
            .export(&path, args.format)
            .with_context(|| format!("exporting curve to {}", path.display()))?;
        println!("curve written to {}", path.display());
    }

    if let Some(log) = anomaly_log {
        let ranked = ranked_records(&log.path, ',', log.skip_records)
            .with_context(|| format!("reading {}", log.path.display()))?;
        println!("top anomalies ({} logged):", ranked.len());
        for record in ranked.iter().take(args.top) {
            println!(
                "  step={} score={:.3e} p={:.3e} at {}",
                record.step, record.max_score, record.p_value, record.detected_at
            );
        }
    }

    Ok(())
}
