//! Resurface - Main Entry Point
//!
//! Lists the notes of a directory whose RSF dateblock has a due date.
//! The actual implementation is in the `resurface` library.

use anyhow::Result;
use clap::Parser;
use resurface::validation::parse_reference_date;
use resurface::{ConfigFile, DueQuery, ScanOptions, Settings, local_date_today, scan_directory};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Display Markdown files that have resurfacing schedules defined by RSF
/// dateblocks, and which have dates which are due.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the notes
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Compare due dates to this date (YYYY-MM-DD); defaults to today
    #[arg(short = 'r', long, visible_alias = "ref")]
    reference: Option<String>,

    /// Include due dates D days before the reference date [default: 3]
    #[arg(short, long, allow_negative_numbers = true)]
    overdue: Option<i64>,

    /// Include due dates D days after the reference date [default: 0]
    #[arg(short, long, allow_negative_numbers = true)]
    advance: Option<i64>,

    /// Report all file reading results
    #[arg(short, long, overrides_with = "no_verbose")]
    verbose: bool,

    /// Only report due files, even if the settings file enables verbose
    #[arg(long, overrides_with = "verbose")]
    no_verbose: bool,

    /// Include `.txt` files in the search
    #[arg(short = 't', long, overrides_with = "no_include_txt")]
    include_txt: bool,

    /// Skip `.txt` files, even if the settings file includes them
    #[arg(long, overrides_with = "include_txt")]
    no_include_txt: bool,

    /// Limit the number of lines read per file; 0 means no limit [default: 0]
    #[arg(short, long)]
    limit: Option<usize>,

    /// Flood the console with diagnostics (stderr)
    #[arg(long)]
    enable_logging: bool,

    /// Settings file; defaults to `.rsf.toml` in DIR when present
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    fn load_settings(&self) -> Result<Settings> {
        match &self.config {
            Some(path) => ConfigFile::new(path).load_existing(),
            None => ConfigFile::in_dir(&self.dir).load(),
        }
    }

    /// Command line values win over the settings file
    fn scan_options(&self, settings: Settings) -> Result<ScanOptions> {
        let reference = match &self.reference {
            Some(date) => parse_reference_date(date)?,
            None => local_date_today(),
        };
        let query = DueQuery::new(
            reference,
            self.overdue.unwrap_or(settings.overdue),
            self.advance.unwrap_or(settings.advance),
        );
        Ok(ScanOptions {
            query,
            verbose: resolve_flag(self.verbose, self.no_verbose, settings.verbose),
            include_txt: resolve_flag(self.include_txt, self.no_include_txt, settings.include_txt),
            limit: self.limit.unwrap_or(settings.limit),
        })
    }
}

/// An explicit `--flag`/`--no-flag` wins, otherwise the settings value applies
fn resolve_flag(on: bool, off: bool, setting: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => setting,
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("resurface=debug")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.enable_logging {
        init_logging();
    }
    tracing::info!(?args, "resurface invoked");

    let settings = args.load_settings()?;
    let options = args.scan_options(settings)?;
    let report = scan_directory(&args.dir, &options)?;

    for (path, e) in &report.failures {
        eprintln!("Warning: skipped {}: {:#}", path.display(), e);
    }
    for line in &report.lines {
        println!("{}", line);
    }
    Ok(())
}
