use clap::{CommandFactory, Parser};
use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::loader::load_cue_file;
use crate::parser::parse_production;
use crate::report::{write_report, ReportMode};

/// Cuelist - prints which microphones each cue of a production turns on
#[derive(Parser, Debug)]
#[command(name = "cuelist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the cue list XML file
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Anything after the path is accepted and ignored
    #[arg(value_name = "EXTRA", hide = true)]
    extra: Vec<String>,

    /// Report style (default: numeric, or the config file's report.mode)
    #[arg(short, long, value_enum)]
    mode: Option<ReportMode>,

    /// TOML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        // Usage goes to stdout and nothing is read.
        let Some(path) = self.path else {
            println!("{}", Cli::command().render_usage());
            return Ok(());
        };

        if !self.extra.is_empty() {
            log::debug!("ignoring extra arguments: {:?}", self.extra);
        }

        let config = match &self.config {
            Some(config_path) => Config::load(config_path)?,
            None => Config::default(),
        };
        let mode = config.resolve_mode(self.mode);
        log::debug!("report mode: {:?}", mode);

        report_file(&path, mode, &mut io::stdout().lock())
    }
}

/// Load, parse and report a single cue list file
pub fn report_file<W: io::Write>(
    path: &Path,
    mode: ReportMode,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = load_cue_file(path)?;
    let production =
        parse_production(&bytes).map_err(|e| format!("failed to parse XML: {e}"))?;

    write_report(&production, mode, out)?;

    Ok(())
}
