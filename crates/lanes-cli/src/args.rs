use std::path::PathBuf;

use clap::Parser;
use lanes_observe::{LoggerFormat, LoggerLevel};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "split-tests",
    version,
    about = "Deterministically split Go packages or Solidity test files across parallel CI jobs"
)]
pub struct Cli {
    /// Path to the JSON split config.
    #[arg(long, env = "CONFIG")]
    pub config: PathBuf,

    /// Directory `go list ./...` runs in (golang configs only).
    #[arg(long, env = "GO_ROOT", default_value = ".")]
    pub go_root: PathBuf,

    /// File the `splits=<json>` output line is appended to; stdout when unset.
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub github_output: Option<PathBuf>,

    /// File the markdown summary table is appended to.
    #[arg(long, env = "GITHUB_STEP_SUMMARY")]
    pub step_summary: Option<PathBuf>,

    #[arg(long, env = "LOG_FORMAT", default_value = "text")]
    pub log_format: LoggerFormat,

    /// `EnvFilter` directive, e.g. `info` or `warn,lanes_core=debug`.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LoggerLevel,
}
