//! Orchestration around the lane splitter: load the config, resolve the
//! items to schedule, and publish the resulting splits to GitHub Actions.
pub mod args;
pub mod config;
pub mod error;
pub mod output;
pub mod run;
pub mod source;

pub use args::Cli;
pub use error::{OutputError, SourceError};
pub use run::{Splits, report, run};
