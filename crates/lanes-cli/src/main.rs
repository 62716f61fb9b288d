use std::process::ExitCode;

use clap::Parser;
use lanes_cli::{Cli, report, run};
use lanes_observe::{LoggerConfig, logger_init};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let cfg = LoggerConfig {
        format: cli.log_format,
        level: cli.log_level.clone(),
        ..Default::default()
    };
    if let Err(e) = logger_init(&cfg) {
        eprintln!("split-tests: {e}");
        return ExitCode::FAILURE;
    }

    report(run(&cli))
}
