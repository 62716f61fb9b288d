use std::{path::Path, process::ExitCode};

use anyhow::{Context, Result};
use lanes_core::{SplitSet, plan};
use lanes_model::{Config, GolangConfig, GolangSplit, SolidityConfig, SoliditySplit};
use tracing::{error, info};

use crate::{
    args::Cli,
    config::load_config,
    output::{self, DirSplits, Publisher},
    source::{GoPackages, ItemSource, SolidityTests},
};

/// Scheduled lanes of one run, shaped after the config kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Splits {
    Golang(SplitSet),
    Solidity(Vec<DirSplits>),
}

impl Splits {
    /// Number of lanes over all directories.
    pub fn len(&self) -> usize {
        match self {
            Splits::Golang(set) => set.num_of_splits(),
            Splits::Solidity(dirs) => dirs.iter().map(|d| d.set.num_of_splits()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn summary(&self) -> String {
        match self {
            Splits::Golang(set) => output::golang_summary(set),
            Splits::Solidity(dirs) => output::solidity_summary(dirs),
        }
    }

    pub fn golang_records(&self) -> Vec<GolangSplit> {
        match self {
            Splits::Golang(set) => output::golang_records(set),
            Splits::Solidity(_) => Vec::new(),
        }
    }

    pub fn solidity_records(&self) -> Vec<SoliditySplit> {
        match self {
            Splits::Golang(_) => Vec::new(),
            Splits::Solidity(dirs) => dirs
                .iter()
                .flat_map(|d| output::solidity_records(&d.dir, &d.set))
                .collect(),
        }
    }

    pub fn publish(&self, publisher: &Publisher) -> Result<()> {
        let summary = self.summary();
        match self {
            Splits::Golang(_) => publisher.publish(&self.golang_records(), &summary)?,
            Splits::Solidity(_) => publisher.publish(&self.solidity_records(), &summary)?,
        }
        Ok(())
    }
}

pub fn schedule_golang(cfg: &GolangConfig, source: impl ItemSource) -> Result<SplitSet> {
    let packages = source
        .list()
        .with_context(|| format!("failed to list items via {}", source.name()))?;
    info!(packages = packages.len(), num_of_splits = cfg.num_of_splits, "splitting go packages");

    Ok(plan(packages, &[] as &[&str], cfg.num_of_splits, None)?)
}

pub fn schedule_solidity(cfg: &SolidityConfig) -> Result<Vec<DirSplits>> {
    let mut dirs = Vec::with_capacity(cfg.splits.len());
    for sub in &cfg.splits {
        let source = SolidityTests::new(&cfg.base_path, &sub.dir);
        let files = source
            .list()
            .with_context(|| format!("failed to list tests in {}", sub.dir))?;
        info!(
            dir = %sub.dir,
            tests = files.len(),
            slow_matchers = sub.slow_tests.len(),
            num_of_splits = sub.num_of_splits,
            "splitting solidity tests"
        );

        let set = plan(files, &sub.slow_tests, sub.num_of_splits, Some(sub.dir.as_str()))
            .with_context(|| format!("failed to split {}", sub.dir))?
            .map_items(|item| output::with_base_path(&cfg.base_path, &item));
        dirs.push(DirSplits {
            dir: sub.dir.clone(),
            set,
        });
    }
    Ok(dirs)
}

pub fn schedule(cfg: &Config, go_root: &Path) -> Result<Splits> {
    match cfg {
        Config::Golang(cfg) => schedule_golang(cfg, GoPackages::new(go_root)).map(Splits::Golang),
        Config::Solidity(cfg) => schedule_solidity(cfg).map(Splits::Solidity),
    }
}

/// Load the config named by `cli`, schedule and publish.
pub fn run(cli: &Cli) -> Result<()> {
    let cfg = load_config(&cli.config)?;
    info!(kind = cfg.kind(), "scheduling test splits");

    let splits = schedule(&cfg, &cli.go_root)?;
    let publisher = Publisher {
        github_output: cli.github_output.clone(),
        step_summary: cli.step_summary.clone(),
    };
    splits.publish(&publisher)?;
    info!(splits = splits.len(), "done");
    Ok(())
}

/// Map the outcome of [`run`] to the process exit code.
///
/// Failures are reported once, through the logger, with the full context chain.
pub fn report(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("split-tests failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}
