//! Rendering of split sets for the CI job matrix and the run summary.
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use lanes_core::SplitSet;
use lanes_model::{GolangSplit, Item, SoliditySplit};
use serde::Serialize;
use tracing::info;

use crate::error::OutputError;

pub fn golang_records(set: &SplitSet) -> Vec<GolangSplit> {
    set.iter()
        .map(|split| GolangSplit {
            idx: split.index(),
            id: split.id().to_string(),
            pkgs: split.shell_args(),
        })
        .collect()
}

/// Records for one Solidity directory; `set` items must already carry the base path.
pub fn solidity_records(dir: &str, set: &SplitSet) -> Vec<SoliditySplit> {
    set.iter()
        .map(|split| SoliditySplit {
            idx: split.index(),
            id: split.id().to_string(),
            dir: dir.to_string(),
            num_of_splits: set.num_of_splits(),
            tests: split.shell_args(),
            coverage_tests: split.brace_glob(),
        })
        .collect()
}

/// Prefix a base-relative test path with the base path, `/` separated.
pub fn with_base_path(base_path: &Path, item: &str) -> String {
    let base = base_path.to_string_lossy();
    let base = base.trim_end_matches('/');
    if base.is_empty() || base == "." {
        item.to_string()
    } else {
        format!("{base}/{item}")
    }
}

/// Lanes scheduled for one Solidity directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirSplits {
    pub dir: String,
    pub set: SplitSet,
}

pub fn golang_summary(set: &SplitSet) -> String {
    let mut out = String::from("| Split | Packages |\n| --- | --- |\n");
    for split in set {
        out.push_str(&format!("| {} | {} |\n", escape(split.id()), cell(split.items())));
    }
    out
}

pub fn solidity_summary(dirs: &[DirSplits]) -> String {
    let mut out = String::from("| Split | Dir | Tests |\n| --- | --- | --- |\n");
    for DirSplits { dir, set } in dirs {
        for split in set {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                escape(split.id()),
                escape(dir),
                cell(split.items())
            ));
        }
    }
    out
}

fn cell(items: &[Item]) -> String {
    if items.is_empty() {
        return "_none_".to_string();
    }
    items.iter().map(|item| escape(item)).collect::<Vec<_>>().join("<br>")
}

// `|` ends a markdown table cell.
fn escape(text: &str) -> String {
    text.replace('|', "\\|")
}

/// `splits=<compact json>`, the line format of `$GITHUB_OUTPUT`.
pub fn output_line<T: Serialize>(records: &[T]) -> Result<String, OutputError> {
    Ok(format!("splits={}\n", serde_json::to_string(records)?))
}

/// Where rendered results go.
#[derive(Debug, Clone, Default)]
pub struct Publisher {
    pub github_output: Option<PathBuf>,
    pub step_summary: Option<PathBuf>,
}

impl Publisher {
    /// Append the output line to `github_output` (stdout if unset) and the summary to `step_summary` if set.
    pub fn publish<T: Serialize>(&self, records: &[T], summary: &str) -> Result<(), OutputError> {
        let line = output_line(records)?;
        match &self.github_output {
            Some(path) => {
                append(path, &line)?;
                info!(path = %path.display(), splits = records.len(), "wrote splits output");
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(line.as_bytes())
                    .map_err(|source| OutputError::Write {
                        path: PathBuf::from("<stdout>"),
                        source,
                    })?;
            }
        }

        if let Some(path) = &self.step_summary {
            append(path, summary)?;
            info!(path = %path.display(), "wrote step summary");
        }
        Ok(())
    }
}

fn append(path: &Path, content: &str) -> Result<(), OutputError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    file.write_all(content.as_bytes())
        .map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })
}
