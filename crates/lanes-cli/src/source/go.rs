use std::{path::PathBuf, process::Command};

use lanes_model::Item;
use tracing::{debug, instrument};

use crate::{error::SourceError, source::ItemSource};

/// Packages reported by `go list ./...` for a module root.
#[derive(Debug, Clone)]
pub struct GoPackages {
    root: PathBuf,
    program: String,
}

impl GoPackages {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            program: "go".to_string(),
        }
    }

    /// Use a different `go` binary.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

impl ItemSource for GoPackages {
    fn name(&self) -> &str {
        "go list"
    }

    #[instrument(level = "debug", skip(self), fields(root = %self.root.display()))]
    fn list(&self) -> Result<Vec<Item>, SourceError> {
        let output = Command::new(&self.program)
            .args(["list", "./..."])
            .current_dir(&self.root)
            .output()
            .map_err(|source| SourceError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SourceError::Command {
                command: format!("{} list ./...", self.program),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let packages = parse_go_list(&String::from_utf8_lossy(&output.stdout));
        debug!(count = packages.len(), "listed go packages");
        Ok(packages)
    }
}

/// One package per non-empty line, in the order `go list` printed them.
pub fn parse_go_list(stdout: &str) -> Vec<Item> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_order_and_drops_blank_lines() {
        let out = parse_go_list(
            "github.com/org/repo/core\n\ngithub.com/org/repo/core/cmd\r\n  github.com/org/repo/tools  \n",
        );
        assert_eq!(
            out,
            vec![
                "github.com/org/repo/core",
                "github.com/org/repo/core/cmd",
                "github.com/org/repo/tools",
            ]
        );
    }

    #[test]
    fn parse_empty_output() {
        assert!(parse_go_list("").is_empty());
        assert!(parse_go_list("\n\n").is_empty());
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let src = GoPackages::new(".").with_program("definitely-not-a-go-binary");
        let err = src.list().unwrap_err();
        assert!(matches!(err, SourceError::Spawn { ref program, .. } if program == "definitely-not-a-go-binary"));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_a_command_error() {
        // `false` ignores its arguments and exits 1.
        let src = GoPackages::new(".").with_program("false");
        let err = src.list().unwrap_err();
        assert!(matches!(err, SourceError::Command { .. }));
    }
}
