use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{MAX_NUM_OF_SPLITS, Matcher, ModelError, NumOfSplits};

/// Scheduling configuration, discriminated by the `type` field.
///
/// Each variant describes one kind of test universe together with the lane counts it should be spread over.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Config {
    /// Go packages, all split with the same lane count.
    Golang(GolangConfig),
    /// Solidity test files, split independently per directory.
    Solidity(SolidityConfig),
}

impl Config {
    /// Returns the `type` discriminant as written in the config file.
    pub fn kind(&self) -> &'static str {
        match self {
            Config::Golang(_) => "golang",
            Config::Solidity(_) => "solidity",
        }
    }

    /// Check the invariants the scheduler relies on.
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            Config::Golang(cfg) => cfg.validate(),
            Config::Solidity(cfg) => cfg.validate(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GolangConfig {
    pub num_of_splits: NumOfSplits,
}

impl GolangConfig {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.num_of_splits == 0 {
            return Err(ModelError::InvalidSplitCount(self.num_of_splits));
        }
        if self.num_of_splits > MAX_NUM_OF_SPLITS {
            return Err(ModelError::TooManySplits {
                got: self.num_of_splits,
                max: MAX_NUM_OF_SPLITS,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolidityConfig {
    /// Root that every `dir` is resolved against.
    pub base_path: PathBuf,
    /// Per-directory lane settings, scheduled in the listed order.
    pub splits: Vec<SolidityDir>,
}

impl SolidityConfig {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.splits.is_empty() {
            return Err(ModelError::NoSolidityDirs);
        }
        self.splits.iter().try_for_each(SolidityDir::validate)
    }
}

/// Lane settings for one directory below the Solidity base path.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolidityDir {
    /// Directory relative to [`SolidityConfig::base_path`].
    pub dir: String,
    pub num_of_splits: NumOfSplits,
    /// Substrings identifying known-slow tests.
    ///
    /// Stale entries that no longer match anything are tolerated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slow_tests: Vec<Matcher>,
}

impl SolidityDir {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.dir.trim().is_empty() {
            return Err(ModelError::EmptyDir);
        }
        if self.num_of_splits == 0 {
            return Err(ModelError::InvalidDirSplitCount {
                dir: self.dir.clone(),
                got: self.num_of_splits,
            });
        }
        if self.num_of_splits > MAX_NUM_OF_SPLITS {
            return Err(ModelError::TooManyDirSplits {
                dir: self.dir.clone(),
                got: self.num_of_splits,
                max: MAX_NUM_OF_SPLITS,
            });
        }
        Ok(())
    }
}
