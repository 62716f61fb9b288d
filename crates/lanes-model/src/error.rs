use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("numOfSplits must be at least 1, got {0}")]
    InvalidSplitCount(usize),
    #[error("numOfSplits must be at least 1 for dir {dir:?}, got {got}")]
    InvalidDirSplitCount { dir: String, got: usize },
    #[error("numOfSplits must be at most {max}, got {got}")]
    TooManySplits { got: usize, max: usize },
    #[error("numOfSplits for dir {dir:?} must be at most {max}, got {got}")]
    TooManyDirSplits { dir: String, got: usize, max: usize },
    #[error("solidity config has no splits")]
    NoSolidityDirs,
    #[error("solidity split dir must not be empty")]
    EmptyDir,
}
