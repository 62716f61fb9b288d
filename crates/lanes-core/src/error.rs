use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("numOfSplits must be at least 1, got {0}")]
    InvalidSplitCount(usize),
}
