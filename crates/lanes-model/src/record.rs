use serde::{Deserialize, Serialize};

use crate::NumOfSplits;

/// One lane of a Go package run, as published to the CI job matrix.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GolangSplit {
    /// 1-based lane index.
    pub idx: usize,
    /// Display label, e.g. `"2/5"`.
    pub id: String,
    /// Space separated import paths, ready for `go test`.
    pub pkgs: String,
}

/// One lane of a Solidity test run, as published to the CI job matrix.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoliditySplit {
    /// 1-based lane index within its directory.
    pub idx: usize,
    /// Display label, e.g. `"v0.8 2/5"`.
    pub id: String,
    pub dir: String,
    pub num_of_splits: NumOfSplits,
    /// Space separated test file paths.
    pub tests: String,
    /// Same files as a brace glob for coverage tooling.
    pub coverage_tests: String,
}
