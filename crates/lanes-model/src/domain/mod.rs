/// Opaque identifier of one unit of scheduled work.
///
/// A Go import path (`github.com/org/pkg/foo`) or a test file path relative to the Solidity base path (`v0.8/Foo1.test.ts`).
/// Two items are the same item iff their strings are equal.
pub type Item = String;

/// Literal, case-sensitive substring used to flag items as slow.
pub type Matcher = String;

/// Number of parallel lanes requested for one scheduling run.
pub type NumOfSplits = usize;

/// Upper bound on lanes per request; GitHub Actions caps a job matrix at 256 jobs.
pub const MAX_NUM_OF_SPLITS: NumOfSplits = 256;
