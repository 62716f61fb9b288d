//! Deterministic assignment of test items to parallel CI lanes.
//!
//! [`sieve`] classifies items as slow or normal, [`simple_split`] deals them round robin over the lanes and [`plan`] runs both and labels the result.
//! Everything here is pure: identical inputs produce identical lanes on every machine.
pub mod error;
pub use error::CoreError;

mod sieve;
pub use sieve::{Sieved, sieve};

mod split;
pub use split::simple_split;

mod plan;
pub use plan::{Split, SplitSet, plan};
