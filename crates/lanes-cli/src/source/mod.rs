//! Item universes the splitter schedules over.
use lanes_model::Item;

use crate::error::SourceError;

mod go;
pub use go::{GoPackages, parse_go_list};

mod solidity;
pub use solidity::{SolidityTests, TEST_FILE_SUFFIX};

/// Something that can enumerate the items of one scheduling request.
///
/// Implementations must return items in a reproducible order: every CI job lists independently and they all have to agree.
pub trait ItemSource {
    fn name(&self) -> &str;
    fn list(&self) -> Result<Vec<Item>, SourceError>;
}
