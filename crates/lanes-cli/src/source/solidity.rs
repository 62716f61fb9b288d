use std::path::{Path, PathBuf};

use lanes_model::Item;
use tracing::{debug, instrument};
use walkdir::WalkDir;

use crate::{error::SourceError, source::ItemSource};

pub const TEST_FILE_SUFFIX: &str = ".test.ts";

/// Test files below `<base_path>/<dir>`, named relative to `base_path`.
///
/// Paths use `/` separators and are sorted, so the listing does not depend on
/// how the filesystem happens to order directory entries.
#[derive(Debug, Clone)]
pub struct SolidityTests {
    base_path: PathBuf,
    dir: String,
}

impl SolidityTests {
    pub fn new(base_path: impl Into<PathBuf>, dir: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            dir: dir.into(),
        }
    }

    fn root(&self) -> PathBuf {
        self.base_path.join(&self.dir)
    }
}

impl ItemSource for SolidityTests {
    fn name(&self) -> &str {
        &self.dir
    }

    #[instrument(level = "debug", skip(self), fields(dir = %self.dir))]
    fn list(&self) -> Result<Vec<Item>, SourceError> {
        let root = self.root();
        if !root.is_dir() {
            return Err(SourceError::MissingDir(root));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&root) {
            let entry = entry.map_err(|source| SourceError::Walk {
                path: root.clone(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if !name.ends_with(TEST_FILE_SUFFIX) {
                continue;
            }
            if let Some(rel) = relative_item(&self.base_path, entry.path()) {
                files.push(rel);
            }
        }

        files.sort();
        debug!(count = files.len(), "listed solidity test files");
        Ok(files)
    }
}

fn relative_item(base: &Path, path: &Path) -> Option<Item> {
    let rel = path.strip_prefix(base).ok()?;
    let parts: Vec<_> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn touch(base: &Path, rel: &str) {
        let path = base.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn lists_test_files_recursively_and_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "v0.8/dev/eolpe/Foo.test.ts");
        touch(tmp.path(), "v0.8/Foo1.test.ts");
        touch(tmp.path(), "v0.8/bar.test.ts");
        touch(tmp.path(), "v0.8/helpers.ts");
        touch(tmp.path(), "v0.8/README.md");
        touch(tmp.path(), "v0.7/Other.test.ts");

        let files = SolidityTests::new(tmp.path(), "v0.8").list().unwrap();
        assert_eq!(
            files,
            vec![
                "v0.8/Foo1.test.ts",
                "v0.8/bar.test.ts",
                "v0.8/dev/eolpe/Foo.test.ts",
            ]
        );
    }

    #[test]
    fn nested_dir_keeps_full_relative_path() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "v0.8/automation/Registry.test.ts");

        let src = SolidityTests::new(tmp.path(), "v0.8/automation");
        assert_eq!(src.name(), "v0.8/automation");
        assert_eq!(src.list().unwrap(), vec!["v0.8/automation/Registry.test.ts"]);
    }

    #[test]
    fn empty_dir_is_not_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("v0.6")).unwrap();

        let files = SolidityTests::new(tmp.path(), "v0.6").list().unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn missing_dir_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = SolidityTests::new(tmp.path(), "v0.9").list().unwrap_err();
        assert!(matches!(err, SourceError::MissingDir(p) if p.ends_with("v0.9")));
    }
}
