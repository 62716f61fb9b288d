use std::{fs, path::Path};

use anyhow::{Context, Result};
use lanes_model::Config;
use tracing::debug;

/// Read, parse and validate a split config.
///
/// Every failure here is fatal: nothing is scheduled from a config that does not load.
pub fn load_config(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg = parse_config(&raw).with_context(|| format!("invalid config {}", path.display()))?;
    debug!(kind = cfg.kind(), path = %path.display(), "config loaded");
    Ok(cfg)
}

pub fn parse_config(raw: &str) -> Result<Config> {
    let cfg: Config = serde_json::from_str(raw).context("failed to parse config JSON")?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use lanes_model::{GolangConfig, ModelError};

    use super::*;

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"type":"golang","numOfSplits":3}}"#).unwrap();

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg, Config::Golang(GolangConfig { num_of_splits: 3 }));
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = load_config(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn unsupported_type_is_fatal() {
        let err = parse_config(r#"{"type":"python","numOfSplits":3}"#).unwrap_err();
        assert!(format!("{err:#}").contains("unknown variant"));
    }

    #[test]
    fn invalid_split_count_is_fatal() {
        let err = parse_config(r#"{"type":"golang","numOfSplits":0}"#).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ModelError>(),
            Some(&ModelError::InvalidSplitCount(0))
        );
    }

    #[test]
    fn oversized_split_count_is_fatal() {
        let err = parse_config(r#"{"type":"golang","numOfSplits":1000000000000}"#).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ModelError>(),
            Some(ModelError::TooManySplits { .. })
        ));
    }
}
