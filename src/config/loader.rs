// Copyright (c) 2025 The Turnstile Authors
// SPDX-License-Identifier: MIT

use crate::config::consts::{MAX_BACKLOG_CAPACITY, MIN_BACKLOG_CAPACITY};
use crate::errors::{ConfigError, ValidationError};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Top-level configuration for a dispatch runtime.
///
/// Typically loaded from a YAML file by an embedding host that wants to
/// tune the engine without recompiling. Every field defaults; hosts that
/// skip the file entirely use [`Config::default`].
///
/// # Example
/// ```yaml
/// engine:
///   backlog_capacity: 1024
///   options:
///     worker_threads: "2"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Engine construction options, handed to `Engine::create`.
///
/// # Fields
/// * `backlog_capacity` - bound on the pending-notification backlog; when a
///   publish would exceed it, the oldest staged notification is evicted.
///   Unbounded if absent.
/// * `options` - engine-specific settings this layer passes through
///   uninterpreted; the payload schema and the engine's knobs are equally
///   opaque here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    pub backlog_capacity: Option<usize>,
    #[serde(default)]
    pub options: HashMap<String, String>,
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a config from a YAML file
///
/// Loads the configuration and checks that every configured value falls
/// within its supported bounds.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    validate_config(&cfg)?;
    Ok(cfg)
}

fn validate_config(cfg: &Config) -> Result<(), ValidationError> {
    if let Some(capacity) = cfg.engine.backlog_capacity {
        if capacity < MIN_BACKLOG_CAPACITY {
            return Err(ValidationError::BacklogCapacityTooSmall {
                configured: capacity,
                minimum: MIN_BACKLOG_CAPACITY,
            });
        }
        if capacity > MAX_BACKLOG_CAPACITY {
            return Err(ValidationError::BacklogCapacityTooLarge {
                configured: capacity,
                maximum: MAX_BACKLOG_CAPACITY,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
engine:
  backlog_capacity: 512
  options:
    worker_threads: "2"
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.engine.backlog_capacity, Some(512));
        assert_eq!(
            cfg.engine.options.get("worker_threads").map(String::as_str),
            Some("2")
        );
    }

    #[test]
    fn missing_fields_default() {
        let cfg: Config = serde_yaml::from_str("engine: {}").unwrap();
        assert_eq!(cfg.engine.backlog_capacity, None);
        assert!(cfg.engine.options.is_empty());
    }

    #[test]
    fn test_load_and_validate_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "engine:\n  backlog_capacity: 64\n").unwrap();

        let cfg = load_and_validate_config(file.path()).expect("config should validate");
        assert_eq!(cfg.engine.backlog_capacity, Some(64));
    }

    #[test]
    fn test_load_and_validate_zero_capacity() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "engine:\n  backlog_capacity: 0\n").unwrap();

        let err = load_and_validate_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("below the minimum"));
    }

    #[test]
    fn test_load_unparseable_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "engine: [this is not a mapping").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config("definitely/not/a/real/config.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
