// Copyright (c) 2025 The Turnstile Authors
// SPDX-License-Identifier: MIT

use std::fmt;

use thiserror::Error;

/// Errors that can occur while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid YAML for the expected configuration shape
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The configuration parsed but failed validation
    #[error("invalid config: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The configured backlog capacity is below the supported minimum
    BacklogCapacityTooSmall {
        /// The capacity the config asked for
        configured: usize,
        /// The smallest capacity the backlog supports
        minimum: usize,
    },
    /// The configured backlog capacity exceeds the supported maximum
    BacklogCapacityTooLarge {
        /// The capacity the config asked for
        configured: usize,
        /// The largest capacity the backlog supports
        maximum: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::BacklogCapacityTooSmall {
                configured,
                minimum,
            } => {
                write!(
                    f,
                    "backlog_capacity {} is below the minimum of {}",
                    configured, minimum
                )
            }
            ValidationError::BacklogCapacityTooLarge {
                configured,
                maximum,
            } => {
                write!(
                    f,
                    "backlog_capacity {} exceeds the maximum of {}",
                    configured, maximum
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
