// Copyright (c) 2025 The Turnstile Authors
// SPDX-License-Identifier: MIT

use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::errors::EngineError;
use crate::traits::Engine;

/// Dispatch runtime builder - constructs a ready dispatcher from
/// configuration.
///
/// Threads the engine section of a loaded [`Config`] into dispatcher
/// construction, so hosts that load config files have one obvious entry
/// point.
///
/// # Example
/// ```
/// use turnstile::backends::LoopbackEngine;
/// use turnstile::config::{Config, RuntimeBuilder};
///
/// let config = Config::default();
/// let dispatcher = RuntimeBuilder::from_config::<LoopbackEngine>(&config).unwrap();
/// # let _ = dispatcher;
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build a dispatcher over engine type `E` from a loaded configuration.
    ///
    /// Engine construction failure aborts the build; no partially
    /// initialized dispatcher is returned.
    pub fn from_config<E: Engine>(cfg: &Config) -> Result<Dispatcher<E>, EngineError> {
        Dispatcher::with_config(&cfg.engine)
    }
}
