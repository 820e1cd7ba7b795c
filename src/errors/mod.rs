// Copyright (c) 2025 The Turnstile Authors
// SPDX-License-Identifier: MIT

mod adapter;
mod config;
mod engine;

pub use adapter::AdapterError;
pub use config::{ConfigError, ValidationError};
pub use engine::EngineError;
