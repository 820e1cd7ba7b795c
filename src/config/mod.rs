// Copyright (c) 2025 The Turnstile Authors
// SPDX-License-Identifier: MIT

mod loader;
mod runtime;

pub mod consts;

pub use loader::{load_and_validate_config, load_config, Config, EngineConfig};
pub use runtime::RuntimeBuilder;
