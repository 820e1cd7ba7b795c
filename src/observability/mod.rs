// Copyright (c) 2025 The Turnstile Authors
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Message types for all diagnostic logging at the dispatch boundary live
//! under [`messages`], following a struct-per-event pattern with `Display`
//! implementations so that log text is defined in one place rather than
//! scattered as format strings.
//!
//! The crate itself only emits `tracing` events; whether and how they are
//! collected is the embedding host's decision. Hosts that want a plain
//! stderr subscriber can call [`init`] once at startup.

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG`.
///
/// Intended for embedding hosts and examples that have no subscriber of
/// their own. Safe to call more than once; later calls are ignored.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
