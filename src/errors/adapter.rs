// Copyright (c) 2025 The Turnstile Authors
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised by host binding adapters while marshaling bytes.
///
/// These occur before a request reaches the canonical boundary (or after a
/// batch has left it), so they surface in the host's own error idiom rather
/// than as in-band engine messages.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The host-native representation could not be decoded into a canonical
    /// binary buffer.
    #[error("failed to decode host buffer: {reason}")]
    Decode { reason: String },
}
