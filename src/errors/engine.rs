// Copyright (c) 2025 The Turnstile Authors
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors an engine may report across the adapter boundary.
///
/// Every variant except [`EngineError::Construction`] is recoverable from
/// the host's point of view: the dispatch core converts it into an
/// engine-encoded error message inside the returned batch instead of letting
/// it escape as a fault, because a propagated native fault is undefined or
/// fatal in several embedding runtimes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The request buffer could not be interpreted by the engine.
    #[error("malformed request: {reason}")]
    MalformedRequest { reason: String },

    /// The engine failed internally while processing an otherwise
    /// acceptable request.
    #[error("engine failure: {reason}")]
    Internal { reason: String },

    /// The engine could not be constructed. Aborts construction of the
    /// owning dispatcher; no partially initialized instance is reachable.
    #[error("engine construction failed: {reason}")]
    Construction { reason: String },
}
