// Copyright (c) 2025 The Turnstile Authors
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each type carries the fields of one loggable event and implements
//! `Display` for human-readable output plus [`StructuredLog`] for
//! field-level `tracing` emission.
//!
//! Messages are organized by subsystem:
//!
//! * `dispatch` - dispatch core lifecycle and boundary events
//! * `backlog` - pending-notification queue events

pub mod backlog;
pub mod dispatch;

use tracing::Span;

/// Common interface for structured log emission.
pub trait StructuredLog {
    /// Emit this message at its natural level with structured fields.
    fn log(&self);

    /// Create a span carrying this message's fields.
    fn span(&self, name: &str) -> Span;
}
