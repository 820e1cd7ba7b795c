// Copyright (c) 2025 The Turnstile Authors
// SPDX-License-Identifier: MIT

//! Message types for dispatch core lifecycle and boundary events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Engine constructed and adopted by a dispatcher.
///
/// # Log Level
/// `debug!` - lifecycle detail
pub struct EngineConstructed<'a> {
    pub engine: &'a str,
}

impl Display for EngineConstructed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Constructed {} engine", self.engine)
    }
}

impl StructuredLog for EngineConstructed<'_> {
    fn log(&self) {
        tracing::debug!(engine = self.engine, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("engine_constructed", span_name = name, engine = self.engine)
    }
}

/// Engine construction failed; dispatcher construction was aborted.
///
/// # Log Level
/// `error!` - failure requiring attention
pub struct EngineConstructionFailed<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for EngineConstructionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Engine construction failed: {}", self.error)
    }
}

impl StructuredLog for EngineConstructionFailed<'_> {
    fn log(&self) {
        tracing::error!(error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "engine_construction_failed",
            span_name = name,
            error = %self.error,
        )
    }
}

/// Request processed; responses returned to the host.
///
/// # Log Level
/// `debug!` - per-call boundary event
///
/// # Example
/// ```
/// use turnstile::observability::messages::dispatch::RequestHandled;
///
/// let msg = RequestHandled {
///     engine: "loopback",
///     request_bytes: 16,
///     response_count: 2,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct RequestHandled<'a> {
    pub engine: &'a str,
    pub request_bytes: usize,
    pub response_count: usize,
}

impl Display for RequestHandled<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Handled {} byte request on {} engine: {} responses",
            self.request_bytes, self.engine, self.response_count
        )
    }
}

impl StructuredLog for RequestHandled<'_> {
    fn log(&self) {
        tracing::debug!(
            engine = self.engine,
            request_bytes = self.request_bytes,
            response_count = self.response_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "request_handled",
            span_name = name,
            engine = self.engine,
            request_bytes = self.request_bytes,
            response_count = self.response_count,
        )
    }
}

/// Engine reported an error for a request; the error was absorbed into an
/// in-band error message rather than propagated to the host.
///
/// # Log Level
/// `error!` - failure requiring attention
pub struct RequestFailed<'a> {
    pub engine: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for RequestFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Request failed on {} engine, returning in-band error: {}",
            self.engine, self.error
        )
    }
}

impl StructuredLog for RequestFailed<'_> {
    fn log(&self) {
        tracing::error!(
            engine = self.engine,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "request_failed",
            span_name = name,
            engine = self.engine,
            error = %self.error,
        )
    }
}

/// Poll drained pending notifications to the host.
///
/// # Log Level
/// `debug!` - per-call boundary event
///
/// # Example
/// ```
/// use turnstile::observability::messages::dispatch::NotificationsDrained;
///
/// let msg = NotificationsDrained {
///     engine: "loopback",
///     message_count: 3,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct NotificationsDrained<'a> {
    pub engine: &'a str,
    pub message_count: usize,
}

impl Display for NotificationsDrained<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Drained {} pending notifications from {} engine",
            self.message_count, self.engine
        )
    }
}

impl StructuredLog for NotificationsDrained<'_> {
    fn log(&self) {
        tracing::debug!(
            engine = self.engine,
            message_count = self.message_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "notifications_drained",
            span_name = name,
            engine = self.engine,
            message_count = self.message_count,
        )
    }
}
