// Copyright (c) 2025 The Turnstile Authors
// SPDX-License-Identifier: MIT

//! Loopback engine: the crate's reference [`Engine`] implementation.
//!
//! Real engines interpret the request schema; this one only demonstrates
//! the dispatch contract. Each request comes back as a JSON acknowledgment
//! followed by the request bytes echoed verbatim, an empty request is
//! reported as malformed, and notifications flow through a
//! [`NotificationBacklog`] whose producer handle the host may hand to
//! background work.

use serde::Serialize;

use crate::backlog::{BacklogHandle, NotificationBacklog};
use crate::config::EngineConfig;
use crate::errors::EngineError;
use crate::traits::Engine;

/// Acknowledgment envelope emitted ahead of each echoed payload.
#[derive(Serialize)]
struct Ack {
    status: &'static str,
    bytes: usize,
}

/// Envelope for in-band error responses.
#[derive(Serialize)]
struct ErrorEnvelope {
    status: &'static str,
    kind: &'static str,
    message: String,
}

fn error_kind(error: &EngineError) -> &'static str {
    match error {
        EngineError::MalformedRequest { .. } => "malformed_request",
        EngineError::Internal { .. } => "internal",
        EngineError::Construction { .. } => "construction",
    }
}

/// Reference engine that echoes requests and stages notifications through a
/// backlog.
#[derive(Debug)]
pub struct LoopbackEngine {
    backlog: NotificationBacklog,
}

impl LoopbackEngine {
    /// Producer handle for staging notifications from background work.
    ///
    /// Clones are cheap and safe to move across threads; everything
    /// published is delivered by the next `poll`, in publication order.
    pub fn notifier(&self) -> BacklogHandle {
        self.backlog.handle()
    }
}

impl Engine for LoopbackEngine {
    fn create(config: &EngineConfig) -> Result<Self, EngineError> {
        let backlog = match config.backlog_capacity {
            Some(0) => {
                return Err(EngineError::Construction {
                    reason: "backlog_capacity must be at least 1".to_string(),
                })
            }
            Some(capacity) => NotificationBacklog::with_capacity(capacity),
            None => NotificationBacklog::new(),
        };
        Ok(Self { backlog })
    }

    fn process(&mut self, request: &[u8]) -> Result<Vec<Vec<u8>>, EngineError> {
        if request.is_empty() {
            return Err(EngineError::MalformedRequest {
                reason: "empty request buffer".to_string(),
            });
        }

        let ack = Ack {
            status: "ok",
            bytes: request.len(),
        };
        let ack_bytes = serde_json::to_vec(&ack).map_err(|e| EngineError::Internal {
            reason: e.to_string(),
        })?;

        Ok(vec![ack_bytes, request.to_vec()])
    }

    fn drain_pending(&mut self) -> Vec<Vec<u8>> {
        self.backlog.drain()
    }

    fn encode_error(&self, error: &EngineError) -> Vec<u8> {
        let envelope = ErrorEnvelope {
            status: "error",
            kind: error_kind(error),
            message: error.to_string(),
        };
        // Serializing three plain fields cannot realistically fail, but this
        // method is not allowed to; fall back to the bare message text.
        serde_json::to_vec(&envelope).unwrap_or_else(|_| error.to_string().into_bytes())
    }

    fn name(&self) -> &'static str {
        "loopback"
    }
}
