// Copyright (c) 2025 The Turnstile Authors
// SPDX-License-Identifier: MIT

//! Message types for pending-notification queue events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A capacity-bounded backlog evicted its oldest staged notification to
/// admit a new one.
///
/// # Log Level
/// `warn!` - the host is polling too slowly for the configured capacity
pub struct NotificationEvicted {
    pub capacity: usize,
}

impl Display for NotificationEvicted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Backlog at capacity {}; evicted oldest staged notification",
            self.capacity
        )
    }
}

impl StructuredLog for NotificationEvicted {
    fn log(&self) {
        tracing::warn!(capacity = self.capacity, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("notification_evicted", span_name = name, capacity = self.capacity)
    }
}
