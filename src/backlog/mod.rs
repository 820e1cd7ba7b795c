// Copyright (c) 2025 The Turnstile Authors
// SPDX-License-Identifier: MIT

//! Pending-notification backlog drained by `poll`.
//!
//! Engine-initiated messages have no caller to return to: the host cannot
//! be called back into, so messages are staged here until the host pulls
//! them. Producers run on whatever execution context the engine chooses,
//! which makes the queue a shared resource; it is guarded by a mutex, and
//! the consumer side drains wholesale under a single lock acquisition so
//! that `poll` observes a consistent, order-preserving snapshot and never
//! loses or duplicates a message under concurrent enqueue.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::observability::messages::backlog::NotificationEvicted;
use crate::observability::messages::StructuredLog;

type Queue = Arc<Mutex<VecDeque<Vec<u8>>>>;

// A producer that panicked mid-publish must not disable the drain path; the
// queue itself is never left in a torn state, so a poisoned lock still
// yields a usable guard.
fn lock(queue: &Queue) -> MutexGuard<'_, VecDeque<Vec<u8>>> {
    queue.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Staging queue for engine-initiated notification messages.
///
/// FIFO; publication order is preserved and every staged message is
/// returned by exactly one [`NotificationBacklog::drain`] call. Unbounded by
/// default - bounding backlog size is the engine's responsibility - but a
/// capacity may be set, in which case publishing to a full backlog evicts
/// the oldest staged message.
///
/// # Example
/// ```
/// use turnstile::backlog::NotificationBacklog;
///
/// let backlog = NotificationBacklog::new();
/// let notifier = backlog.handle();
///
/// notifier.publish(b"view recomputed".to_vec());
/// notifier.publish(b"subscription fired".to_vec());
///
/// let drained = backlog.drain();
/// assert_eq!(drained.len(), 2);
/// assert!(backlog.drain().is_empty());
/// ```
#[derive(Debug)]
pub struct NotificationBacklog {
    queue: Queue,
    capacity: Option<usize>,
}

impl NotificationBacklog {
    /// Create an unbounded backlog.
    pub fn new() -> Self {
        Self {
            queue: Arc::new(Mutex::new(VecDeque::new())),
            capacity: None,
        }
    }

    /// Create a backlog holding at most `capacity` staged messages.
    ///
    /// When full, a publish evicts the oldest staged message and logs the
    /// eviction.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: Some(capacity),
        }
    }

    /// A cloneable producer handle, safe to move into background threads.
    pub fn handle(&self) -> BacklogHandle {
        BacklogHandle {
            queue: Arc::clone(&self.queue),
            capacity: self.capacity,
        }
    }

    /// Remove and return every staged message, in publication order.
    ///
    /// Never blocks beyond the mutex; an empty backlog yields an empty
    /// vector.
    pub fn drain(&self) -> Vec<Vec<u8>> {
        lock(&self.queue).drain(..).collect()
    }

    /// Number of currently staged messages.
    pub fn len(&self) -> usize {
        lock(&self.queue).len()
    }

    /// Whether nothing is currently staged.
    pub fn is_empty(&self) -> bool {
        lock(&self.queue).is_empty()
    }
}

impl Default for NotificationBacklog {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle for a [`NotificationBacklog`].
///
/// Clones share the same queue. The handle keeps the queue alive, so
/// background producers may outlive the backlog (and the engine owning it);
/// anything they publish after the consumer is gone is simply never
/// delivered.
#[derive(Clone)]
pub struct BacklogHandle {
    queue: Queue,
    capacity: Option<usize>,
}

impl BacklogHandle {
    /// Stage one notification message.
    pub fn publish(&self, message: Vec<u8>) {
        let evicted = {
            let mut queue = lock(&self.queue);
            let evict = matches!(self.capacity, Some(capacity) if queue.len() >= capacity);
            if evict {
                queue.pop_front();
            }
            queue.push_back(message);
            evict
        };

        if let Some(capacity) = self.capacity {
            if evicted {
                NotificationEvicted { capacity }.log();
            }
        }
    }
}
