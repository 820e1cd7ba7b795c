// Copyright (c) 2025 The Turnstile Authors
// SPDX-License-Identifier: MIT

/// Minimum allowed pending-notification backlog capacity
pub const MIN_BACKLOG_CAPACITY: usize = 1;
/// Maximum allowed pending-notification backlog capacity (1Mi messages) - guards
/// against a misconfigured host staging unbounded memory between polls
pub const MAX_BACKLOG_CAPACITY: usize = 1_048_576;
