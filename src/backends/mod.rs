// Copyright (c) 2025 The Turnstile Authors
// SPDX-License-Identifier: MIT

//! Engine implementations behind the [`crate::traits::Engine`] seam.
//!
//! The production analytics engine lives outside this crate and is consumed
//! only through the trait; what lives here are the implementations the
//! crate itself needs.
//!
//! # Available Backends
//!
//! ## Loopback Backend
//! The in-crate reference implementation:
//! - **Behavior**: acknowledges and echoes each request, reports empty
//!   requests as malformed, drains a shared notification backlog
//! - **Use Case**: wiring host bindings, demos, integration tests
//!
//! ## Stub Backend (Test-Only)
//! Deterministic doubles for dispatcher development (only available in
//! test builds):
//! - **StubEngine**: produces nothing, for empty-batch paths
//! - **FailingEngine**: always errors, for containment tests
//! - **ScriptedEngine**: canned responses and stageable notifications
//! - **Note**: NOT available in production builds

pub mod loopback;
#[cfg(test)]
pub mod stub;

pub use loopback::LoopbackEngine;
