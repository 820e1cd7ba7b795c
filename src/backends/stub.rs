// Copyright (c) 2025 The Turnstile Authors
// SPDX-License-Identifier: MIT

use std::collections::VecDeque;

use crate::backlog::{BacklogHandle, NotificationBacklog};
use crate::config::EngineConfig;
use crate::errors::EngineError;
use crate::traits::Engine;

/// A stub engine for testing and placeholder purposes
pub struct StubEngine;

impl Engine for StubEngine {
    fn create(_config: &EngineConfig) -> Result<Self, EngineError> {
        Ok(Self)
    }

    fn process(&mut self, _request: &[u8]) -> Result<Vec<Vec<u8>>, EngineError> {
        // No responses; the batch comes back empty
        Ok(Vec::new())
    }

    fn drain_pending(&mut self) -> Vec<Vec<u8>> {
        Vec::new()
    }

    fn encode_error(&self, error: &EngineError) -> Vec<u8> {
        format!("error:{}", error).into_bytes()
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

/// An engine that always fails for testing error containment
pub struct FailingEngine;

impl Engine for FailingEngine {
    fn create(_config: &EngineConfig) -> Result<Self, EngineError> {
        Ok(Self)
    }

    fn process(&mut self, _request: &[u8]) -> Result<Vec<Vec<u8>>, EngineError> {
        Err(EngineError::Internal {
            reason: "simulated engine failure".to_string(),
        })
    }

    fn drain_pending(&mut self) -> Vec<Vec<u8>> {
        Vec::new()
    }

    fn encode_error(&self, error: &EngineError) -> Vec<u8> {
        format!("error:{}", error).into_bytes()
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// An engine driven by a script of canned outcomes, for deterministic
/// dispatcher tests.
///
/// Each `process` call consumes the next scripted outcome; once the script
/// runs dry, further calls produce empty response lists. Notifications are
/// staged through a backlog handle obtained before the engine is handed to
/// a dispatcher.
pub struct ScriptedEngine {
    script: VecDeque<Result<Vec<Vec<u8>>, EngineError>>,
    backlog: NotificationBacklog,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
            backlog: NotificationBacklog::new(),
        }
    }

    /// Script the next `process` call to succeed with these responses.
    pub fn respond_with(mut self, responses: Vec<Vec<u8>>) -> Self {
        self.script.push_back(Ok(responses));
        self
    }

    /// Script the next `process` call to fail.
    pub fn fail_with(mut self, error: EngineError) -> Self {
        self.script.push_back(Err(error));
        self
    }

    /// Producer handle for staging notifications at any point in a test.
    pub fn notifier(&self) -> BacklogHandle {
        self.backlog.handle()
    }
}

impl Default for ScriptedEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for ScriptedEngine {
    fn create(_config: &EngineConfig) -> Result<Self, EngineError> {
        Ok(Self::new())
    }

    fn process(&mut self, _request: &[u8]) -> Result<Vec<Vec<u8>>, EngineError> {
        self.script.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }

    fn drain_pending(&mut self) -> Vec<Vec<u8>> {
        self.backlog.drain()
    }

    fn encode_error(&self, error: &EngineError) -> Vec<u8> {
        format!("error:{}", error).into_bytes()
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
