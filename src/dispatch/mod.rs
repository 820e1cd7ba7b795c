// Copyright (c) 2025 The Turnstile Authors
// SPDX-License-Identifier: MIT

//! Dispatch core: one engine, two channels.
//!
//! The dispatcher is the message-dispatch boundary between a host
//! application and an embedded analytics engine. It carries two independent
//! channels:
//!
//! * a synchronous request/response path - [`Dispatcher::handle_message`]
//!   forwards one opaque request and returns every response the engine
//!   produced for it, batched;
//! * a poll-driven notification path - [`Dispatcher::poll`] drains whatever
//!   the engine has staged on its own initiative since the previous poll.
//!
//! Several embedding runtimes (single-threaded cooperative hosts in
//! particular) cannot safely receive asynchronous re-entrant calls, so the
//! engine never calls back - anything it wants to push waits in a backlog
//! until the host asks for it.
//!
//! Both operations take `&mut self`, which makes overlapping calls against
//! one instance unrepresentable rather than merely documented.


use crate::batch::MessageBatch;
use crate::config::EngineConfig;
use crate::errors::EngineError;
use crate::observability::messages::dispatch::{
    EngineConstructed, EngineConstructionFailed, NotificationsDrained, RequestFailed,
    RequestHandled,
};
use crate::observability::messages::StructuredLog;
use crate::traits::Engine;

/// Owns exactly one engine instance and exposes the dispatch boundary over
/// it.
///
/// The engine is created during construction and dropped with the
/// dispatcher; it is never shared between dispatchers. Undelivered
/// notifications are discarded on drop - hosts that need guaranteed
/// delivery must poll before dropping.
pub struct Dispatcher<E: Engine> {
    engine: E,
}

impl<E: Engine> Dispatcher<E> {
    /// Construct a dispatcher over a default-configured engine.
    ///
    /// Engine construction failure aborts dispatcher construction; an `Err`
    /// here leaves nothing partially initialized behind.
    pub fn new() -> Result<Self, EngineError> {
        Self::with_config(&EngineConfig::default())
    }

    /// Construct a dispatcher over an engine built from explicit
    /// configuration.
    pub fn with_config(config: &EngineConfig) -> Result<Self, EngineError> {
        match E::create(config) {
            Ok(engine) => {
                EngineConstructed {
                    engine: engine.name(),
                }
                .log();
                Ok(Self { engine })
            }
            Err(error) => {
                EngineConstructionFailed { error: &error }.log();
                Err(error)
            }
        }
    }

    /// Adopt an already-constructed engine.
    ///
    /// Useful for test doubles and for hosts that configure the engine
    /// themselves before handing it over.
    pub fn from_engine(engine: E) -> Self {
        Self { engine }
    }

    /// Forward one request to the engine and return its responses, batched.
    ///
    /// Synchronous: every response in the returned batch was produced as a
    /// consequence of this request, before this call returns. An empty
    /// batch means the engine produced no responses.
    ///
    /// A `Result::Err` from the engine is absorbed here: the engine renders
    /// it in its own wire encoding ([`Engine::encode_error`]) and the batch
    /// carries that one error message. No recoverable failure escapes as a
    /// host-visible fault, and the dispatcher stays usable afterward.
    /// Panics are outside this contract; an engine that panics has already
    /// broken its own containment duty.
    pub fn handle_message(&mut self, request: &[u8]) -> MessageBatch {
        match self.engine.process(request) {
            Ok(responses) => {
                let batch = MessageBatch::from(responses);
                RequestHandled {
                    engine: self.engine.name(),
                    request_bytes: request.len(),
                    response_count: batch.len(),
                }
                .log();
                batch
            }
            Err(error) => {
                RequestFailed {
                    engine: self.engine.name(),
                    error: &error,
                }
                .log();
                MessageBatch::from(vec![self.engine.encode_error(&error)])
            }
        }
    }

    /// Drain every notification the engine has staged since the previous
    /// poll, in production order.
    ///
    /// Never blocks; returns an empty batch when nothing is pending. A
    /// notification, once returned, is never returned again. No ordering
    /// relationship with the response channel is guaranteed beyond each
    /// channel being internally ordered.
    pub fn poll(&mut self) -> MessageBatch {
        let batch = MessageBatch::from(self.engine.drain_pending());
        if !batch.is_empty() {
            NotificationsDrained {
                engine: self.engine.name(),
                message_count: batch.len(),
            }
            .log();
        }
        batch
    }

    /// The engine this dispatcher owns.
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::stub::{FailingEngine, ScriptedEngine, StubEngine};

    /// Engine whose construction always fails, for abort-on-construction
    /// tests.
    struct UncreatableEngine;

    impl Engine for UncreatableEngine {
        fn create(_config: &EngineConfig) -> Result<Self, EngineError> {
            Err(EngineError::Construction {
                reason: "no license for this host".to_string(),
            })
        }

        fn process(&mut self, _request: &[u8]) -> Result<Vec<Vec<u8>>, EngineError> {
            unreachable!("constructed an UncreatableEngine")
        }

        fn drain_pending(&mut self) -> Vec<Vec<u8>> {
            unreachable!("constructed an UncreatableEngine")
        }

        fn encode_error(&self, error: &EngineError) -> Vec<u8> {
            error.to_string().into_bytes()
        }

        fn name(&self) -> &'static str {
            "uncreatable"
        }
    }

    #[test]
    fn responses_come_back_in_production_order() {
        let engine = ScriptedEngine::new()
            .respond_with(vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
        let mut dispatcher = Dispatcher::from_engine(engine);

        let batch = dispatcher.handle_message(b"req");
        assert_eq!(
            batch.into_messages(),
            vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]
        );
    }

    #[test]
    fn responses_do_not_leak_between_calls() {
        let engine = ScriptedEngine::new()
            .respond_with(vec![b"first-1".to_vec(), b"first-2".to_vec()])
            .respond_with(vec![b"second-1".to_vec()]);
        let mut dispatcher = Dispatcher::from_engine(engine);

        let first = dispatcher.handle_message(b"one");
        let second = dispatcher.handle_message(b"two");

        assert_eq!(
            first.into_messages(),
            vec![b"first-1".to_vec(), b"first-2".to_vec()]
        );
        assert_eq!(second.into_messages(), vec![b"second-1".to_vec()]);
    }

    #[test]
    fn empty_batch_when_engine_produces_nothing() {
        let mut dispatcher = Dispatcher::<StubEngine>::new().unwrap();
        let batch = dispatcher.handle_message(b"anything");
        assert!(batch.is_empty());
    }

    #[test]
    fn engine_error_becomes_in_band_message() {
        let mut dispatcher = Dispatcher::<FailingEngine>::new().unwrap();

        let batch = dispatcher.handle_message(b"req");
        assert_eq!(batch.len(), 1);
        let message = batch.into_messages().remove(0);
        assert!(message.starts_with(b"error:"));

        // A handled error must not wedge the instance.
        let again = dispatcher.handle_message(b"req");
        assert_eq!(again.len(), 1);
    }

    #[test]
    fn poll_before_any_activity_is_empty() {
        let mut dispatcher = Dispatcher::<StubEngine>::new().unwrap();
        assert!(dispatcher.poll().is_empty());
    }

    #[test]
    fn poll_returns_each_notification_exactly_once() {
        let engine = ScriptedEngine::new();
        let notifier = engine.notifier();
        let mut dispatcher = Dispatcher::from_engine(engine);

        notifier.publish(b"n1".to_vec());
        notifier.publish(b"n2".to_vec());

        let first = dispatcher.poll();
        assert_eq!(
            first.into_messages(),
            vec![b"n1".to_vec(), b"n2".to_vec()]
        );
        assert!(dispatcher.poll().is_empty());
    }

    #[test]
    fn notifications_never_ride_the_response_channel() {
        let engine = ScriptedEngine::new().respond_with(vec![b"response".to_vec()]);
        let notifier = engine.notifier();
        let mut dispatcher = Dispatcher::from_engine(engine);

        notifier.publish(b"notification".to_vec());

        let responses = dispatcher.handle_message(b"req");
        assert_eq!(responses.into_messages(), vec![b"response".to_vec()]);

        let notifications = dispatcher.poll();
        assert_eq!(
            notifications.into_messages(),
            vec![b"notification".to_vec()]
        );
    }

    #[test]
    fn construction_failure_aborts() {
        let result = Dispatcher::<UncreatableEngine>::new();
        assert!(matches!(
            result,
            Err(EngineError::Construction { .. })
        ));
    }

    #[test]
    fn drop_before_first_call_is_clean() {
        let dispatcher = Dispatcher::<StubEngine>::new().unwrap();
        drop(dispatcher);
    }

    #[test]
    fn undelivered_notifications_are_discarded_on_drop() {
        let engine = ScriptedEngine::new();
        let notifier = engine.notifier();
        let dispatcher = Dispatcher::from_engine(engine);

        notifier.publish(b"never delivered".to_vec());
        drop(dispatcher);

        // The producer handle stays safe to use even though the consumer
        // side is gone.
        notifier.publish(b"also never delivered".to_vec());
    }
}
