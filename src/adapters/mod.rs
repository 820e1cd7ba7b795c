// Copyright (c) 2025 The Turnstile Authors
// SPDX-License-Identifier: MIT

//! Host binding adapters.
//!
//! Each embedding runtime has its own native idea of a byte buffer - owned
//! vectors, typed arrays, text-only transports. The dispatch core never
//! sees any of them: a [`HostBinding`] pairs one dispatcher with one
//! [`HostCodec`] and re-exposes `handle_message` and `poll` under the host
//! representation, routing exactly one core call per host-level call.
//!
//! Two codecs ship with the crate: [`OwnedBytesCodec`] for hosts whose
//! native buffer already is `Vec<u8>`, and [`Base64Codec`] for hosts that
//! can only carry text.

pub mod base64;
pub mod native;

pub use self::base64::Base64Codec;
pub use native::OwnedBytesCodec;

use crate::dispatch::Dispatcher;
use crate::errors::{AdapterError, EngineError};
use crate::traits::{Engine, HostCodec};

/// Per-runtime glue binding a dispatcher to a host byte representation.
///
/// The binding owns the dispatcher, so the dispatcher (and its engine)
/// lives at least as long as any call routed through it.
pub struct HostBinding<E: Engine, C: HostCodec> {
    dispatcher: Dispatcher<E>,
    codec: C,
}

impl<E: Engine, C: HostCodec + Default> HostBinding<E, C> {
    /// Construct a binding over a default-configured engine.
    pub fn new() -> Result<Self, EngineError> {
        Ok(Self {
            dispatcher: Dispatcher::new()?,
            codec: C::default(),
        })
    }
}

impl<E: Engine, C: HostCodec> HostBinding<E, C> {
    /// Bind an existing dispatcher and codec.
    pub fn from_parts(dispatcher: Dispatcher<E>, codec: C) -> Self {
        Self { dispatcher, codec }
    }

    /// Decode one host request, dispatch it, and encode the response batch.
    ///
    /// Decode failures are host-side marshaling errors raised before the
    /// request reaches the engine; everything past that point follows the
    /// core's no-fault contract.
    pub fn handle_message(&mut self, raw: C::Incoming) -> Result<Vec<C::Outgoing>, AdapterError> {
        let request = self.codec.decode(raw)?;
        let batch = self.dispatcher.handle_message(&request);
        Ok(self.codec.encode_batch(batch))
    }

    /// Drain pending notifications into host buffers.
    pub fn poll(&mut self) -> Vec<C::Outgoing> {
        self.codec.encode_batch(self.dispatcher.poll())
    }

    /// The dispatcher behind this binding.
    pub fn dispatcher(&self) -> &Dispatcher<E> {
        &self.dispatcher
    }
}
