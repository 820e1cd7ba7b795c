// Copyright (c) 2025 The Turnstile Authors
// SPDX-License-Identifier: MIT

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::errors::AdapterError;
use crate::traits::HostCodec;

/// Codec for hosts whose only transport is text.
///
/// Some embeddings cannot carry raw bytes across their boundary (string-only
/// bridges, JSON transports); this codec carries the canonical buffers as
/// standard-alphabet base64 with padding. Content round-trips
/// byte-identically; the textual form is only ever a transport shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Codec;

impl HostCodec for Base64Codec {
    type Incoming = String;
    type Outgoing = String;

    fn decode(&self, raw: String) -> Result<Vec<u8>, AdapterError> {
        STANDARD.decode(raw.as_bytes()).map_err(|e| AdapterError::Decode {
            reason: e.to_string(),
        })
    }

    fn encode_message(&self, message: Vec<u8>) -> String {
        STANDARD.encode(message)
    }
}
