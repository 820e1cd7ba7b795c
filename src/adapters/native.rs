// Copyright (c) 2025 The Turnstile Authors
// SPDX-License-Identifier: MIT

use crate::errors::AdapterError;
use crate::traits::HostCodec;

/// Identity codec for hosts whose native buffer is an owned byte vector.
///
/// Decode and encode both move the buffer through untouched, so marshaling
/// cost is zero regardless of message size.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnedBytesCodec;

impl HostCodec for OwnedBytesCodec {
    type Incoming = Vec<u8>;
    type Outgoing = Vec<u8>;

    fn decode(&self, raw: Vec<u8>) -> Result<Vec<u8>, AdapterError> {
        Ok(raw)
    }

    fn encode_message(&self, message: Vec<u8>) -> Vec<u8> {
        message
    }
}
