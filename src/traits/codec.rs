use crate::batch::MessageBatch;
use crate::errors::AdapterError;

/// Byte-marshaling half of a host binding adapter.
///
/// A codec converts between a host runtime's native byte representation and
/// the canonical binary buffers the dispatch core consumes and produces.
/// Conversions preserve exact byte content and length - no encoding
/// transformation, no trimming - and each outgoing message becomes exactly
/// one host buffer sized to that message.
pub trait HostCodec {
    /// Host-native representation of one incoming request.
    type Incoming;

    /// Host-native buffer type for one outgoing message.
    type Outgoing;

    /// Convert a host-native request into a canonical binary buffer.
    fn decode(&self, raw: Self::Incoming) -> Result<Vec<u8>, AdapterError>;

    /// Convert one canonical message into a host-native buffer.
    fn encode_message(&self, message: Vec<u8>) -> Self::Outgoing;

    /// Convert a whole batch in one pass, preserving order.
    fn encode_batch(&self, batch: MessageBatch) -> Vec<Self::Outgoing> {
        batch
            .into_iter()
            .map(|message| self.encode_message(message))
            .collect()
    }
}
