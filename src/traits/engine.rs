use crate::config::EngineConfig;
use crate::errors::EngineError;

/// The narrow contract the dispatch core requires of an analytics engine.
///
/// The engine's internals - table storage, view computation, query
/// evaluation - live outside this crate. The dispatch core only needs
/// something that turns one request buffer into zero or more response
/// buffers, and that keeps a drainable backlog of notification buffers on
/// the side. Payloads are opaque at this seam; their schema belongs entirely
/// to the engine.
pub trait Engine {
    /// Construct an engine from configuration.
    ///
    /// Called exactly once per dispatcher, during dispatcher construction.
    /// Failure here aborts the dispatcher as a whole.
    fn create(config: &EngineConfig) -> Result<Self, EngineError>
    where
        Self: Sized;

    /// Process one request, producing every response it gives rise to.
    ///
    /// Invoked synchronously on the caller's execution context, once per
    /// `handle_message`. Responses come back in production order. Failures
    /// are reported as `Err` and rendered in-band by the dispatch core via
    /// [`Engine::encode_error`]; implementations must not panic through
    /// this call.
    fn process(&mut self, request: &[u8]) -> Result<Vec<Vec<u8>>, EngineError>;

    /// Remove and return every pending notification, in production order.
    ///
    /// Invoked once per `poll`. Must be safe to call with an empty backlog
    /// (returns an empty list, not an error). Implementations with
    /// background producers are responsible for making the backlog safe to
    /// drain concurrently with enqueues; [`crate::backlog::NotificationBacklog`]
    /// exists so they don't each reinvent that.
    fn drain_pending(&mut self) -> Vec<Vec<u8>>;

    /// Render an error as a single message in the engine's own wire
    /// encoding.
    ///
    /// The dispatch core knows nothing of the payload schema, so error
    /// responses have to come from the engine itself. This must not fail.
    fn encode_error(&self, error: &EngineError) -> Vec<u8>;

    /// Short engine name used in boundary logging.
    fn name(&self) -> &'static str;
}
