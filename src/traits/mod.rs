pub mod codec;
pub mod engine;

pub use codec::HostCodec;
pub use engine::Engine;
