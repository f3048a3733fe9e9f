//! Stream accumulator: converts a provider-agnostic delta stream into
//! lifecycle-correct block events and a final structured message (§4.3).
//!
//! This crate owns no provider-specific wire format. Model adapters (see
//! `hyper-sdk` and friends) translate their own streaming chunk types into
//! [`AdapterDelta`] before pushing them through an [`Accumulator`].

mod accumulator;
mod block;
mod delta;
mod event;

pub use accumulator::AccumulatedMessage;
pub use accumulator::Accumulator;
pub use block::BlockMetadata;
pub use block::CompletedToolCall;
pub use block::ContentBlock;
pub use delta::AdapterDelta;
pub use delta::StopReason;
pub use delta::Usage;
pub use event::LifecycleEvent;
