//! The Engine/Tick Loop (§4.6) and Continuation Policy (§4.7): drives a
//! compiled component tree against a model adapter one tick at a time,
//! folding tool execution and continuation decisions back through the COM.

mod continuation;
mod engine;
mod error;
mod event;
mod projection;
mod result;

pub use continuation::ContinuationCallback;
pub use continuation::ContinuationOutcome;
pub use continuation::apply_continuation_policy;
pub use engine::Engine;
pub use engine::EngineBuilder;
pub use engine::EngineConfig;
pub use error::EngineError;
pub use error::Result;
pub use event::EngineEvent;
pub use event::EventEmitter;
pub use event::SequencedEvent;
pub use projection::build_model_input;
pub use projection::flatten_content;
pub use projection::project_sections;
pub use projection::project_timeline;
pub use projection::project_tools;
pub use result::ExecutionOutcome;
pub use result::StopReason;
