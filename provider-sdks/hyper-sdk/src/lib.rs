//! Minimal surface the rest of this workspace actually depends on: the
//! shared [`Role`] enum and the Model adapter contract (§6). The teacher's
//! much larger multi-provider SDK (concrete OpenAI/Anthropic/Gemini/etc.
//! clients, request/response wire types, retry/rate-limit machinery) is
//! intentionally left unwired — see `DESIGN.md`.

pub mod adapter;
pub mod error;
pub mod role;

pub use adapter::DeltaStream;
pub use adapter::EngineResponse;
pub use adapter::InputMessage;
pub use adapter::ModelAdapter;
pub use adapter::ModelInput;
pub use adapter::ModelOutput;
pub use adapter::ToolDefinition;
pub use error::HyperError;
pub use error::Result;
pub use role::Role;
