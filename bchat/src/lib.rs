//! Session and message orchestration for the chat client.

mod orchestrator;
mod registry;
mod store;

pub use orchestrator::{ChatOrchestrator, ChatPhase, SendOutcome};
pub use registry::SessionRegistry;
pub use store::MessageStore;
pub use bcommon::SessionId;
