//! Core types for the Haru assistant.
//!
//! This crate provides the shared types used by the command interpreter and
//! the surrounding application:
//! - `Event` and related calendar types
//! - `Command` / `CommandResult` for the interpreter contract
//! - `ChatContext` for the per-call ambient state

pub mod command;
pub mod context;
pub mod error;
pub mod event;
pub mod result;

// Re-export everything at crate root for convenience
pub use command::*;
pub use context::*;
pub use error::*;
pub use event::*;
pub use result::*;
