//! Natural-language command interpreter for the Haru calendar assistant.
//!
//! Takes free-text user input (mixed Korean/English), classifies intent,
//! resolves colloquial date/time expressions into absolute timestamps, and
//! executes the resulting command against the caller's in-memory event
//! collection. The pipeline is pure and stateless: the caller owns the event
//! store, the clock, and the rendering of the returned navigation and
//! animation hints.

pub mod build;
pub mod classify;
pub mod config;
pub mod execute;
pub mod interpreter;
pub mod suggest;
pub mod temporal;

pub use config::InterpreterConfig;
pub use interpreter::Interpreter;

// Re-export the shared types so callers only need one crate
pub use haru_core::*;
