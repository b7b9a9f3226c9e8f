//! # Command System
//!
//! Prefixed text command (`$keyword args...`) handling.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Platform-neutral invocation and reply types
//! - 1.0.0: Handler trait, shared context and registry

pub mod context;
pub mod handler;
pub mod handlers;
pub mod invocation;
pub mod registry;

// Re-export the CommandHandler from the handler module
pub use crate::command_handler::CommandHandler;

// Re-export handler infrastructure
pub use context::CommandContext;
pub use handler::TextCommandHandler;
pub use invocation::{CommandInvocation, IncomingMessage, Reply};
pub use registry::CommandRegistry;
