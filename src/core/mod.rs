//! # Core Module
//!
//! Configuration, persistence, and reply formatting shared by every feature.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add storage module with locked JSON documents
//! - 1.0.0: Initial creation with config and response modules

pub mod config;
pub mod response;
pub mod storage;

// Re-export commonly used items
pub use config::Config;
pub use response::{chunk_for_message, chunk_text, MESSAGE_LIMIT};
pub use storage::{DataFile, StorageError};
