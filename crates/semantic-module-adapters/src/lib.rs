//! Infrastructure adapters for create-semantic-module.
//!
//! This crate implements the ports defined in
//! `semantic_module_core::application::ports`. It contains all external
//! dependencies and I/O operations except the terminal prompter.

pub mod config_store;
pub mod filesystem;
pub mod installer;
pub mod prompter;
pub mod renderer;

// Re-export commonly used adapters
pub use config_store::{InMemoryConfigStore, JsonFileStore};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use installer::{ProcessInstaller, RecordingInstaller};
pub use prompter::{DefaultsPrompter, ScriptedPrompter};
pub use renderer::SimpleRenderer;
