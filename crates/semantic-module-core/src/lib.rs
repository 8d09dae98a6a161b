//! create-semantic-module core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers for the
//! `create-semantic-module` scaffolder, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   semantic-module (CLI, dialoguer)      │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         ScaffoldOrchestrator            │
//! │  options → collection → artifacts →     │
//! │            install                      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ Store, Prompter, Filesystem, Renderer,  │
//! │ PackageInstaller                        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │  semantic-module-adapters               │
//! │ (JsonFileStore, LocalFilesystem, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ ResolvedConfig, questions, manifest     │
//! │ patch, dependency list                  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use semantic_module_core::prelude::*;
//!
//! let invocation = Invocation::new()
//!     .with_module_name_arg("foo")
//!     .with_option(OptionKey::Packager, "npm");
//!
//! let orchestrator = ScaffoldOrchestrator::new(
//!     invocation.destination(Path::new(".")),
//!     store, prompter, filesystem, renderer, installer,
//! );
//! let report = orchestrator.run(&invocation)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldOrchestrator, ScaffoldReport,
        ports::{ConfigStore, Filesystem, PackageInstaller, Prompter, TemplateRenderer},
    };
    pub use crate::domain::{
        ConfigValue, InputQuestion, InstallCommand, Invocation, OptionKey, Packager,
        RenderContext, ResolvedConfig, SelectQuestion,
    };
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
