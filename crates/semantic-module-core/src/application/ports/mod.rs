//! Ports the orchestrator is driven through.
//!
//! Only driven (output) ports exist: the orchestrator itself is the single
//! entry point, and the CLI calls [`crate::application::ScaffoldOrchestrator::run`]
//! directly.

pub mod output;

pub use output::{ConfigStore, Filesystem, PackageInstaller, Prompter, TemplateRenderer};

#[cfg(test)]
pub use output::{
    MockConfigStore, MockFilesystem, MockPackageInstaller, MockPrompter, MockTemplateRenderer,
};
