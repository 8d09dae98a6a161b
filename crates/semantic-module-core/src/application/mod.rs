//! The four scaffolding phases, the orchestrator, and the ports they use.
//!
//! Nothing here touches the terminal, the disk or a process directly; that
//! happens behind the traits in [`ports`].

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ArtifactReport, CommitlintPrompt, InstallReport, ResolutionSeed, ScaffoldOrchestrator,
    ScaffoldReport,
};

pub use ports::{ConfigStore, Filesystem, PackageInstaller, Prompter, TemplateRenderer};

pub use error::ApplicationError;
