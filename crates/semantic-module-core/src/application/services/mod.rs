//! Application services - the four scaffolding phases.
//!
//! Each phase is a free function of the resolved options plus the port
//! handles it needs; `ScaffoldOrchestrator` chains them.

pub mod artifacts;
pub mod collection;
pub mod install;
pub mod options;
pub mod orchestrator;

pub use artifacts::{ArtifactReport, write_artifacts};
pub use collection::{CommitlintPrompt, collect_answers};
pub use install::{InstallReport, install_dependencies};
pub use options::{ResolutionSeed, resolve_options};
pub use orchestrator::{ScaffoldOrchestrator, ScaffoldReport};
