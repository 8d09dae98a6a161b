//! Scaffold orchestrator - runs the four phases in order.
//!
//! ```text
//! Invocation ─▶ resolve_options ─▶ collect_answers ─▶ write_artifacts ─▶ install_dependencies
//!                    │                   │                  ▲
//!                    └──── ConfigStore ──┴──── get_all ─────┘
//! ```
//!
//! Each phase runs once. The first error stops the run and nothing already
//! written is rolled back.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{ConfigStore, Filesystem, PackageInstaller, Prompter, TemplateRenderer},
        services::{
            artifacts::{ArtifactReport, write_artifacts},
            collection::collect_answers,
            install::{InstallReport, install_dependencies},
            options::resolve_options,
        },
    },
    domain::{Invocation, ResolvedConfig},
    error::ScaffoldResult,
};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub destination: PathBuf,
    pub module_name: Option<String>,
    /// Configuration the artifacts were written from.
    pub config: ResolvedConfig,
    pub artifacts: ArtifactReport,
    pub install: InstallReport,
}

/// Runs one scaffolding invocation against a single destination.
///
/// The store must be scoped to `destination`; callers usually compute both
/// from [`Invocation::destination`].
pub struct ScaffoldOrchestrator {
    destination: PathBuf,
    store: Box<dyn ConfigStore>,
    prompter: Box<dyn Prompter>,
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
    installer: Box<dyn PackageInstaller>,
    skip_install: bool,
}

impl ScaffoldOrchestrator {
    /// Create an orchestrator with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let invocation = Invocation::new().with_module_name_arg("foo");
    /// let destination = invocation.destination(Path::new("."));
    ///
    /// let orchestrator = ScaffoldOrchestrator::new(
    ///     destination,
    ///     store,      // impl ConfigStore
    ///     prompter,   // impl Prompter
    ///     filesystem, // impl Filesystem
    ///     renderer,   // impl TemplateRenderer
    ///     installer,  // impl PackageInstaller
    /// );
    /// orchestrator.run(&invocation)?;
    /// ```
    pub fn new(
        destination: impl Into<PathBuf>,
        store: Box<dyn ConfigStore>,
        prompter: Box<dyn Prompter>,
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
        installer: Box<dyn PackageInstaller>,
    ) -> Self {
        Self {
            destination: destination.into(),
            store,
            prompter,
            filesystem,
            renderer,
            installer,
            skip_install: false,
        }
    }

    /// Plan the install commands without running them.
    pub fn skip_install(mut self, skip: bool) -> Self {
        self.skip_install = skip;
        self
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Run all four phases.
    #[instrument(skip_all, fields(destination = %self.destination.display()))]
    pub fn run(&self, invocation: &Invocation) -> ScaffoldResult<ScaffoldReport> {
        let seed = resolve_options(invocation, self.store.as_ref())?;

        collect_answers(
            self.prompter.as_ref(),
            self.store.as_ref(),
            seed.prompt_packager,
        )?;

        let config = self.store.get_all()?;
        let artifacts = write_artifacts(
            &config,
            &self.destination,
            self.filesystem.as_ref(),
            self.renderer.as_ref(),
        )?;

        let install = install_dependencies(
            &config,
            &self.destination,
            self.installer.as_ref(),
            self.skip_install,
        )?;

        info!(
            files = artifacts.written.len(),
            packages = install.dependencies.len(),
            "Scaffold completed successfully"
        );

        Ok(ScaffoldReport {
            destination: self.destination.clone(),
            module_name: seed.module_name,
            config,
            artifacts,
            install,
        })
    }
}
