//! Dependency installation - the fourth phase.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::ports::PackageInstaller,
    domain::{DependencyList, InstallCommand, Packager, ResolvedConfig},
    error::ScaffoldResult,
};

/// What the install phase did, or would have done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub packager: Packager,
    pub dependencies: DependencyList,
    pub commands: Vec<InstallCommand>,
    /// `true` when the commands were planned but not run.
    pub skipped: bool,
}

/// Install the development dependencies for `config`, then everything else.
///
/// The first failing command aborts the phase.
#[instrument(skip_all, fields(destination = %destination.display(), skip_install = skip))]
pub fn install_dependencies(
    config: &ResolvedConfig,
    destination: &Path,
    installer: &dyn PackageInstaller,
    skip: bool,
) -> ScaffoldResult<InstallReport> {
    let packager = config.packager();
    let dependencies = DependencyList::from_config(config)?;
    let commands = InstallCommand::plan(packager, &dependencies);

    if skip {
        info!(packager = packager.as_str(), "Install skipped");
    } else {
        for command in &commands {
            info!(command = %command, "Running package manager");
            installer.run(command, destination)?;
        }
    }

    Ok(InstallReport {
        packager,
        dependencies,
        commands,
        skipped: skip,
    })
}
