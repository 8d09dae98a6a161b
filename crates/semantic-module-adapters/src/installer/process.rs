//! Installer that spawns the package manager.

use std::{io, path::Path, process::Command};

use semantic_module_core::{
    application::{ApplicationError, ports::PackageInstaller},
    domain::InstallCommand,
    error::ScaffoldResult,
};
use tracing::{debug, instrument};

/// Runs install commands as child processes.
///
/// The child inherits stdin, stdout and stderr so package-manager output and
/// prompts reach the terminal directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessInstaller;

impl ProcessInstaller {
    pub fn new() -> Self {
        Self
    }
}

impl PackageInstaller for ProcessInstaller {
    #[instrument(skip_all, fields(command = %command, dir = %working_dir.display()))]
    fn run(&self, command: &InstallCommand, working_dir: &Path) -> ScaffoldResult<()> {
        let status = Command::new(program_name(&command.program))
            .args(&command.args)
            .current_dir(working_dir)
            .status()
            .map_err(|e| ApplicationError::ExternalProcess {
                command: command.to_string(),
                reason: spawn_reason(&command.program, &e),
            })?;

        debug!(%status, "Package manager exited");

        if !status.success() {
            return Err(ApplicationError::ExternalProcess {
                command: command.to_string(),
                reason: format!("exited with {status}"),
            }
            .into());
        }

        Ok(())
    }
}

/// npm and yarn ship as `.cmd` shims on Windows.
#[cfg(windows)]
fn program_name(program: &str) -> String {
    format!("{program}.cmd")
}

#[cfg(not(windows))]
fn program_name(program: &str) -> String {
    program.to_string()
}

fn spawn_reason(program: &str, e: &io::Error) -> String {
    match e.kind() {
        io::ErrorKind::NotFound => format!("`{program}` was not found on PATH"),
        _ => format!("failed to start: {e}"),
    }
}
