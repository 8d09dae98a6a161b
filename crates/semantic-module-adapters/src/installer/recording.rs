//! Installer that records commands instead of running them.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use semantic_module_core::{
    application::{ApplicationError, ports::PackageInstaller},
    domain::InstallCommand,
    error::ScaffoldResult,
};

/// Records every command it is asked to run.
///
/// Clones share the log. A failing recorder records the first command and
/// then reports it as a non-zero exit.
#[derive(Debug, Clone, Default)]
pub struct RecordingInstaller {
    runs: Arc<Mutex<Vec<(InstallCommand, PathBuf)>>>,
    fail: bool,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Commands run so far, in order.
    pub fn commands(&self) -> Vec<InstallCommand> {
        self.runs()
            .into_iter()
            .map(|(command, _)| command)
            .collect()
    }

    /// Commands with the directory each ran in.
    pub fn runs(&self) -> Vec<(InstallCommand, PathBuf)> {
        self.runs
            .lock()
            .map(|runs| runs.clone())
            .unwrap_or_default()
    }
}

impl PackageInstaller for RecordingInstaller {
    fn run(&self, command: &InstallCommand, working_dir: &Path) -> ScaffoldResult<()> {
        self.runs
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned { name: "installer" })?
            .push((command.clone(), working_dir.to_path_buf()));

        if self.fail {
            return Err(ApplicationError::ExternalProcess {
                command: command.to_string(),
                reason: "exited with exit status: 1".into(),
            }
            .into());
        }
        Ok(())
    }
}
