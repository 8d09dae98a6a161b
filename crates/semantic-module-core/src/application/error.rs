//! Application layer errors.
//!
//! These errors represent failures of collaborators reached through ports
//! (filesystem, store, prompts, package manager), not business rules.
//! Business rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors raised by adapters and surfaced through the orchestrator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A file the run depends on does not exist.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The persisted store could not be read or written.
    #[error("Config store error at {path}: {reason}")]
    StoreError { path: PathBuf, reason: String },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// The prompt could not be shown or read.
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// The user aborted a prompt.
    #[error("Prompt cancelled by user")]
    PromptCancelled,

    /// The package manager could not be spawned or exited non-zero.
    #[error("`{command}` failed: {reason}")]
    ExternalProcess { command: String, reason: String },

    /// Lock around an in-memory adapter was poisoned.
    #[error("Adapter lock poisoned: {name}")]
    LockPoisoned { name: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::FileNotFound { path } => vec![
                format!("Expected file is missing: {}", path.display()),
                "Run `npm init -y` in the module directory first".into(),
            ],
            Self::StoreError { path, .. } => vec![
                format!("Check the stored answers in {}", path.display()),
                "Delete the file to start over with the built-in defaults".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Run from an interactive terminal".into(),
                "Or pass --yes to accept the default answers".into(),
            ],
            Self::PromptCancelled => vec![
                "Answers from this run were not saved".into(),
            ],
            Self::ExternalProcess { command, .. } => vec![
                format!("Command failed: {command}"),
                "Ensure the package manager is installed and in your PATH".into(),
                "Re-run with --skip-install and install the packages manually".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileNotFound { .. } => ErrorCategory::NotFound,
            Self::PromptCancelled => ErrorCategory::Validation,
            Self::StoreError { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. }
            | Self::RenderingFailed { .. }
            | Self::PromptFailed { .. }
            | Self::ExternalProcess { .. }
            | Self::LockPoisoned { .. } => ErrorCategory::Internal,
        }
    }
}
