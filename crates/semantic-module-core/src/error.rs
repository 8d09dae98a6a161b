//! Root error of the core crate.
//!
//! Phases return [`ScaffoldResult`]; the CLI reads [`ScaffoldError::category`]
//! to pick an exit code and [`ScaffoldError::suggestions`] to print next steps.

use thiserror::Error;

use crate::{
    application::ApplicationError,
    domain::{DomainError, ErrorCategory as DomainCategory},
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScaffoldError {
    /// Rule violations: malformed manifest, unresolved option.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Failures reported by a port implementation.
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl ScaffoldError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category().into(),
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when the user aborted a prompt.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::PromptCancelled))
    }
}

/// Coarse classification shared by both layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

impl From<DomainCategory> for ErrorCategory {
    fn from(category: DomainCategory) -> Self {
        match category {
            DomainCategory::Validation => Self::Validation,
            DomainCategory::NotFound => Self::NotFound,
            DomainCategory::Internal => Self::Internal,
        }
    }
}

pub type ScaffoldResult<T> = Result<T, ScaffoldError>;
