//! Errors raised by pure domain logic.

use thiserror::Error;

/// Every variant carries what the user needs to fix it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown option '{0}'")]
    UnknownOption(String),

    #[error("Option '{key}' has no value")]
    MissingOption { key: &'static str },

    #[error("Failed to parse {file}: {reason}")]
    ManifestParse { file: String, reason: String },

    #[error("{file} must contain a JSON object at the top level")]
    ManifestShape { file: String },
}

impl DomainError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownOption(key) => vec![
                format!("'{key}' is not a recognized option"),
                "Recognized options: moduleName, packager, commitizenAdapter, commitlintConfig"
                    .into(),
            ],
            Self::MissingOption { key } => vec![
                format!("No value was resolved for '{key}'"),
                "Delete .yo-rc.json in the module directory and run again".into(),
            ],
            Self::ManifestParse { file, .. } => vec![
                format!("Fix the JSON syntax in {file}"),
                "Run `npm init -y` to create a fresh manifest".into(),
            ],
            Self::ManifestShape { file } => vec![
                format!("{file} must be a JSON object, e.g. {{ \"name\": \"my-module\" }}"),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownOption(_) => ErrorCategory::Validation,
            Self::MissingOption { .. } => ErrorCategory::Internal,
            Self::ManifestParse { .. } | Self::ManifestShape { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
