//! CLI errors: what went wrong, what to try next, and which exit code to use.

use std::{error::Error as _, fmt::Write as _};

use owo_colors::OwoColorize;
use thiserror::Error;

use semantic_module_core::error::{ErrorCategory as CoreCategory, ScaffoldError};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// The app config file or environment could not be loaded.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Anything the orchestrator or an adapter reported.
    #[error("{0}")]
    Scaffold(ScaffoldError),

    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Esc or Ctrl-C in a prompt.
    #[error("Cancelled, nothing more was written")]
    Cancelled,
}

impl From<ScaffoldError> for CliError {
    fn from(err: ScaffoldError) -> Self {
        if err.is_cancelled() {
            Self::Cancelled
        } else {
            Self::Scaffold(err)
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

/// How an error is classified for the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitKind {
    /// Bad input or an aborted prompt.
    Usage,
    /// Missing `package.json`.
    NotFound,
    /// App config or the answer store.
    Configuration,
    /// I/O and package-manager failures.
    Internal,
}

impl ExitKind {
    pub fn code(self) -> u8 {
        match self {
            Self::Internal => 1,
            Self::Usage => 2,
            Self::NotFound => 3,
            Self::Configuration => 4,
        }
    }
}

impl CliError {
    pub fn kind(&self) -> ExitKind {
        match self {
            Self::Config { .. } => ExitKind::Configuration,
            Self::Scaffold(err) => match err.category() {
                CoreCategory::Validation => ExitKind::Usage,
                CoreCategory::NotFound => ExitKind::NotFound,
                CoreCategory::Configuration => ExitKind::Configuration,
                CoreCategory::Internal => ExitKind::Internal,
            },
            Self::Io { .. } => ExitKind::Internal,
            Self::Cancelled => ExitKind::Usage,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.kind().code()
    }

    /// Next steps for the user, most specific first.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config { .. } => vec![
                format!(
                    "Check the config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Environment overrides look like SEMANTIC_MODULE_INSTALL__SKIP=true".into(),
            ],
            Self::Scaffold(err) => err.suggestions(),
            Self::Io { .. } => vec!["Check permissions on the module directory".into()],
            Self::Cancelled => vec![
                "Run again to pick up where you left off".into(),
                "Pass --yes to accept every default".into(),
            ],
        }
    }

    /// The full message printed to stderr.
    ///
    /// With `verbose`, the chain of causes is listed; otherwise a hint to
    /// use `-v` closes the message.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "\n{} {}",
            paint("\u{2717} Error:", color, |s| s.red().bold().to_string()),
            paint(&self.to_string(), color, |s| s.red().to_string()),
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let _ = writeln!(
                    out,
                    "  {}",
                    paint(&format!("caused by: {err}"), color, |s| s.dimmed().to_string())
                );
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(out, "\n{}", paint("Try:", color, |s| s.yellow().bold().to_string()));
            for suggestion in suggestions {
                let _ = writeln!(out, "  - {suggestion}");
            }
        }

        if !verbose {
            let _ = writeln!(
                out,
                "\n{}",
                paint("Run with -v for more detail.", color, |s| s.dimmed().to_string())
            );
        }

        out
    }

    /// Emit the error as a tracing event; causes at debug level.
    pub fn log(&self) {
        let code = self.exit_code();
        match self.kind() {
            ExitKind::Usage | ExitKind::NotFound => tracing::warn!(code, "{self}"),
            ExitKind::Configuration | ExitKind::Internal => tracing::error!(code, "{self}"),
        }

        if let Some(source) = self.source() {
            tracing::debug!(%source, "Caused by");
        }
    }
}

fn paint(text: &str, color: bool, style: fn(&str) -> String) -> String {
    if color { style(text) } else { text.to_string() }
}
