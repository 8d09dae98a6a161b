//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the orchestrator needs from external systems.
//! The `semantic-module-adapters` crate provides implementations; the CLI
//! adds the terminal prompter.

use std::path::Path;

use crate::domain::{
    ConfigValue, InputQuestion, InstallCommand, OptionKey, RenderContext, ResolvedConfig,
    SelectQuestion,
};
use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `semantic_module_adapters::filesystem::LocalFilesystem` (production)
/// - `semantic_module_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Read a whole file as UTF-8.
    ///
    /// A missing file is reported as `ApplicationError::FileNotFound`.
    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the persisted answer store of one destination directory.
///
/// Implemented by:
/// - `semantic_module_adapters::config_store::JsonFileStore` (production)
/// - `semantic_module_adapters::config_store::InMemoryConfigStore` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore: Send + Sync {
    /// Value stored under `key`.
    fn get(&self, key: OptionKey) -> ScaffoldResult<Option<ConfigValue>>;

    /// Every stored value.
    fn get_all(&self) -> ScaffoldResult<ResolvedConfig>;

    /// Store one value, overwriting any previous one.
    fn set(&self, key: OptionKey, value: ConfigValue) -> ScaffoldResult<()>;

    /// Store every value in `values` in a single write.
    fn set_all(&self, values: &ResolvedConfig) -> ScaffoldResult<()>;

    /// Store values only for keys that have none yet.
    fn defaults(&self, values: &ResolvedConfig) -> ScaffoldResult<()>;
}

/// Port for asking the user questions.
///
/// Implemented by:
/// - `semantic_module::prompter::DialoguerPrompter` (terminal)
/// - `semantic_module_adapters::prompter::DefaultsPrompter` (`--yes`)
/// - `semantic_module_adapters::prompter::ScriptedPrompter` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Prompter: Send + Sync {
    /// Ask a single-choice question; returns the chosen value.
    fn select(&self, question: &SelectQuestion) -> ScaffoldResult<String>;

    /// Ask a free-text question; returns the entered text.
    fn input(&self, question: &InputQuestion) -> ScaffoldResult<String>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `semantic_module_adapters::renderer::SimpleRenderer` (variable substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `source` with the variables in `context`.
    fn render(&self, source: &str, context: &RenderContext) -> ScaffoldResult<String>;
}

/// Port for running package-manager commands.
///
/// Implemented by:
/// - `semantic_module_adapters::installer::ProcessInstaller` (spawns npm/yarn)
/// - `semantic_module_adapters::installer::RecordingInstaller` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait PackageInstaller: Send + Sync {
    /// Run `command` inside `working_dir`, blocking until it exits.
    fn run(&self, command: &InstallCommand, working_dir: &Path) -> ScaffoldResult<()>;
}
