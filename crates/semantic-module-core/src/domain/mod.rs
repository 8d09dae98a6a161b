//! Core domain layer for create-semantic-module.
//!
//! Pure logic only: option keys and values, the layered option set, the
//! questions and their defaults, the manifest patch, the dependency list and
//! the install commands. All I/O goes through the ports defined in the
//! application layer.
//!
//! - **No I/O**: no filesystem, terminal, or process calls
//! - **Deterministic**: every function is a function of its inputs
//! - **Small dependency surface**: std, serde, serde_json, thiserror

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{
    dependencies::{DependencyList, InstallCommand},
    invocation::Invocation,
    manifest::{MANIFEST_FILE, PackageManifestPatch},
    questions::{InputQuestion, SelectQuestion, commitlint_default_choice},
    resolved_config::ResolvedConfig,
    template::{
        COMMITIZEN_CONFIG_FILE, COMMITLINT_CONFIG_FILE, CommitlintTemplate, RenderContext,
        commitizen_config_source,
    },
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    ADAPTER_CHOICES, BASE_PACKAGES, COMMITLINT_PROMPT, CONFIG_CONVENTIONAL, CUSTOM_CHOICE,
    CZ_CUSTOMIZABLE, ConfigValue, NONE_CHOICE, OptionKey, Packager,
    WELL_KNOWN_COMMITLINT_CONFIGS,
};
