//! Built-in templates and the context they are rendered with.
//!
//! Templates are embedded in the binary. Placeholders use `{{VARIABLE}}`
//! syntax and are substituted by a [`TemplateRenderer`] implementation.
//!
//! [`TemplateRenderer`]: crate::application::ports::TemplateRenderer

use std::collections::HashMap;

use crate::domain::value_objects::{CZ_CUSTOMIZABLE, ConfigValue};

/// Output file of the commitlint template.
pub const COMMITLINT_CONFIG_FILE: &str = "commitlint.config.js";

/// Companion file read by `cz-customizable`.
pub const COMMITIZEN_CONFIG_FILE: &str = "commitizen.config.js";

/// Placeholder holding the commitlint config as a JavaScript literal.
pub const COMMITLINT_CONFIG_VAR: &str = "COMMITLINT_CONFIG";

const COMMITLINT_DEFAULT_SOURCE: &str = include_str!("../../../templates/commitlint.config.js");
const COMMITLINT_COMMITIZEN_SOURCE: &str =
    include_str!("../../../templates/commitlint-commitizen.config.js");
const COMMITIZEN_CONFIG_SOURCE: &str = include_str!("../../../templates/commitizen.config.js");

/// Which commitlint template to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitlintTemplate {
    /// Plain `extends` config.
    Default,
    /// Derives `type-enum`/`scope-enum` from `commitizen.config.js`.
    Commitizen,
}

impl CommitlintTemplate {
    /// Pick the variant for a commitizen adapter.
    pub fn for_adapter(adapter: &str) -> Self {
        if adapter == CZ_CUSTOMIZABLE {
            Self::Commitizen
        } else {
            Self::Default
        }
    }

    /// Template name as shipped.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "commitlint.config.js",
            Self::Commitizen => "commitlint-commitizen.config.js",
        }
    }

    pub const fn source(self) -> &'static str {
        match self {
            Self::Default => COMMITLINT_DEFAULT_SOURCE,
            Self::Commitizen => COMMITLINT_COMMITIZEN_SOURCE,
        }
    }

    /// Whether this variant needs `commitizen.config.js` next to it.
    pub const fn needs_companion(self) -> bool {
        matches!(self, Self::Commitizen)
    }
}

/// Verbatim content of `commitizen.config.js`.
pub const fn commitizen_config_source() -> &'static str {
    COMMITIZEN_CONFIG_SOURCE
}

/// Variables available to a template.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for the commitlint template.
    pub fn for_commitlint(config: &ConfigValue) -> Self {
        Self::new().with_variable(COMMITLINT_CONFIG_VAR, config.to_js_literal())
    }

    /// Add a variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Unknown placeholders are left as-is.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}
