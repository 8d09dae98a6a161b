//! Value objects: option keys, stored values, packagers, well-known packages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

// ============================================================================
// OptionKey
// ============================================================================

/// The configuration fields the generator recognizes.
///
/// Serialized with the camelCase spelling used in the persisted store
/// (`moduleName`, `packager`, ...). Parsing also accepts the kebab-case flag
/// spelling (`module-name`, `commitizen-adapter`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum OptionKey {
    ModuleName,
    Packager,
    CommitizenAdapter,
    CommitlintConfig,
}

impl OptionKey {
    /// Every recognized key, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::ModuleName,
        Self::Packager,
        Self::CommitizenAdapter,
        Self::CommitlintConfig,
    ];

    /// Key as stored on disk.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ModuleName => "moduleName",
            Self::Packager => "packager",
            Self::CommitizenAdapter => "commitizenAdapter",
            Self::CommitlintConfig => "commitlintConfig",
        }
    }

    /// Key as spelled on the command line.
    pub const fn flag_name(self) -> &'static str {
        match self {
            Self::ModuleName => "module-name",
            Self::Packager => "packager",
            Self::CommitizenAdapter => "commitizen-adapter",
            Self::CommitlintConfig => "commitlint-config",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s || key.flag_name() == s)
            .ok_or_else(|| DomainError::UnknownOption(s.to_string()))
    }
}

// ============================================================================
// ConfigValue
// ============================================================================

/// A stored option value.
///
/// Either a package/packager name, or the boolean `false` that marks
/// "no commitlint config". Serialized untagged so the persisted file holds
/// plain JSON strings and booleans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Text(String),
    Flag(bool),
}

impl ConfigValue {
    /// The `false` marker.
    pub const DISABLED: Self = Self::Flag(false);

    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            Self::Flag(_) => None,
        }
    }

    /// JavaScript truthiness: empty strings and `false` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Flag(b) => *b,
        }
    }

    /// Render as a JavaScript literal (`"name"` or `false`).
    pub fn to_js_literal(&self) -> String {
        match self {
            Self::Text(s) => serde_json::Value::String(s.clone()).to_string(),
            Self::Flag(b) => b.to_string(),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Flag(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

// ============================================================================
// Packager
// ============================================================================

/// Package manager used for installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Packager {
    #[default]
    Npm,
    Yarn,
}

impl Packager {
    /// Choices offered by the packager prompt.
    pub const CHOICES: [&'static str; 2] = ["npm", "yarn"];

    /// Map a stored value to a packager. Anything but `yarn` is npm.
    pub fn from_value(value: Option<&ConfigValue>) -> Self {
        match value.and_then(ConfigValue::as_text) {
            Some("yarn") => Self::Yarn,
            _ => Self::Npm,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
        }
    }
}

impl fmt::Display for Packager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Well-known packages
// ============================================================================

/// Commitizen adapter that ships its own config file.
pub const CZ_CUSTOMIZABLE: &str = "cz-customizable";

/// Default commitizen adapter.
pub const COMMITLINT_PROMPT: &str = "@commitlint/prompt";

/// Choices offered by the adapter prompt.
pub const ADAPTER_CHOICES: [&str; 2] = [COMMITLINT_PROMPT, CZ_CUSTOMIZABLE];

/// Default commitlint config.
pub const CONFIG_CONVENTIONAL: &str = "@commitlint/config-conventional";

/// Commitlint configs offered by name.
pub const WELL_KNOWN_COMMITLINT_CONFIGS: [&str; 4] = [
    CONFIG_CONVENTIONAL,
    "@commitlint/config-angular",
    "@commitlint/config-lerna-scopes",
    "@commitlint/config-patternplate",
];

/// Choice that leads to the free-text follow-up.
pub const CUSTOM_CHOICE: &str = "custom";

/// Choice that disables the commitlint config.
pub const NONE_CHOICE: &str = "none";

/// Packages installed on every run, before the adapter.
pub const BASE_PACKAGES: [&str; 3] = ["commitizen", "@commitlint/cli", "husky"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_key_parses_both_spellings() {
        assert_eq!("moduleName".parse::<OptionKey>().unwrap(), OptionKey::ModuleName);
        assert_eq!("module-name".parse::<OptionKey>().unwrap(), OptionKey::ModuleName);
        assert_eq!(
            "commitlint-config".parse::<OptionKey>().unwrap(),
            OptionKey::CommitlintConfig
        );
        assert!(matches!(
            "force".parse::<OptionKey>(),
            Err(DomainError::UnknownOption(_))
        ));
    }

    #[test]
    fn option_key_serializes_camel_case() {
        let json = serde_json::to_string(&OptionKey::CommitizenAdapter).unwrap();
        assert_eq!(json, "\"commitizenAdapter\"");
    }

    #[test]
    fn config_value_round_trips_untagged() {
        let text: ConfigValue = serde_json::from_str("\"husky\"").unwrap();
        let flag: ConfigValue = serde_json::from_str("false").unwrap();
        assert_eq!(text, ConfigValue::text("husky"));
        assert_eq!(flag, ConfigValue::DISABLED);
    }

    #[test]
    fn truthiness_follows_javascript() {
        assert!(ConfigValue::text("x").is_truthy());
        assert!(!ConfigValue::text("").is_truthy());
        assert!(!ConfigValue::DISABLED.is_truthy());
    }

    #[test]
    fn js_literal_quotes_text_only() {
        assert_eq!(
            ConfigValue::text("@commitlint/config-angular").to_js_literal(),
            "\"@commitlint/config-angular\""
        );
        assert_eq!(ConfigValue::DISABLED.to_js_literal(), "false");
    }

    #[test]
    fn packager_defaults_to_npm_for_anything_but_yarn() {
        assert_eq!(Packager::from_value(Some(&"yarn".into())), Packager::Yarn);
        assert_eq!(Packager::from_value(Some(&"pnpm".into())), Packager::Npm);
        assert_eq!(Packager::from_value(Some(&ConfigValue::DISABLED)), Packager::Npm);
        assert_eq!(Packager::from_value(None), Packager::Npm);
    }
}
