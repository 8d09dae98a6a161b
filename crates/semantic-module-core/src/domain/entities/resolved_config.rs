//! Layered option set.
//!
//! A [`ResolvedConfig`] is built in layers: built-in defaults, the persisted
//! store, command-line flags, then interactive answers. Each layer overrides
//! the previous one for the keys it supplies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{
        COMMITLINT_PROMPT, CONFIG_CONVENTIONAL, ConfigValue, OptionKey, Packager,
    },
};

/// Mapping from [`OptionKey`] to its current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedConfig {
    values: BTreeMap<OptionKey, ConfigValue>,
}

impl ResolvedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in defaults: npm, `@commitlint/prompt`, conventional config.
    pub fn builtin_defaults() -> Self {
        Self::new()
            .with(OptionKey::Packager, Packager::Npm.as_str())
            .with(OptionKey::CommitizenAdapter, COMMITLINT_PROMPT)
            .with(OptionKey::CommitlintConfig, CONFIG_CONVENTIONAL)
    }

    /// Keep only recognized keys from a raw flag map.
    ///
    /// Unknown keys are dropped; values pass through unvalidated.
    pub fn from_flags<'a, I>(flags: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        flags
            .into_iter()
            .filter_map(|(key, value)| {
                key.parse::<OptionKey>()
                    .ok()
                    .map(|key| (key, ConfigValue::Text(value.clone())))
            })
            .collect()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: OptionKey, value: impl Into<ConfigValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: OptionKey, value: impl Into<ConfigValue>) {
        self.values.insert(key, value.into());
    }

    pub fn get(&self, key: OptionKey) -> Option<&ConfigValue> {
        self.values.get(&key)
    }

    pub fn contains(&self, key: OptionKey) -> bool {
        self.values.contains_key(&key)
    }

    /// Text value for `key`, if it is set to text.
    pub fn text(&self, key: OptionKey) -> Option<&str> {
        self.get(key).and_then(ConfigValue::as_text)
    }

    /// Layer `other` on top of `self`; keys in `other` win.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in &other.values {
            self.values.insert(*key, value.clone());
        }
    }

    /// Fill keys absent from `self` with values from `defaults`.
    pub fn fill_defaults(&mut self, defaults: &Self) {
        for (key, value) in &defaults.values {
            self.values.entry(*key).or_insert_with(|| value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (OptionKey, &ConfigValue)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // ------------------------------------------------------------------------
    // Typed accessors used by the writing and install phases
    // ------------------------------------------------------------------------

    pub fn packager(&self) -> Packager {
        Packager::from_value(self.get(OptionKey::Packager))
    }

    /// The commitizen adapter package. Required.
    pub fn commitizen_adapter(&self) -> Result<&str, DomainError> {
        self.text(OptionKey::CommitizenAdapter)
            .ok_or(DomainError::MissingOption {
                key: OptionKey::CommitizenAdapter.as_str(),
            })
    }

    /// The commitlint config value, text or `false`. Required.
    pub fn commitlint_config(&self) -> Result<&ConfigValue, DomainError> {
        self.get(OptionKey::CommitlintConfig)
            .ok_or(DomainError::MissingOption {
                key: OptionKey::CommitlintConfig.as_str(),
            })
    }

    /// Check every key the writing phase depends on is present.
    pub fn ensure_complete(&self) -> Result<(), DomainError> {
        for key in [
            OptionKey::Packager,
            OptionKey::CommitizenAdapter,
            OptionKey::CommitlintConfig,
        ] {
            if !self.contains(key) {
                return Err(DomainError::MissingOption { key: key.as_str() });
            }
        }
        Ok(())
    }
}

impl FromIterator<(OptionKey, ConfigValue)> for ResolvedConfig {
    fn from_iter<T: IntoIterator<Item = (OptionKey, ConfigValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn builtin_defaults_cover_everything_but_module_name() {
        let defaults = ResolvedConfig::builtin_defaults();
        assert_eq!(defaults.text(OptionKey::Packager), Some("npm"));
        assert_eq!(
            defaults.text(OptionKey::CommitizenAdapter),
            Some("@commitlint/prompt")
        );
        assert_eq!(
            defaults.text(OptionKey::CommitlintConfig),
            Some("@commitlint/config-conventional")
        );
        assert!(!defaults.contains(OptionKey::ModuleName));
    }

    #[test]
    fn from_flags_ignores_unrecognized_keys() {
        let flags: BTreeMap<String, String> = [
            ("packager".to_string(), "yarn".to_string()),
            ("skip-install".to_string(), "true".to_string()),
            ("commitlintConfig".to_string(), "my-config".to_string()),
        ]
        .into_iter()
        .collect();

        let config = ResolvedConfig::from_flags(&flags);
        assert_eq!(config.len(), 2);
        assert_eq!(config.text(OptionKey::Packager), Some("yarn"));
        assert_eq!(config.text(OptionKey::CommitlintConfig), Some("my-config"));
    }

    #[test]
    fn merge_overrides_and_fill_defaults_does_not() {
        let mut base = ResolvedConfig::new().with(OptionKey::Packager, "yarn");
        base.fill_defaults(&ResolvedConfig::builtin_defaults());
        assert_eq!(base.text(OptionKey::Packager), Some("yarn"));
        assert_eq!(base.len(), 3);

        base.merge(&ResolvedConfig::new().with(OptionKey::Packager, "npm"));
        assert_eq!(base.text(OptionKey::Packager), Some("npm"));
    }

    #[test]
    fn fill_defaults_keeps_disabled_config() {
        let mut config =
            ResolvedConfig::new().with(OptionKey::CommitlintConfig, ConfigValue::DISABLED);
        config.fill_defaults(&ResolvedConfig::builtin_defaults());
        assert_eq!(
            config.get(OptionKey::CommitlintConfig),
            Some(&ConfigValue::DISABLED)
        );
    }

    #[test]
    fn ensure_complete_reports_first_missing_key() {
        let config = ResolvedConfig::new().with(OptionKey::Packager, "npm");
        assert_eq!(
            config.ensure_complete(),
            Err(DomainError::MissingOption {
                key: "commitizenAdapter"
            })
        );
        assert!(ResolvedConfig::builtin_defaults().ensure_complete().is_ok());
    }

    #[test]
    fn serializes_as_flat_object() {
        let config = ResolvedConfig::new()
            .with(OptionKey::ModuleName, "foo")
            .with(OptionKey::CommitlintConfig, ConfigValue::DISABLED);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"moduleName":"foo","commitlintConfig":false}"#);
    }
}
