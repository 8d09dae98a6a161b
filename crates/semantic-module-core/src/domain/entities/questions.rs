//! The questions asked during interactive collection.

use crate::domain::value_objects::{
    ADAPTER_CHOICES, CUSTOM_CHOICE, ConfigValue, NONE_CHOICE, OptionKey, Packager,
    WELL_KNOWN_COMMITLINT_CONFIGS,
};

/// A single-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuestion {
    pub key: OptionKey,
    pub message: String,
    pub choices: Vec<String>,
    /// Pre-selected choice. Must be one of `choices` when set.
    pub default: Option<String>,
}

impl SelectQuestion {
    fn new<'a>(
        key: OptionKey,
        message: &str,
        choices: impl IntoIterator<Item = &'a str>,
        default: Option<String>,
    ) -> Self {
        let choices: Vec<String> = choices.into_iter().map(str::to_string).collect();
        // A stale default that is not on offer falls back to no default.
        let default = default.filter(|d| choices.contains(d));
        Self {
            key,
            message: message.to_string(),
            choices,
            default,
        }
    }

    /// Index of the default choice, if any.
    pub fn default_index(&self) -> Option<usize> {
        let default = self.default.as_ref()?;
        self.choices.iter().position(|c| c == default)
    }

    pub fn packager(persisted: Option<&ConfigValue>) -> Self {
        Self::new(
            OptionKey::Packager,
            "Which packager do you use?",
            Packager::CHOICES,
            persisted.and_then(ConfigValue::as_text).map(str::to_string),
        )
    }

    pub fn commitizen_adapter(persisted: Option<&ConfigValue>) -> Self {
        Self::new(
            OptionKey::CommitizenAdapter,
            "Which commitizen adapter do you prefer?",
            ADAPTER_CHOICES,
            persisted.and_then(ConfigValue::as_text).map(str::to_string),
        )
    }

    pub fn commitlint_config(persisted: Option<&ConfigValue>) -> Self {
        Self::new(
            OptionKey::CommitlintConfig,
            "Which commitlint configuration would you like to extend?",
            WELL_KNOWN_COMMITLINT_CONFIGS
                .into_iter()
                .chain([CUSTOM_CHOICE, NONE_CHOICE]),
            Some(commitlint_default_choice(persisted).to_string()),
        )
    }
}

/// A free-text question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputQuestion {
    pub key: OptionKey,
    pub message: String,
    /// Pre-filled text.
    pub default: Option<String>,
}

impl InputQuestion {
    /// Follow-up to `custom`, pre-filled with the previously stored value.
    pub fn custom_commitlint_config(persisted: Option<&ConfigValue>) -> Self {
        Self {
            key: OptionKey::CommitlintConfig,
            message: "What is the package name of your custom commitlint config?".into(),
            default: persisted
                .filter(|v| v.is_truthy())
                .and_then(ConfigValue::as_text)
                .map(str::to_string),
        }
    }
}

/// Default selection for the commitlint question.
///
/// - a well-known config name selects itself
/// - any other non-empty value selects `custom`
/// - empty, absent, or `false` selects `none`
pub fn commitlint_default_choice(persisted: Option<&ConfigValue>) -> &'static str {
    match persisted {
        Some(ConfigValue::Text(name)) => WELL_KNOWN_COMMITLINT_CONFIGS
            .into_iter()
            .find(|known| known == name)
            .unwrap_or(if name.is_empty() { NONE_CHOICE } else { CUSTOM_CHOICE }),
        Some(value) if value.is_truthy() => CUSTOM_CHOICE,
        _ => NONE_CHOICE,
    }
}
