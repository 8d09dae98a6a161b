//! Interactive collection - the second phase.
//!
//! Asks the packager (optionally), adapter and commitlint questions, each
//! pre-filled from the store, then writes every answer back in one call.

use tracing::{debug, instrument};

use crate::{
    application::ports::{ConfigStore, Prompter},
    domain::{
        CUSTOM_CHOICE, ConfigValue, InputQuestion, NONE_CHOICE, OptionKey, ResolvedConfig,
        SelectQuestion,
    },
    error::ScaffoldResult,
};

/// The commitlint question as a state machine.
///
/// ```text
/// Collecting ──custom──▶ CollectingCustomName ──text──▶ Resolved
///     │
///     └──────── any other choice ──────────────────────▶ Resolved
/// ```
///
/// Both prompting states carry the previously stored value: the select
/// question derives its default from it, and the custom follow-up is
/// pre-filled with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitlintPrompt {
    Collecting { persisted: Option<ConfigValue> },
    CollectingCustomName { persisted: Option<ConfigValue> },
    Resolved(ConfigValue),
}

impl CommitlintPrompt {
    pub fn new(persisted: Option<ConfigValue>) -> Self {
        Self::Collecting { persisted }
    }

    /// Ask the question for the current state and move to the next one.
    pub fn advance(self, prompter: &dyn Prompter) -> ScaffoldResult<Self> {
        match self {
            Self::Collecting { persisted } => {
                let question = SelectQuestion::commitlint_config(persisted.as_ref());
                let choice = prompter.select(&question)?;
                Ok(Self::on_choice(choice, persisted))
            }
            Self::CollectingCustomName { persisted } => {
                let question = InputQuestion::custom_commitlint_config(persisted.as_ref());
                let text = prompter.input(&question)?;
                let name = text.trim();
                Ok(Self::Resolved(if name.is_empty() {
                    ConfigValue::DISABLED
                } else {
                    ConfigValue::text(name)
                }))
            }
            resolved @ Self::Resolved(_) => Ok(resolved),
        }
    }

    fn on_choice(choice: String, persisted: Option<ConfigValue>) -> Self {
        match choice.as_str() {
            CUSTOM_CHOICE => Self::CollectingCustomName { persisted },
            NONE_CHOICE => Self::Resolved(ConfigValue::DISABLED),
            _ => Self::Resolved(ConfigValue::Text(choice)),
        }
    }

    /// Drive the machine until it resolves.
    pub fn resolve(self, prompter: &dyn Prompter) -> ScaffoldResult<ConfigValue> {
        let mut state = self;
        loop {
            match state {
                Self::Resolved(value) => return Ok(value),
                pending => state = pending.advance(prompter)?,
            }
        }
    }
}

/// Ask every question and persist the answers.
///
/// Returns only the answered keys; the store holds the merged result.
#[instrument(skip_all, fields(prompt_packager = prompt_packager))]
pub fn collect_answers(
    prompter: &dyn Prompter,
    store: &dyn ConfigStore,
    prompt_packager: bool,
) -> ScaffoldResult<ResolvedConfig> {
    let persisted = store.get_all()?;
    let mut answers = ResolvedConfig::new();

    if prompt_packager {
        let question = SelectQuestion::packager(persisted.get(OptionKey::Packager));
        answers.set(OptionKey::Packager, prompter.select(&question)?);
    }

    let question = SelectQuestion::commitizen_adapter(persisted.get(OptionKey::CommitizenAdapter));
    answers.set(OptionKey::CommitizenAdapter, prompter.select(&question)?);

    let commitlint = CommitlintPrompt::new(persisted.get(OptionKey::CommitlintConfig).cloned())
        .resolve(prompter)?;
    answers.set(OptionKey::CommitlintConfig, commitlint);

    store.set_all(&answers)?;

    debug!(answers = answers.len(), "Answers persisted");
    Ok(answers)
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;

    use super::*;
    use crate::application::ports::{MockConfigStore, MockPrompter};

    fn store_with(persisted: ResolvedConfig) -> MockConfigStore {
        let mut store = MockConfigStore::new();
        store
            .expect_get_all()
            .returning(move || Ok(persisted.clone()));
        store.expect_set_all().returning(|_| Ok(()));
        store
    }

    #[test]
    fn none_resolves_to_false() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_select()
            .returning(|_| Ok(NONE_CHOICE.to_string()));

        let value = CommitlintPrompt::new(None).resolve(&prompter).unwrap();
        assert_eq!(value, ConfigValue::DISABLED);
    }

    #[test]
    fn well_known_choice_resolves_directly() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_select()
            .times(1)
            .returning(|_| Ok("@commitlint/config-angular".to_string()));
        prompter.expect_input().never();

        let state = CommitlintPrompt::new(None).advance(&prompter).unwrap();
        assert_eq!(
            state,
            CommitlintPrompt::Resolved(ConfigValue::text("@commitlint/config-angular"))
        );
    }

    #[test]
    fn custom_moves_to_follow_up_with_previous_value() {
        let previous = ConfigValue::text("@acme/commitlint-config");

        let mut prompter = MockPrompter::new();
        prompter
            .expect_select()
            .withf(|q| q.default.as_deref() == Some(CUSTOM_CHOICE))
            .returning(|_| Ok(CUSTOM_CHOICE.to_string()));
        prompter
            .expect_input()
            .withf(|q| q.default.as_deref() == Some("@acme/commitlint-config"))
            .times(1)
            .returning(|_| Ok("  @acme/other-config ".to_string()));

        let state = CommitlintPrompt::new(Some(previous.clone()))
            .advance(&prompter)
            .unwrap();
        assert_eq!(
            state,
            CommitlintPrompt::CollectingCustomName {
                persisted: Some(previous)
            }
        );

        let value = state.resolve(&prompter).unwrap();
        assert_eq!(value, ConfigValue::text("@acme/other-config"));
    }

    #[test]
    fn empty_custom_name_disables_config() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_select()
            .returning(|_| Ok(CUSTOM_CHOICE.to_string()));
        prompter.expect_input().returning(|_| Ok("   ".to_string()));

        let value = CommitlintPrompt::new(None).resolve(&prompter).unwrap();
        assert_eq!(value, ConfigValue::DISABLED);
    }

    #[test]
    fn packager_question_skipped_when_not_prompting() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_select()
            .withf(|q| q.key == OptionKey::Packager)
            .never();
        prompter
            .expect_select()
            .withf(|q| q.key == OptionKey::CommitizenAdapter)
            .times(1)
            .returning(|_| Ok("@commitlint/prompt".to_string()));
        prompter
            .expect_select()
            .withf(|q| q.key == OptionKey::CommitlintConfig)
            .times(1)
            .returning(|_| Ok("@commitlint/config-angular".to_string()));

        let answers = collect_answers(
            &prompter,
            &store_with(ResolvedConfig::builtin_defaults()),
            false,
        )
        .unwrap();
        assert!(!answers.contains(OptionKey::Packager));
        assert_eq!(
            answers.text(OptionKey::CommitlintConfig),
            Some("@commitlint/config-angular")
        );
    }

    #[test]
    fn questions_are_asked_in_order_with_persisted_defaults() {
        let mut seq = Sequence::new();
        let mut prompter = MockPrompter::new();
        prompter
            .expect_select()
            .withf(|q| q.key == OptionKey::Packager && q.default.as_deref() == Some("yarn"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("yarn".to_string()));
        prompter
            .expect_select()
            .withf(|q| {
                q.key == OptionKey::CommitizenAdapter
                    && q.default.as_deref() == Some("cz-customizable")
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("cz-customizable".to_string()));
        prompter
            .expect_select()
            .withf(|q| q.key == OptionKey::CommitlintConfig && q.default.as_deref() == Some("none"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(NONE_CHOICE.to_string()));

        let persisted = ResolvedConfig::new()
            .with(OptionKey::Packager, "yarn")
            .with(OptionKey::CommitizenAdapter, "cz-customizable")
            .with(OptionKey::CommitlintConfig, ConfigValue::DISABLED);

        let answers = collect_answers(&prompter, &store_with(persisted), true).unwrap();
        assert_eq!(answers.text(OptionKey::Packager), Some("yarn"));
        assert_eq!(
            answers.get(OptionKey::CommitlintConfig),
            Some(&ConfigValue::DISABLED)
        );
    }

    #[test]
    fn custom_follow_up_keeps_earlier_answers() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_select()
            .withf(|q| q.key == OptionKey::Packager)
            .returning(|_| Ok("yarn".to_string()));
        prompter
            .expect_select()
            .withf(|q| q.key == OptionKey::CommitizenAdapter)
            .returning(|_| Ok("cz-customizable".to_string()));
        prompter
            .expect_select()
            .withf(|q| q.key == OptionKey::CommitlintConfig)
            .returning(|_| Ok(CUSTOM_CHOICE.to_string()));
        prompter
            .expect_input()
            .returning(|_| Ok("@acme/config".to_string()));

        let expected = ResolvedConfig::new()
            .with(OptionKey::Packager, "yarn")
            .with(OptionKey::CommitizenAdapter, "cz-customizable")
            .with(OptionKey::CommitlintConfig, "@acme/config");

        let mut store = MockConfigStore::new();
        store
            .expect_get_all()
            .returning(|| Ok(ResolvedConfig::builtin_defaults()));
        store
            .expect_set_all()
            .with(mockall::predicate::eq(expected.clone()))
            .times(1)
            .returning(|_| Ok(()));

        let answers = collect_answers(&prompter, &store, true).unwrap();
        assert_eq!(answers, expected);
    }
}
