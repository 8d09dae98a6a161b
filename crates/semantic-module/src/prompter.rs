//! Terminal prompter built on `dialoguer`.

use std::io;

use console::Term;
use dialoguer::{
    Input, Select,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};
use semantic_module_core::{
    application::{ApplicationError, ports::Prompter},
    domain::{InputQuestion, SelectQuestion},
    error::{ScaffoldError, ScaffoldResult},
};
use tracing::debug;

/// Asks questions on stderr so stdout stays clean for piping.
pub struct DialoguerPrompter {
    theme: Box<dyn Theme + Send + Sync>,
    term: Term,
}

impl DialoguerPrompter {
    pub fn new(color: bool) -> Self {
        let theme: Box<dyn Theme + Send + Sync> = if color {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };
        Self {
            theme,
            term: Term::stderr(),
        }
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, question: &SelectQuestion) -> ScaffoldResult<String> {
        let mut select = Select::with_theme(self.theme.as_ref())
            .with_prompt(question.message.as_str())
            .items(&question.choices);
        if let Some(index) = question.default_index() {
            select = select.default(index);
        }

        let index = select
            .interact_on_opt(&self.term)
            .map_err(map_dialoguer_error)?
            .ok_or(ApplicationError::PromptCancelled)?;

        let answer = question.choices[index].clone();
        debug!(key = %question.key, %answer, "Answer selected");
        Ok(answer)
    }

    fn input(&self, question: &InputQuestion) -> ScaffoldResult<String> {
        let mut input = Input::<String>::with_theme(self.theme.as_ref())
            .with_prompt(question.message.as_str())
            .allow_empty(true);
        if let Some(default) = &question.default {
            input = input.default(default.clone());
        }

        let answer = input
            .interact_text_on(&self.term)
            .map_err(map_dialoguer_error)?;
        debug!(key = %question.key, %answer, "Answer entered");
        Ok(answer)
    }
}

fn map_dialoguer_error(err: dialoguer::Error) -> ScaffoldError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
            ApplicationError::PromptCancelled.into()
        }
        other => ApplicationError::PromptFailed {
            reason: other.to_string(),
        }
        .into(),
    }
}
