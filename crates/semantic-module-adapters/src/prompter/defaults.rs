//! Prompter that accepts every default.

use semantic_module_core::{
    application::ports::Prompter,
    domain::{InputQuestion, SelectQuestion},
    error::ScaffoldResult,
};
use tracing::debug;

/// Answers each question with its pre-selected value.
///
/// Select questions without a default take the first choice; input
/// questions without one answer with empty text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultsPrompter;

impl DefaultsPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DefaultsPrompter {
    fn select(&self, question: &SelectQuestion) -> ScaffoldResult<String> {
        let answer = question
            .default
            .clone()
            .or_else(|| question.choices.first().cloned())
            .unwrap_or_default();
        debug!(key = %question.key, %answer, "Default selected");
        Ok(answer)
    }

    fn input(&self, question: &InputQuestion) -> ScaffoldResult<String> {
        let answer = question.default.clone().unwrap_or_default();
        debug!(key = %question.key, %answer, "Default entered");
        Ok(answer)
    }
}
