//! Prompter that replays canned answers.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use semantic_module_core::{
    application::{ApplicationError, ports::Prompter},
    domain::{InputQuestion, OptionKey, SelectQuestion},
    error::ScaffoldResult,
};

#[derive(Debug, Default)]
struct Script {
    answers: VecDeque<String>,
    asked: Vec<OptionKey>,
}

/// Answers questions from a queue, recording which keys were asked.
///
/// Clones share the queue and the record. Running out of answers, or a
/// select answer that is not among the choices, fails the prompt.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    script: Arc<Mutex<Script>>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: Arc::new(Mutex::new(Script {
                answers: answers.into_iter().map(Into::into).collect(),
                asked: Vec::new(),
            })),
        }
    }

    /// Keys of the questions asked so far, in order.
    pub fn asked(&self) -> Vec<OptionKey> {
        self.script
            .lock()
            .map(|s| s.asked.clone())
            .unwrap_or_default()
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.script.lock().map(|s| s.answers.len()).unwrap_or(0)
    }

    fn next(&self, key: OptionKey) -> ScaffoldResult<String> {
        let mut script = self
            .script
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned { name: "prompter" })?;
        script.asked.push(key);
        script.answers.pop_front().ok_or_else(|| {
            ApplicationError::PromptFailed {
                reason: format!("no scripted answer for `{key}`"),
            }
            .into()
        })
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, question: &SelectQuestion) -> ScaffoldResult<String> {
        let answer = self.next(question.key)?;
        if !question.choices.contains(&answer) {
            return Err(ApplicationError::PromptFailed {
                reason: format!("`{answer}` is not a choice for `{}`", question.key),
            }
            .into());
        }
        Ok(answer)
    }

    fn input(&self, question: &InputQuestion) -> ScaffoldResult<String> {
        self.next(question.key)
    }
}
