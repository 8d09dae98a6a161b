//! Non-terminal prompters. The terminal prompter lives in the CLI crate.

mod defaults;
mod scripted;

pub use defaults::DefaultsPrompter;
pub use scripted::ScriptedPrompter;
