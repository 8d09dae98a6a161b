//! Simple variable substitution renderer.

use semantic_module_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::RenderContext,
    error::ScaffoldResult,
};
use tracing::instrument;

/// Simple renderer using `{{NAME}}` substitution.
///
/// Placeholders left unresolved after substitution are an error, so a
/// template can never reach disk half-rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(bytes = source.len()))]
    fn render(&self, source: &str, context: &RenderContext) -> ScaffoldResult<String> {
        let rendered = context.render(source);

        let missing = unresolved_placeholders(&rendered);
        if !missing.is_empty() {
            return Err(ApplicationError::RenderingFailed {
                reason: format!("unresolved placeholders: {}", missing.join(", ")),
            }
            .into());
        }

        Ok(rendered)
    }
}

/// Names inside `{{...}}` that look like variables.
fn unresolved_placeholders(text: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else { break };

        let name = after[..end].trim();
        if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            names.push(name);
        }
        rest = &after[end + 2..];
    }

    names
}
