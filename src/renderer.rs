//! Placeholder substitution for the built-in templates.
//! Templates carry `{{key}}` slots that are filled from a JSON object;
//! there is no control flow and no escaping.
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*[A-Za-z_][A-Za-z0-9_]*\s*\}\}").expect("placeholder pattern is valid")
});

/// Trait for template rendering.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// Renderer that replaces each `{{key}}` with the matching context value.
#[derive(Debug, Default)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    /// # Errors
    /// * `Error::TemplateError` if a placeholder names a key missing from `context`
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut rendered = String::with_capacity(template.len());
        let mut last = 0;

        for slot in PLACEHOLDER.find_iter(template) {
            let key = slot.as_str().trim_start_matches("{{").trim_end_matches("}}").trim();
            let value = match context.get(key) {
                Some(serde_json::Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => {
                    return Err(Error::TemplateError(format!(
                        "no value for placeholder '{key}'"
                    )))
                }
            };
            rendered.push_str(&template[last..slot.start()]);
            rendered.push_str(&value);
            last = slot.end();
        }

        rendered.push_str(&template[last..]);
        Ok(rendered)
    }
}
