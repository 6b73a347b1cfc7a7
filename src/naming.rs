//! Identifier handling shared by all generators.
//! Derives the PascalCase and camelCase forms that end up in file names
//! and exported symbols of the generated code.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::COMPONENT_NAME_PATTERN;

static COMPONENT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(COMPONENT_NAME_PATTERN).expect("component name pattern is valid"));

/// Returns true when `name` is an acceptable component name
/// (starts uppercase, alphanumeric only).
pub fn is_pascal_case(name: &str) -> bool {
    COMPONENT_NAME.is_match(name)
}

/// Upper-cases the first character of a word and lower-cases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

/// Converts a kebab-case or snake_case string to PascalCase.
///
/// Each `-`/`_` delimited word is capitalized, so `user-profile` becomes
/// `UserProfile` and `userProfile` becomes `Userprofile`.
pub fn to_pascal_case(name: &str) -> String {
    name.split(['-', '_']).map(capitalize).collect()
}

/// Converts a kebab-case or snake_case string to camelCase.
pub fn to_camel_case(name: &str) -> String {
    let pascal = to_pascal_case(name);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The raw identifier given on the command line and its derived forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Names {
    pub raw: String,
    pub pascal: String,
    pub camel: String,
}

impl Names {
    pub fn new(raw: &str) -> Self {
        Self { raw: raw.to_string(), pascal: to_pascal_case(raw), camel: to_camel_case(raw) }
    }

    /// Placeholder context exposing `name`, `pascal` and `camel`.
    pub fn context(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.raw,
            "pascal": self.pascal,
            "camel": self.camel,
        })
    }
}
