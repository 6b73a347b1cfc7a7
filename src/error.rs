//! Error handling for fsdgen.
//! Defines the error type and result alias used by every generator.

use thiserror::Error;

/// Errors that can occur while generating files.
///
/// Only the first two variants are expected outcomes of a generator run;
/// everything else is a hard failure of the invocation.
#[derive(Error, Debug)]
pub enum Error {
    /// The component name does not match the PascalCase pattern.
    #[error("Component name must be PascalCase (e.g., Button, UserProfile), matching `{pattern}`. Given: '{given}'.")]
    InvalidComponentName { pattern: &'static str, given: String },

    /// The component directory is already present.
    #[error("Component already exists at '{path}'.")]
    ComponentExists { path: String },

    /// Represents errors that occur during configuration loading
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors that occur during template substitution
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("Error: {err}");
    std::process::exit(1);
}
