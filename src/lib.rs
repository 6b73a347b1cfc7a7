//! fsdgen writes boilerplate for feature-sliced front-end projects:
//! component triads, the layered folder tree, service/hook pairs and
//! state stores, each named after a single identifier.

/// Command-line interface module
pub mod cli;

/// Optional project configuration (fsdgen.json, fsdgen.yml, fsdgen.yaml)
pub mod config;

pub mod constants;

/// Error types and handling
pub mod error;

/// Component, structure, service/hook and store generators
pub mod generator;

pub mod logger;

/// PascalCase/camelCase derivation and component name validation
pub mod naming;

/// Placeholder substitution for the built-in templates
pub mod renderer;

/// Built-in template tables
pub mod templates;

/// Directory creation and file writing
pub mod writer;
