//! Built-in templates, one module per generator.
//! Placeholders use the `{{key}}` syntax understood by
//! [`PlaceholderRenderer`](crate::renderer::PlaceholderRenderer).

pub mod component;
pub mod service;
pub mod store;
pub mod structure;
