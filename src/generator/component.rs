//! Component triad generator: `<base>/<Name>/{index.tsx,types.ts,styles.ts}`.

use log::debug;
use std::path::Path;

use crate::constants::COMPONENT_NAME_PATTERN;
use crate::error::{Error, Result};
use crate::generator::Report;
use crate::naming::is_pascal_case;
use crate::renderer::TemplateRenderer;
use crate::templates::component::FILES;
use crate::writer::{absolute_path, write_all, GeneratedFile};

/// Renders the three component files without touching the filesystem.
///
/// # Errors
/// * `Error::InvalidComponentName` if `name` is not PascalCase
pub fn render_component(renderer: &dyn TemplateRenderer, name: &str) -> Result<Vec<GeneratedFile>> {
    if !is_pascal_case(name) {
        return Err(Error::InvalidComponentName {
            pattern: COMPONENT_NAME_PATTERN,
            given: name.to_string(),
        });
    }

    let context = serde_json::json!({ "name": name });
    FILES
        .iter()
        .map(|(file_name, template)| -> Result<GeneratedFile> {
            Ok(GeneratedFile::new(*file_name, renderer.render(template, &context)?))
        })
        .collect()
}

/// Creates a component directory named after `name` inside `base_path`.
///
/// Nothing is written when the name is invalid or the directory exists.
///
/// # Errors
/// * `Error::InvalidComponentName` if `name` is not PascalCase
/// * `Error::ComponentExists` if `<base_path>/<name>` is already present
/// * `Error::IoError` if writing fails
pub fn create_component<P: AsRef<Path>>(
    renderer: &dyn TemplateRenderer,
    base_path: P,
    name: &str,
) -> Result<Report> {
    let base_path = base_path.as_ref();
    let files = render_component(renderer, name)?;

    let component_path = base_path.join(name);
    if component_path.exists() {
        return Err(Error::ComponentExists { path: component_path.display().to_string() });
    }

    debug!("Creating component {} in {}", name, component_path.display());
    let created = write_all(&component_path, &files)?;

    Ok(Report {
        heading: format!("Creating component: {name}"),
        location: absolute_path(&component_path),
        created,
        warnings: Vec::new(),
        summary: format!("Component {name} created successfully!"),
        notes: vec![
            "Usage:".to_string(),
            format!("  import {{ {name} }} from '{}/{name}';", base_path.display()),
        ],
    })
}
