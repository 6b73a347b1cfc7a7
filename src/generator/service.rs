//! Service/hook pair generator: request wrapper, cache keys and query hooks
//! for one resource in `<feature>/api/`.

use log::debug;
use std::path::Path;

use crate::error::Result;
use crate::generator::Report;
use crate::naming::Names;
use crate::renderer::TemplateRenderer;
use crate::templates::service::{HOOKS_TS, KEYS_TS, SERVICE_TS, TYPES_TS};
use crate::writer::{absolute_path, has_entries, write_all, GeneratedFile};

/// Renders the four api files for `names`, in write order.
///
/// `api_client` is the module path the request wrapper imports its HTTP client from.
pub fn render_service_hook(
    renderer: &dyn TemplateRenderer,
    names: &Names,
    api_client: &str,
) -> Result<Vec<GeneratedFile>> {
    let mut context = names.context();
    context["api_client"] = serde_json::Value::String(api_client.to_string());

    Ok(vec![
        GeneratedFile::new("types.ts", renderer.render(TYPES_TS, &context)?),
        GeneratedFile::new(format!("{}.service.ts", names.raw), renderer.render(SERVICE_TS, &context)?),
        GeneratedFile::new(format!("{}.keys.ts", names.raw), renderer.render(KEYS_TS, &context)?),
        GeneratedFile::new(format!("use{}.ts", names.pascal), renderer.render(HOOKS_TS, &context)?),
    ])
}

/// Writes the service/hook pair for `service_name` into `<feature_path>/api`.
///
/// A non-empty `api` directory only produces a warning; existing files with
/// the same names are overwritten.
///
/// # Errors
/// * `Error::IoError` if the directory cannot be inspected or a file cannot be written
pub fn create_service_hook<P: AsRef<Path>>(
    renderer: &dyn TemplateRenderer,
    feature_path: P,
    service_name: &str,
    api_client: &str,
) -> Result<Report> {
    let api_path = feature_path.as_ref().join("api");
    let names = Names::new(service_name);

    let mut warnings = Vec::new();
    if has_entries(&api_path)? {
        warnings.push(format!("API directory already has files at {}", api_path.display()));
    }

    let files = render_service_hook(renderer, &names, api_client)?;
    debug!("Creating service/hook pair {} in {}", service_name, api_path.display());
    let created = write_all(&api_path, &files)?;

    let Names { pascal, .. } = &names;
    Ok(Report {
        heading: format!("Creating service/hook pair: {service_name}"),
        location: absolute_path(&api_path),
        created,
        warnings,
        summary: "Service/Hook pair created successfully!".to_string(),
        notes: vec![
            "Exports to add to feature index.ts:".to_string(),
            format!(
                "  export {{ use{pascal}List, use{pascal}Detail, use{pascal}Create, use{pascal}Update, use{pascal}Delete }} from './api/use{pascal}';"
            ),
            format!("  export type {{ {pascal}ItemDto }} from './api/types';"),
        ],
    })
}
