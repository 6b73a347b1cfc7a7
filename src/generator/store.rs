//! State-store generator: `<feature>/model/<camel>Store.ts`.

use log::debug;
use std::path::Path;

use crate::error::Result;
use crate::generator::Report;
use crate::naming::Names;
use crate::renderer::TemplateRenderer;
use crate::templates::store::STORE_TS;
use crate::writer::{absolute_path, write_all, GeneratedFile};

/// Renders the store module for `names`.
pub fn render_store(renderer: &dyn TemplateRenderer, names: &Names) -> Result<GeneratedFile> {
    let content = renderer.render(STORE_TS, &names.context())?;
    Ok(GeneratedFile::new(format!("{}Store.ts", names.camel), content))
}

/// Writes the store module for `store_name` into `<feature_path>/model`.
/// An existing module is overwritten without notice.
pub fn create_store<P: AsRef<Path>>(
    renderer: &dyn TemplateRenderer,
    feature_path: P,
    store_name: &str,
) -> Result<Report> {
    let model_path = feature_path.as_ref().join("model");
    let names = Names::new(store_name);

    let file = render_store(renderer, &names)?;
    debug!("Creating store {} in {}", store_name, model_path.display());
    let created = write_all(&model_path, &[file])?;

    let Names { pascal, camel, .. } = &names;
    Ok(Report {
        heading: format!("Creating Zustand store: {store_name}"),
        location: absolute_path(&model_path),
        created,
        warnings: Vec::new(),
        summary: "Zustand store created successfully!".to_string(),
        notes: vec![
            "Exports to add to feature index.ts:".to_string(),
            format!(
                "  export {{ use{pascal}Store, use{pascal}Items, use{pascal}IsOpen, use{pascal}Actions, use{pascal}ItemCount }} from './model/{camel}Store';"
            ),
            String::new(),
            "Usage in components:".to_string(),
            format!("  const items = use{pascal}Items();"),
            format!("  const {{ addItem, removeItem }} = use{pascal}Actions();"),
        ],
    })
}
