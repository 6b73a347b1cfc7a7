//! Feature-sliced project tree generator.
//!
//! Creates the six layers (`app`, `pages`, `widgets`, `features`,
//! `entities`, `shared`) with their starter files, then one subtree per
//! requested slice under `features/`. Re-running is safe for directories;
//! starter files are rewritten every time.

use log::debug;
use std::path::{Path, PathBuf};

use crate::constants::{GITKEEP, SLICE_SEGMENTS};
use crate::error::Result;
use crate::generator::Report;
use crate::renderer::TemplateRenderer;
use crate::templates::structure::{Layer, LAYERS, SLICE_INDEX_TS};
use crate::writer::{absolute_path, create_dir_all, write_all, GeneratedFile};

fn create_layer(root: &Path, layer: &Layer) -> Result<()> {
    let layer_path = root.join(layer.name);
    create_dir_all(&layer_path)?;

    for segment in layer.segments {
        create_dir_all(layer_path.join(segment))?;
    }

    let files: Vec<GeneratedFile> = layer
        .files
        .iter()
        .map(|(path, content)| GeneratedFile::new(*path, *content))
        .collect();
    write_all(&layer_path, &files)?;
    Ok(())
}

/// Renders the files of one feature slice, relative to the slice directory.
pub fn render_slice(renderer: &dyn TemplateRenderer, slice_name: &str) -> Result<Vec<GeneratedFile>> {
    let mut files: Vec<GeneratedFile> = SLICE_SEGMENTS
        .iter()
        .map(|segment| GeneratedFile::new(Path::new(segment).join(GITKEEP), ""))
        .collect();

    let context = serde_json::json!({ "slice": slice_name });
    files.push(GeneratedFile::new("index.ts", renderer.render(SLICE_INDEX_TS, &context)?));
    Ok(files)
}

fn create_slice(renderer: &dyn TemplateRenderer, features_path: &Path, slice_name: &str) -> Result<()> {
    let slice_path = features_path.join(slice_name);
    debug!("Creating slice {} in {}", slice_name, slice_path.display());

    let files = render_slice(renderer, slice_name)?;
    write_all(&slice_path, &files)?;
    Ok(())
}

/// Creates the layered tree under `project_root` plus one subtree per slice.
///
/// # Arguments
/// * `renderer` - Renderer for the slice index
/// * `project_root` - Directory receiving the layers, usually `./src`
/// * `slices` - Feature slices to create under `features/`
///
/// # Errors
/// * `Error::IoError` if a directory or file cannot be written
pub fn create_structure<P: AsRef<Path>>(
    renderer: &dyn TemplateRenderer,
    project_root: P,
    slices: &[String],
) -> Result<Report> {
    let root = project_root.as_ref();
    let mut created = Vec::with_capacity(LAYERS.len() + slices.len());

    for layer in &LAYERS {
        create_layer(root, layer)?;
        created.push(PathBuf::from(format!("{}/", layer.name)));
    }

    let features_path = root.join("features");
    for slice_name in slices {
        create_slice(renderer, &features_path, slice_name)?;
        created.push(PathBuf::from(format!("features/{slice_name}/")));
    }

    let location = absolute_path(root);
    Ok(Report {
        heading: format!("Creating FSD structure in: {}", location.display()),
        location,
        created,
        warnings: Vec::new(),
        summary: "FSD structure created successfully!".to_string(),
        notes: vec![
            "Next steps:".to_string(),
            "  1. Install dependencies: npm install axios @tanstack/react-query zustand".to_string(),
            "  2. Install dev dependencies: npm install -D @emotion/react @emotion/styled".to_string(),
            "  3. Create components using: fsdgen component <PATH> <NAME>".to_string(),
        ],
    })
}
