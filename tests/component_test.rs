use std::fs;
use std::path::Path;

use fsdgen::error::Error;
use fsdgen::generator::component::{create_component, render_component};
use fsdgen::renderer::PlaceholderRenderer;
use tempfile::TempDir;
use walkdir::WalkDir;

fn count_files(dir: &Path) -> usize {
    WalkDir::new(dir).into_iter().filter_map(|e| e.ok()).filter(|e| e.file_type().is_file()).count()
}

#[test_log::test]
fn test_create_component_matches_fixture() {
    let temp_dir = TempDir::new().unwrap();
    let renderer = PlaceholderRenderer::new();

    create_component(&renderer, temp_dir.path(), "Button").unwrap();

    let expected = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/component/Button");
    assert!(!dir_diff::is_different(temp_dir.path().join("Button"), expected).unwrap());
}

#[test_log::test]
fn test_create_component_writes_three_files() {
    let temp_dir = TempDir::new().unwrap();
    let renderer = PlaceholderRenderer::new();

    let report = create_component(&renderer, temp_dir.path(), "UserProfile").unwrap();

    let component_dir = temp_dir.path().join("UserProfile");
    assert_eq!(count_files(temp_dir.path()), 3);
    assert_eq!(report.created.len(), 3);

    let index = fs::read_to_string(component_dir.join("index.tsx")).unwrap();
    assert!(index.contains("import type { UserProfileProps } from './types';"));
    assert!(index.contains("export const UserProfile = ({ children, ...rest }: UserProfileProps) => {"));
    assert!(index.contains("export type { UserProfileProps } from './types';"));

    let types = fs::read_to_string(component_dir.join("types.ts")).unwrap();
    assert!(types.contains("export interface UserProfileProps extends HTMLAttributes<HTMLDivElement> {"));
    assert!(types.contains("children?: ReactNode;"));

    let styles = fs::read_to_string(component_dir.join("styles.ts")).unwrap();
    assert!(styles.contains("export const Container = styled.div`"));
}

#[test]
fn test_invalid_names_write_nothing() {
    let renderer = PlaceholderRenderer::new();

    for name in ["button", "123Foo", "My-Button", "My Button", ""] {
        let temp_dir = TempDir::new().unwrap();
        match create_component(&renderer, temp_dir.path(), name) {
            Err(Error::InvalidComponentName { given, .. }) => assert_eq!(given, name),
            other => panic!("Expected InvalidComponentName for '{name}', got {other:?}"),
        }
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }
}

#[test]
fn test_existing_component_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let renderer = PlaceholderRenderer::new();

    create_component(&renderer, temp_dir.path(), "Card").unwrap();
    let index_path = temp_dir.path().join("Card/index.tsx");
    fs::write(&index_path, "// edited by hand\n").unwrap();

    match create_component(&renderer, temp_dir.path(), "Card") {
        Err(Error::ComponentExists { path }) => assert!(path.ends_with("Card")),
        other => panic!("Expected ComponentExists, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(&index_path).unwrap(), "// edited by hand\n");
    assert_eq!(count_files(temp_dir.path()), 3);
}

#[test]
fn test_create_component_in_missing_base_dir() {
    let temp_dir = TempDir::new().unwrap();
    let renderer = PlaceholderRenderer::new();
    let base = temp_dir.path().join("src/shared/ui");

    let report = create_component(&renderer, &base, "Modal").unwrap();

    assert!(base.join("Modal/types.ts").is_file());
    assert!(report.location.ends_with("src/shared/ui/Modal"));
    assert_eq!(report.summary, "Component Modal created successfully!");
    assert!(report.notes.iter().any(|n| n.contains("import { Modal } from")));
}

#[test]
fn test_render_component_order() {
    let renderer = PlaceholderRenderer::new();
    let files = render_component(&renderer, "Tab").unwrap();

    let names: Vec<_> = files.iter().map(|f| f.path.display().to_string()).collect();
    assert_eq!(names, ["index.tsx", "types.ts", "styles.ts"]);
    assert!(files.iter().all(|f| !f.content.contains("{{")));
}
