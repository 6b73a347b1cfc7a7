use fsdgen::error::Error;
use fsdgen::renderer::{PlaceholderRenderer, TemplateRenderer};

#[test]
fn test_placeholder_substitution() {
    let renderer = PlaceholderRenderer::new();
    let context = serde_json::json!({
        "name": "test",
        "value": 42
    });

    let result = renderer.render("Hello {{name}}!", &context).unwrap();
    assert_eq!(result, "Hello test!");

    let result = renderer.render("Value: {{ value }}", &context).unwrap();
    assert_eq!(result, "Value: 42");
}

#[test]
fn test_single_braces_are_left_alone() {
    let renderer = PlaceholderRenderer::new();
    let context = serde_json::json!({ "name": "Card" });

    let result = renderer
        .render("export const {{name}} = ({ children }) => `${children}`;", &context)
        .unwrap();
    assert_eq!(result, "export const Card = ({ children }) => `${children}`;");
}

#[test]
fn test_adjacent_placeholders() {
    let renderer = PlaceholderRenderer::new();
    let context = serde_json::json!({ "a": "use", "b": "Cart" });

    assert_eq!(renderer.render("{{a}}{{b}}Store", &context).unwrap(), "useCartStore");
}

#[test]
fn test_unknown_placeholder_is_an_error() {
    let renderer = PlaceholderRenderer::new();
    let context = serde_json::json!({ "name": "Card" });

    match renderer.render("{{missing}}", &context) {
        Err(Error::TemplateError(msg)) => assert!(msg.contains("missing")),
        other => panic!("Expected TemplateError, got {other:?}"),
    }
}
