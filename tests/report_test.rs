use std::path::PathBuf;

use fsdgen::generator::Report;

#[test]
fn test_report_lines() {
    let report = Report {
        heading: "Creating component: Button".to_string(),
        location: PathBuf::from("/project/src/shared/ui/Button"),
        created: vec![PathBuf::from("index.tsx"), PathBuf::from("types.ts")],
        warnings: vec!["ignored here".to_string()],
        summary: "Component Button created successfully!".to_string(),
        notes: vec!["Usage:".to_string()],
    };

    assert_eq!(
        report.lines(),
        [
            "Creating component: Button",
            "  Location: /project/src/shared/ui/Button",
            "  Created: index.tsx",
            "  Created: types.ts",
            "",
            "Component Button created successfully!",
            "",
            "Usage:",
        ]
    );
}

#[test]
fn test_report_without_notes() {
    let report = Report { summary: "done".to_string(), ..Default::default() };

    let lines = report.lines();
    assert_eq!(lines.last().map(String::as_str), Some("done"));
    assert_eq!(lines.len(), 4);
}
