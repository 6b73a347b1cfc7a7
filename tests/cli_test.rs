use clap::Parser;
use fsdgen::cli::{Args, Command};
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("fsdgen")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_component_args() {
    let args = make_args(&["component", "./src/shared/ui", "Button"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(!parsed.verbose);
    assert!(parsed.config.is_none());
    match parsed.command {
        Command::Component { path, name } => {
            assert_eq!(path, PathBuf::from("./src/shared/ui"));
            assert_eq!(name, "Button");
        }
        other => panic!("Expected component command, got {other:?}"),
    }
}

#[test]
fn test_structure_without_slices() {
    let args = make_args(&["structure", "./src"]);
    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Command::Structure { project_root, slices } => {
            assert_eq!(project_root, PathBuf::from("./src"));
            assert!(slices.is_none());
        }
        other => panic!("Expected structure command, got {other:?}"),
    }
}

#[test]
fn test_structure_with_slices() {
    let args = make_args(&["structure", "./src", "--slices", "cart", "auth", "user"]);
    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Command::Structure { slices, .. } => {
            assert_eq!(slices, Some(vec!["cart".into(), "auth".into(), "user".into()]));
        }
        other => panic!("Expected structure command, got {other:?}"),
    }
}

#[test]
fn test_structure_with_empty_slices_flag() {
    let args = make_args(&["structure", "./src", "--slices"]);
    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Command::Structure { slices, .. } => assert_eq!(slices, Some(vec![])),
        other => panic!("Expected structure command, got {other:?}"),
    }
}

#[test]
fn test_global_flags() {
    let args = make_args(&["service", "-v", "--config", "fsdgen.yml", "./src/features/auth", "auth"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    assert_eq!(parsed.config, Some(PathBuf::from("fsdgen.yml")));
    match parsed.command {
        Command::Service { feature_path, name } => {
            assert_eq!(feature_path, PathBuf::from("./src/features/auth"));
            assert_eq!(name, "auth");
        }
        other => panic!("Expected service command, got {other:?}"),
    }
}

#[test]
fn test_short_flags_before_subcommand() {
    let args = make_args(&["-v", "store", "./src/features/cart", "cart"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    assert!(matches!(parsed.command, Command::Store { .. }));
}

#[test]
fn test_missing_args() {
    assert!(Args::try_parse_from(make_args(&["component", "./src"])).is_err());
    assert!(Args::try_parse_from(make_args(&[])).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["store", "./src/features/cart", "cart", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
