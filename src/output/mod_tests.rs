use std::path::PathBuf;

use super::*;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
}

#[test]
fn output_format_from_str_rejects_unknown() {
    let err = "sarif".parse::<OutputFormat>().unwrap_err();
    assert_eq!(err, "Unknown output format: sarif");
}

#[test]
fn output_format_default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn color_mode_explicit_choices_ignore_terminal() {
    assert!(ColorMode::Always.use_colors(false));
    assert!(!ColorMode::Never.use_colors(true));
}

#[test]
fn color_mode_auto_needs_terminal() {
    assert!(!ColorMode::Auto.use_colors(false));
}

#[test]
fn formatter_dispatches_by_format() {
    let files = vec![FileResult::new(PathBuf::from("a.rs"), 11)];

    let text = OutputFormat::Text
        .formatter(ColorMode::Never)
        .format(&files, 10)
        .unwrap();
    assert!(text.starts_with("Files exceeding 10 lines:"));

    let json = OutputFormat::Json
        .formatter(ColorMode::Never)
        .format(&files, 10)
        .unwrap();
    assert!(json.trim_start().starts_with('{'));
}
