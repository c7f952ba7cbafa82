use super::*;

fn make_output(use_colors: bool) -> ErrorOutput {
    ErrorOutput::with_colors(use_colors)
}

#[test]
fn error_without_colors_basic() {
    let out = make_output(false);
    let mut buf = Vec::new();
    out.write_error(&mut buf, "Error accessing path: a.js not found", None);
    let result = String::from_utf8(buf).unwrap();
    assert_eq!(result, "✖ Error accessing path: a.js not found\n");
}

#[test]
fn error_without_colors_with_detail() {
    let out = make_output(false);
    let mut buf = Vec::new();
    out.write_error(
        &mut buf,
        "Invalid ignore pattern: **/*[*",
        Some("unclosed character class"),
    );
    let result = String::from_utf8(buf).unwrap();
    assert!(result.contains("✖ Invalid ignore pattern: **/*[*\n"));
    assert!(result.contains("  × unclosed character class\n"));
}

#[test]
fn error_with_colors_has_escape_codes() {
    let out = make_output(true);
    let mut buf = Vec::new();
    out.write_error(&mut buf, "boom", Some("detail"));
    let result = String::from_utf8(buf).unwrap();
    assert!(result.contains(ansi::RED));
    assert!(result.contains(ansi::RESET));
    assert!(result.contains("boom"));
}

#[test]
fn never_mode_disables_colors() {
    let out = ErrorOutput::new(ColorMode::Never);
    let mut buf = Vec::new();
    out.write_error(&mut buf, "boom", None);
    assert_eq!(String::from_utf8(buf).unwrap(), "✖ boom\n");
}
