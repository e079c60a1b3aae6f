use super::*;
use serde_json::json;

// =============================================================================
// render_json
// =============================================================================

#[test]
fn render_json_uses_four_space_indent() {
    let rendered = render_json(&json!({"authority": "tok123"})).expect("render");
    assert_eq!(rendered, "{\n    \"authority\": \"tok123\"\n}");
}

#[test]
fn render_json_indents_nested_levels() {
    let rendered = render_json(&json!({"user": {"name": "a"}})).expect("render");
    assert_eq!(
        rendered,
        "{\n    \"user\": {\n        \"name\": \"a\"\n    }\n}"
    );
}

#[test]
fn render_json_round_trips() {
    let value = json!({"tasks": [{"title": "one"}, {"title": "two"}], "count": 2});
    let rendered = render_json(&value).expect("render");
    let parsed: serde_json::Value = serde_json::from_str(&rendered).expect("parse back");
    assert_eq!(parsed, value);
}

#[test]
fn render_json_handles_scalars() {
    assert_eq!(render_json(&json!(null)).expect("render"), "null");
    assert_eq!(render_json(&json!("ok")).expect("render"), "\"ok\"");
}

// =============================================================================
// DisplayBuffer
// =============================================================================

#[test]
fn buffer_starts_empty() {
    let buffer = DisplayBuffer::new();
    assert_eq!(buffer.contents(), "");
}

#[test]
fn buffer_show_overwrites_wholesale() {
    let mut buffer = DisplayBuffer::new();
    buffer.show(&json!({"first": 1})).expect("show");
    buffer.show(&json!({"second": 2})).expect("show");

    assert_eq!(buffer.contents(), "{\n    \"second\": 2\n}");
    assert!(!buffer.contents().contains("first"));
}
