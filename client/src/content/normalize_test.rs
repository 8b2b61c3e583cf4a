use super::*;
use serde_json::json;

fn normalized(value: serde_json::Value) -> ContentNode {
    normalize(&ContentValue::from_json(&value))
}

#[test]
fn text_renders_as_text() {
    assert_eq!(normalized(json!("buffed Q")), ContentNode::Text("buffed Q".to_owned()));
}

#[test]
fn list_renders_as_list() {
    assert_eq!(
        normalized(json!(["a", 2])),
        ContentNode::List(vec!["a".to_owned(), "2".to_owned()])
    );
}

#[test]
fn record_renders_content_then_note_then_rest() {
    let node = normalized(json!({"content": "X", "note": "n", "extra": 1}));
    assert_eq!(
        node,
        ContentNode::Stack(vec![
            ContentNode::Text("X".to_owned()),
            ContentNode::Note("n".to_owned()),
            ContentNode::KeyValues("{\n  \"extra\": 1\n}".to_owned()),
        ])
    );
}

#[test]
fn record_without_reserved_keys_renders_only_key_values() {
    let node = normalized(json!({"extra": 1}));
    assert_eq!(node, ContentNode::Stack(vec![ContentNode::KeyValues("{\n  \"extra\": 1\n}".to_owned())]));
}

#[test]
fn key_value_block_is_omitted_when_nothing_remains() {
    let node = normalized(json!({"content": ["Q", "W"], "note": "mid patch"}));
    assert_eq!(
        node,
        ContentNode::Stack(vec![
            ContentNode::List(vec!["Q".to_owned(), "W".to_owned()]),
            ContentNode::Note("mid patch".to_owned()),
        ])
    );
}

#[test]
fn empty_record_renders_empty_stack() {
    assert_eq!(normalized(json!({})), ContentNode::Stack(Vec::new()));
}

#[test]
fn nested_records_recurse_through_content() {
    let node = normalized(json!({"content": {"content": "deep", "note": "inner"}, "note": "outer"}));
    assert_eq!(
        node,
        ContentNode::Stack(vec![
            ContentNode::Stack(vec![
                ContentNode::Text("deep".to_owned()),
                ContentNode::Note("inner".to_owned()),
            ]),
            ContentNode::Note("outer".to_owned()),
        ])
    );
}

#[test]
fn key_value_block_keeps_insertion_order() {
    let node = normalized(json!({"b": 1, "a": 2}));
    assert_eq!(
        node,
        ContentNode::Stack(vec![ContentNode::KeyValues("{\n  \"b\": 1,\n  \"a\": 2\n}".to_owned())])
    );
}
