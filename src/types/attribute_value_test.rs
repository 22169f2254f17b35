//! Tests for tagged attribute values.

use super::attribute_value::{AttributeValue, ColumnType};

#[test]
fn read_scalar_passes_text_through() {
  let v = AttributeValue::read(Some("hello"), ColumnType::Scalar);
  assert_eq!(v, AttributeValue::Scalar("hello".to_string()));
}

#[test]
fn read_missing_cell_is_empty_scalar() {
  let v = AttributeValue::read(None, ColumnType::Scalar);
  assert_eq!(v.as_scalar(), Some(""));
}

#[test]
fn read_newline_array_keeps_empty_segments() {
  let v = AttributeValue::read(Some("a\n\nb"), ColumnType::NewlineArray);
  assert_eq!(
    v.as_items().unwrap(),
    &["a".to_string(), String::new(), "b".to_string()]
  );
}

#[test]
fn read_pipe_array_splits_on_pipe() {
  let v = AttributeValue::read(Some("red|green|blue"), ColumnType::PipeArray);
  assert_eq!(v.as_items().unwrap().len(), 3);
  assert_eq!(v.as_items().unwrap()[2], "blue");
}

#[test]
fn read_missing_cell_under_array_type_is_single_empty_item() {
  let v = AttributeValue::read(None, ColumnType::PipeArray);
  assert_eq!(v.as_items().unwrap(), &[String::new()]);
}

#[test]
fn infer_prefers_newline_over_pipe() {
  let v = AttributeValue::infer(Some("a|b\nc"));
  assert_eq!(v.as_items().unwrap(), &["a|b".to_string(), "c".to_string()]);
}

#[test]
fn infer_splits_on_pipe() {
  let v = AttributeValue::infer(Some("x|y"));
  assert_eq!(v.as_items().unwrap(), &["x".to_string(), "y".to_string()]);
}

#[test]
fn infer_plain_text_is_scalar() {
  let v = AttributeValue::infer(Some("plain"));
  assert!(!v.is_array());
  assert_eq!(v.as_scalar(), Some("plain"));
}

#[test]
fn infer_missing_cell_is_empty_scalar() {
  assert_eq!(AttributeValue::infer(None).as_scalar(), Some(""));
}

#[test]
fn explicit_array_is_already_tagged() {
  let v = AttributeValue::from(vec!["a".to_string(), "b".to_string()]);
  assert!(v.is_array());
  assert!(v.as_scalar().is_none());
}

#[test]
fn scalar_accessors_are_exclusive() {
  let v = AttributeValue::from("text");
  assert_eq!(v.as_scalar(), Some("text"));
  assert!(v.as_items().is_none());
}
