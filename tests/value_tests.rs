use jdiff::{Value, ValueKind};

#[test]
fn test_kind_names() {
    assert_eq!(ValueKind::Null.name(), "null");
    assert_eq!(ValueKind::Bool.name(), "boolean");
    assert_eq!(ValueKind::Number.name(), "number");
    assert_eq!(ValueKind::String.name(), "string");
    assert_eq!(ValueKind::Array.name(), "array");
    assert_eq!(ValueKind::Object.name(), "object");
}

#[test]
fn test_classification_is_exhaustive() {
    let values = [
        Value::Null,
        Value::Bool(false),
        Value::Number(0.0),
        Value::String(String::new()),
        Value::Array(vec![]),
        Value::Object(vec![]),
    ];
    let kinds: Vec<ValueKind> = values.iter().map(Value::kind).collect();
    assert_eq!(
        kinds,
        vec![
            ValueKind::Null,
            ValueKind::Bool,
            ValueKind::Number,
            ValueKind::String,
            ValueKind::Array,
            ValueKind::Object,
        ]
    );
}

#[test]
fn test_semantic_equals_objects_ignore_order() {
    let a = Value::Object(vec![
        ("one".to_string(), Value::Number(1.0)),
        ("two".to_string(), Value::Number(2.0)),
    ]);
    let b = Value::Object(vec![
        ("two".to_string(), Value::Number(2.0)),
        ("one".to_string(), Value::Number(1.0)),
    ]);
    assert!(a.semantic_equals(&b));
    assert_eq!(a, b);
}

#[test]
fn test_semantic_equals_objects_key_set_significant() {
    let a = Value::Object(vec![("one".to_string(), Value::Number(1.0))]);
    let b = Value::Object(vec![
        ("one".to_string(), Value::Number(1.0)),
        ("two".to_string(), Value::Number(2.0)),
    ]);
    assert!(!a.semantic_equals(&b));
    assert_ne!(a, b);
}

#[test]
fn test_semantic_equals_arrays_are_ordered() {
    let a = Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]);
    let b = Value::Array(vec![Value::Number(2.0), Value::Number(1.0)]);
    assert!(!a.semantic_equals(&b));
}

#[test]
fn test_float_epsilon_equality() {
    assert!(Value::Number(0.1 + 0.2).semantic_equals(&Value::Number(0.3)));
    assert!(!Value::Number(0.3).semantic_equals(&Value::Number(0.31)));
}

#[test]
fn test_canonical_string_is_stable_under_key_order() {
    let a = Value::Object(vec![
        ("z".to_string(), Value::Array(vec![Value::Bool(true)])),
        ("a".to_string(), Value::Null),
    ]);
    let b = Value::Object(vec![
        ("a".to_string(), Value::Null),
        ("z".to_string(), Value::Array(vec![Value::Bool(true)])),
    ]);
    assert_eq!(a.canonical_string(), b.canonical_string());
    assert_eq!(a.canonical_string(), "{\"a\":null,\"z\":[true]}");
}

#[test]
fn test_canonical_string_escapes_strings() {
    let value = Value::String("say \"hi\"".to_string());
    assert_eq!(value.canonical_string(), "\"say \\\"hi\\\"\"");
}

#[test]
fn test_preview_for_each_kind() {
    assert_eq!(Value::Null.preview(80), "null");
    assert_eq!(Value::Bool(true).preview(80), "true");
    assert_eq!(Value::Number(7.0).preview(80), "7");
    assert_eq!(Value::String("s".to_string()).preview(80), "\"s\"");
    assert_eq!(Value::Array(vec![Value::Null]).preview(80), "[ 1 item ]");
    assert_eq!(
        Value::Object(vec![
            ("a".to_string(), Value::Null),
            ("b".to_string(), Value::Null),
        ])
        .preview(80),
        "{ 2 keys }"
    );
}

#[test]
fn test_get_only_works_on_objects() {
    assert_eq!(Value::Array(vec![Value::Null]).get("0"), None);
    assert_eq!(Value::Null.get("x"), None);
}
