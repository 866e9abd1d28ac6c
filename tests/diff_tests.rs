use jdiff::{compute_diff, parse_str, DiffKind, DiffOptions, PathSegment, Value, ValueKind};

fn parse(content: &str) -> Value {
    parse_str(content).unwrap()
}

#[test]
fn test_identical_values() {
    let options = DiffOptions::default();

    let value = parse(r#"{"a": 1, "b": [true, null, "x"]}"#);
    let summary = compute_diff(&value, &value, &options);
    assert!(summary.identical);
    assert_eq!(summary.total, 0);
    assert!(summary.is_empty());
}

#[test]
fn test_key_order_does_not_matter() {
    let options = DiffOptions::default();
    let left = parse(r#"{"a": 1, "b": 2}"#);
    let right = parse(r#"{"b": 2, "a": 1}"#);

    assert!(compute_diff(&left, &right, &options).identical);
}

#[test]
fn test_modified_field() {
    let options = DiffOptions::default();
    let left = parse(r#"{"a": 1, "b": 2}"#);
    let right = parse(r#"{"a": 1, "b": 3}"#);

    let summary = compute_diff(&left, &right, &options);
    assert!(!summary.identical);
    assert_eq!(summary.total, 1);

    let record = &summary.differences[0];
    assert_eq!(record.path, vec![PathSegment::key("b")]);
    assert_eq!(record.kind, DiffKind::Modified);
    assert_eq!(record.left, Some(Value::Number(2.0)));
    assert_eq!(record.right, Some(Value::Number(3.0)));
}

#[test]
fn test_added_field() {
    let options = DiffOptions::default();
    let left = parse(r#"{"a": 1}"#);
    let right = parse(r#"{"a": 1, "b": 2}"#);

    let summary = compute_diff(&left, &right, &options);
    assert_eq!(summary.total, 1);

    let record = &summary.differences[0];
    assert_eq!(record.path, vec![PathSegment::key("b")]);
    assert_eq!(record.kind, DiffKind::Added);
    assert_eq!(record.left, None);
    assert_eq!(record.right, Some(Value::Number(2.0)));
}

#[test]
fn test_array_truncation_is_removed() {
    let options = DiffOptions::default();
    let left = parse("[1, 2, 3]");
    let right = parse("[1, 2]");

    let summary = compute_diff(&left, &right, &options);
    assert_eq!(summary.total, 1);

    let record = &summary.differences[0];
    assert_eq!(record.path, vec![PathSegment::Index(2)]);
    assert_eq!(record.kind, DiffKind::Removed);
    assert_eq!(record.left, Some(Value::Number(3.0)));
    assert_eq!(record.right, None);
}

#[test]
fn test_root_type_mismatch() {
    let options = DiffOptions::default();
    let summary = compute_diff(&parse("5"), &parse("\"5\""), &options);

    assert_eq!(summary.total, 1);
    let record = &summary.differences[0];
    assert!(record.path.is_empty());
    assert_eq!(
        record.kind,
        DiffKind::TypeMismatch {
            left: ValueKind::Number,
            right: ValueKind::String,
        }
    );
    assert_eq!(summary.stats.type_mismatches, 1);
}

#[test]
fn test_array_vs_object_mismatch() {
    let options = DiffOptions::default();
    let summary = compute_diff(&parse("[]"), &parse("{}"), &options);

    assert_eq!(summary.total, 1);
    assert_eq!(
        summary.differences[0].kind,
        DiffKind::TypeMismatch {
            left: ValueKind::Array,
            right: ValueKind::Object,
        }
    );
}

#[test]
fn test_mismatch_stops_descent() {
    let options = DiffOptions::default();
    let left = parse(r#"{"data": {"deep": {"deeper": 1}}}"#);
    let right = parse(r#"{"data": [1, 2, 3]}"#);

    let summary = compute_diff(&left, &right, &options);
    assert_eq!(summary.total, 1);
    assert_eq!(summary.differences[0].path, vec![PathSegment::key("data")]);
}

#[test]
fn test_ignore_array_order_permutation() {
    let options = DiffOptions {
        ignore_array_order: true,
        ..Default::default()
    };
    let left = parse(r#"["c", "a", "b"]"#);
    let right = parse(r#"["a", "b", "c"]"#);

    assert!(compute_diff(&left, &right, &options).identical);
}

#[test]
fn test_ignore_array_order_with_objects() {
    let options = DiffOptions {
        ignore_array_order: true,
        ..Default::default()
    };
    let left = parse(r#"[{"id": 2}, {"id": 1}]"#);
    let right = parse(r#"[{"id": 1}, {"id": 2}]"#);

    assert!(compute_diff(&left, &right, &options).identical);
}

#[test]
fn test_order_sensitive_default() {
    let options = DiffOptions::default();
    let left = parse("[1, 2]");
    let right = parse("[2, 1]");

    let summary = compute_diff(&left, &right, &options);
    assert_eq!(summary.stats.modified, 2);
}

#[test]
fn test_ignore_case_strings() {
    let options = DiffOptions {
        ignore_string_case: true,
        ..Default::default()
    };
    let left = parse(r#"{"name": "ALICE"}"#);
    let right = parse(r#"{"name": "alice"}"#);

    assert!(compute_diff(&left, &right, &options).identical);
}

#[test]
fn test_case_sensitive_default() {
    let options = DiffOptions::default();
    let left = parse(r#"{"name": "ALICE"}"#);
    let right = parse(r#"{"name": "alice"}"#);

    assert_eq!(compute_diff(&left, &right, &options).total, 1);
}

#[test]
fn test_deep_nested_path() {
    let options = DiffOptions::default();
    let left = parse(r#"{"users": [{"profile": {"age": 30}}]}"#);
    let right = parse(r#"{"users": [{"profile": {"age": 31}}]}"#);

    let summary = compute_diff(&left, &right, &options);
    assert_eq!(summary.total, 1);
    assert_eq!(
        summary.differences[0].path,
        vec![
            PathSegment::key("users"),
            PathSegment::Index(0),
            PathSegment::key("profile"),
            PathSegment::key("age"),
        ]
    );
}

#[test]
fn test_traversal_order_is_stable() {
    let options = DiffOptions::default();
    let left = parse(r#"{"z": 1, "a": 2, "m": [1, 2]}"#);
    let right = parse(r#"{"a": 3, "q": 4, "m": [1]}"#);

    let first = compute_diff(&left, &right, &options);
    let second = compute_diff(&left, &right, &options);
    assert_eq!(first.differences, second.differences);

    // Left document keys come first in source order, then new right keys
    let paths: Vec<String> = first
        .differences
        .iter()
        .map(|d| jdiff::output::format_path(&d.path))
        .collect();
    assert_eq!(paths, vec!["z", "a", "m[1]", "q"]);
}

#[test]
fn test_swapped_sides_swap_kinds() {
    let options = DiffOptions::default();
    let left = parse(r#"{"a": 1}"#);
    let right = parse(r#"{"a": 1, "b": 2}"#);

    let forward = compute_diff(&left, &right, &options);
    let backward = compute_diff(&right, &left, &options);

    assert_eq!(forward.stats.added, 1);
    assert_eq!(backward.stats.removed, 1);
    assert_eq!(forward.total, backward.total);
}

#[test]
fn test_mixed_changes() {
    let options = DiffOptions::default();
    let left = parse(r#"{"keep": 1, "drop": 2, "change": 3, "retype": 4}"#);
    let right = parse(r#"{"keep": 1, "change": 30, "retype": "4", "fresh": 5}"#);

    let summary = compute_diff(&left, &right, &options);
    assert_eq!(summary.stats.removed, 1);
    assert_eq!(summary.stats.modified, 1);
    assert_eq!(summary.stats.type_mismatches, 1);
    assert_eq!(summary.stats.added, 1);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.stats.total_changes(), summary.total);
}
