/// Typed, path-addressed extraction.
///
/// Missing vs. explicit null, optional forms that forgive absence but not
/// malformed data, containers at a path, the matrix reader, and the
/// transform-based overloads.
use node_core::{path, Node, NodeError, PathIndex};
use serde_json::{json, Value};
use std::collections::{BTreeMap, BTreeSet, HashMap};

fn node(value: Value) -> Node {
    Node::from(value)
}

fn order() -> Node {
    node(json!({
        "id": 42,
        "customer": {"name": "Dana", "vip": true, "nickname": null},
        "lines": [
            {"sku": "A-1", "qty": 2, "price": 9.5},
            {"sku": "B-7", "qty": 1, "price": 20.0, "note": "gift"}
        ],
        "grid": [[1, 2], [3, 4]],
        "row": [5, 6, 7],
        "tags": ["rush", "fragile", "rush"],
        "totals": {"net": 39, "tax": 4},
        "groups": {"a": [1, 2], "b": []}
    }))
}

// ============================================================================
// Plain extraction
// ============================================================================

#[test]
fn scalar_at_path() {
    let doc = order();
    let id: u64 = doc.extract(&path!["id"]).unwrap();
    let name: String = doc.extract(&path!["customer", "name"]).unwrap();
    let vip: bool = doc.extract(&path!["customer", "vip"]).unwrap();
    let qty: u32 = doc.extract(&path!["lines", 1, "qty"]).unwrap();
    assert_eq!((id, name.as_str(), vip, qty), (42, "Dana", true, 1));
}

#[test]
fn empty_path_addresses_receiver() {
    let n = Node::from(3);
    let v: i32 = n.extract(&path![]).unwrap();
    assert_eq!(v, 3);
}

#[test]
fn missing_path_into_non_nullable_fails() {
    let err = node(json!({})).extract::<i32>(&path!["missing"]).unwrap_err();
    match err {
        NodeError::UnableToConvert {
            node,
            expected,
            path,
        } => {
            assert_eq!(*node, Node::Null);
            assert_eq!(expected, "i32");
            assert_eq!(path, path!["missing"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_and_null_are_treated_alike() {
    let doc = order();
    let missing: Option<String> = doc.extract(&path!["customer", "email"]).unwrap();
    let null: Option<String> = doc.extract(&path!["customer", "nickname"]).unwrap();
    assert_eq!(missing, None);
    assert_eq!(null, None);
    assert!(doc.extract::<String>(&path!["customer", "email"]).is_err());
    assert!(doc.extract::<String>(&path!["customer", "nickname"]).is_err());
}

#[test]
fn extract_into_node() {
    let doc = order();
    let customer: Node = doc.extract(&path!["customer"]).unwrap();
    assert_eq!(customer.extract::<String>(&path!["name"]).unwrap(), "Dana");
    let absent: Node = doc.extract(&path!["nothing"]).unwrap();
    assert!(absent.is_null());
}

#[test]
fn error_path_includes_element_location() {
    let doc = node(json!({"items": [1, 2, "x"]}));
    let err = doc.extract::<Vec<i32>>(&path!["items"]).unwrap_err();
    assert_eq!(err.path().unwrap(), &path!["items", 2]);
    assert!(err.to_string().contains("items[2]"), "{err}");
}

#[test]
fn error_message_names_kind_and_type() {
    let err = order().extract::<bool>(&path!["id"]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("number"), "{msg}");
    assert!(msg.contains("bool"), "{msg}");
    assert!(msg.contains("id"), "{msg}");
}

// ============================================================================
// Optional extraction
// ============================================================================

#[test]
fn optional_missing_is_none() {
    let v: Option<i32> = node(json!({})).extract_opt(&path!["missing"]).unwrap();
    assert_eq!(v, None);
}

#[test]
fn optional_present_converts() {
    let v: Option<f64> = order().extract_opt(&path!["lines", 0, "price"]).unwrap();
    assert_eq!(v, Some(9.5));
}

#[test]
fn optional_malformed_still_errors() {
    assert!(order()
        .extract_opt::<i32>(&path!["customer", "name"])
        .is_err());
}

#[test]
fn optional_explicit_null_into_non_nullable_errors() {
    // The node exists (it is null), so this is a conversion, not an absence.
    assert!(order()
        .extract_opt::<String>(&path!["customer", "nickname"])
        .is_err());
}

#[test]
fn optional_containers() {
    let doc = order();
    let tags: Option<Vec<String>> = doc.extract_opt(&path!["tags"]).unwrap();
    assert_eq!(tags.unwrap().len(), 3);
    let none: Option<Vec<String>> = doc.extract_opt(&path!["labels"]).unwrap();
    assert!(none.is_none());
    let totals: Option<HashMap<String, i64>> = doc.extract_opt(&path!["totals"]).unwrap();
    assert_eq!(totals.unwrap()["tax"], 4);
}

// ============================================================================
// Containers at a path
// ============================================================================

#[test]
fn fan_out_column_into_vec() {
    let skus: Vec<String> = order().extract(&path!["lines", "sku"]).unwrap();
    assert_eq!(skus, ["A-1", "B-7"]);
}

#[test]
fn fan_out_drops_elements_missing_the_field() {
    let notes: Vec<String> = order().extract(&path!["lines", "note"]).unwrap();
    assert_eq!(notes, ["gift"]);
}

#[test]
fn missing_sequence_fails() {
    assert!(order().extract::<Vec<i32>>(&path!["missing"]).is_err());
}

#[test]
fn scalar_is_not_a_sequence() {
    assert!(order().extract::<Vec<u64>>(&path!["id"]).is_err());
}

#[test]
fn set_at_path() {
    let tags: BTreeSet<String> = order().extract(&path!["tags"]).unwrap();
    assert_eq!(tags.len(), 2);
    assert!(tags.contains("rush"));
}

#[test]
fn map_at_path() {
    let totals: BTreeMap<String, u32> = order().extract(&path!["totals"]).unwrap();
    assert_eq!(totals.values().sum::<u32>(), 43);
}

#[test]
fn map_of_arrays_at_path() {
    let groups: HashMap<String, Vec<i32>> = order().extract(&path!["groups"]).unwrap();
    assert_eq!(groups["a"], vec![1, 2]);
    assert!(groups["b"].is_empty());
}

#[test]
fn missing_map_fails() {
    assert!(order()
        .extract::<HashMap<String, i32>>(&path!["nope"])
        .is_err());
}

// ============================================================================
// Matrix
// ============================================================================

#[test]
fn matrix_nested() {
    let m: Vec<Vec<i32>> = order().extract_matrix(&path!["grid"]).unwrap();
    assert_eq!(m, vec![vec![1, 2], vec![3, 4]]);
}

#[test]
fn matrix_flat_row_is_wrapped() {
    let m: Vec<Vec<i32>> = order().extract_matrix(&path!["row"]).unwrap();
    assert_eq!(m, vec![vec![5, 6, 7]]);
}

#[test]
fn matrix_missing_fails_but_optional_is_none() {
    let doc = order();
    let err = doc.extract_matrix::<i32>(&path!["nope"]).unwrap_err();
    assert_eq!(err.path().unwrap(), &path!["nope"]);
    let none = doc.extract_matrix_opt::<i32>(&path!["nope"]).unwrap();
    assert!(none.is_none());
    let some = doc.extract_matrix_opt::<i32>(&path!["row"]).unwrap();
    assert_eq!(some, Some(vec![vec![5, 6, 7]]));
}

#[test]
fn matrix_cell_error_carries_full_path() {
    let doc = node(json!({"m": [[1], [true]]}));
    let err = doc.extract_matrix::<i32>(&path!["m"]).unwrap_err();
    assert_eq!(
        err.path().unwrap().to_vec(),
        vec![
            PathIndex::from("m"),
            PathIndex::Position(1),
            PathIndex::Position(0)
        ]
    );
}

// ============================================================================
// Transforms
// ============================================================================

#[derive(Debug, PartialEq)]
enum AppError {
    Node(NodeError),
    Invalid(String),
}

impl From<NodeError> for AppError {
    fn from(e: NodeError) -> Self {
        AppError::Node(e)
    }
}

fn parse_sku(sku: String) -> Result<(char, u32), AppError> {
    let (prefix, number) = sku
        .split_once('-')
        .ok_or_else(|| AppError::Invalid(sku.clone()))?;
    let prefix = prefix
        .chars()
        .next()
        .ok_or_else(|| AppError::Invalid(sku.clone()))?;
    let number = number
        .parse()
        .map_err(|_| AppError::Invalid(sku.clone()))?;
    Ok((prefix, number))
}

#[test]
fn transform_applies_to_extracted_value() {
    let sku = order()
        .extract_with(&path!["lines", 1, "sku"], parse_sku)
        .unwrap();
    assert_eq!(sku, ('B', 7));
}

#[test]
fn transform_error_propagates_unchanged() {
    let doc = node(json!({"sku": "bogus"}));
    let err = doc.extract_with(&path!["sku"], parse_sku).unwrap_err();
    assert_eq!(err, AppError::Invalid("bogus".into()));
}

#[test]
fn transform_missing_input_is_conversion_error() {
    let err = order()
        .extract_with(&path!["nope"], parse_sku)
        .unwrap_err();
    assert!(matches!(err, AppError::Node(NodeError::UnableToConvert { .. })));
}

#[test]
fn transform_on_optional_sees_none_for_missing() {
    let doc = order();
    let label = doc
        .extract_opt_with(&path!["customer", "email"], |email: Option<String>| {
            Ok::<_, NodeError>(email.unwrap_or_else(|| "no email".to_string()))
        })
        .unwrap();
    assert_eq!(label, "no email");

    let name = doc
        .extract_opt_with(&path!["customer", "name"], |name: Option<String>| {
            Ok::<_, NodeError>(name.map(|n| n.to_uppercase()))
        })
        .unwrap();
    assert_eq!(name.as_deref(), Some("DANA"));
}

#[test]
fn transform_on_optional_still_rejects_malformed() {
    let err = order()
        .extract_opt_with(&path!["id"], |id: Option<String>| Ok::<_, NodeError>(id))
        .unwrap_err();
    assert_eq!(err.path().unwrap(), &path!["id"]);
}
