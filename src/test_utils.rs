//! Shared test helpers: document literals and proptest strategies

use proptest::prelude::*;
use serde_json::Value;

use crate::persistence::SaveDocument;

/// Unwrap a `json!` object literal into a document.
pub fn doc(value: Value) -> SaveDocument {
    match value {
        Value::Object(map) => map,
        _ => panic!("test document must be an object"),
    }
}

/// Any JSON value: scalars at the leaves, arrays and mappings up to depth 4
pub fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        (-1.0e9f64..1.0e9).prop_map(Value::from),
        ".*".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map(".*", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Any top-level save document
pub fn arb_document() -> impl Strategy<Value = SaveDocument> {
    prop::collection::btree_map(".*", arb_value(), 0..8).prop_map(|m| m.into_iter().collect())
}
