//! Save document codec
//!
//! Two layers:
//! - transport: document <-> compact JSON text
//! - storage: JSON text <-> standard base64 (padded), safe for string-only stores
//!
//! All functions are stateless.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::CodecError;

/// Application state as stored: a JSON mapping with string keys
pub type SaveDocument = Map<String, Value>;

/// Serialize a document to compact JSON.
pub fn encode_transport(doc: &SaveDocument) -> Result<String, CodecError> {
    serde_json::to_string(doc).map_err(|e| CodecError::Encoding(e.to_string()))
}

/// Parse JSON text back into a document. Anything other than a single
/// top-level mapping is malformed.
pub fn decode_transport(text: &str) -> Result<SaveDocument, CodecError> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(doc)) => Ok(doc),
        Ok(other) => Err(CodecError::MalformedTransport(format!(
            "expected a mapping at top level, found {}",
            kind_of(&other)
        ))),
        Err(e) => Err(CodecError::MalformedTransport(e.to_string())),
    }
}

/// Base64-encode the UTF-8 bytes of transport text.
pub fn encode_storage(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Strict inverse of [`encode_storage`].
///
/// An empty (or whitespace-only) blob decodes to an empty string without
/// touching the decoder.
pub fn try_decode_storage(blob: &str) -> Result<String, CodecError> {
    let blob = blob.trim();
    if blob.is_empty() {
        return Ok(String::new());
    }
    let bytes = STANDARD
        .decode(blob)
        .map_err(|e| CodecError::MalformedStorage(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CodecError::MalformedStorage(e.to_string()))
}

/// Lenient inverse of [`encode_storage`]: malformed input yields an empty
/// string, which downstream means "no data".
pub fn decode_storage(blob: &str) -> String {
    match try_decode_storage(blob) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Discarding unreadable save blob: {}", e);
            String::new()
        }
    }
}

/// Convert a typed value into a document. The value must serialize to a
/// JSON mapping.
pub fn encode_value<T: Serialize + ?Sized>(value: &T) -> Result<SaveDocument, CodecError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(doc)) => Ok(doc),
        Ok(other) => Err(CodecError::Encoding(format!(
            "expected a mapping at top level, found {}",
            kind_of(&other)
        ))),
        Err(e) => Err(CodecError::Encoding(e.to_string())),
    }
}

/// Convert a document into a typed value.
pub fn decode_value<T: DeserializeOwned>(doc: SaveDocument) -> Result<T, CodecError> {
    serde_json::from_value(Value::Object(doc))
        .map_err(|e| CodecError::MalformedTransport(e.to_string()))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{arb_document, doc};
    use proptest::prelude::*;
    use serde_json::json;
    use std::collections::HashMap;

    proptest! {
        #[test]
        fn prop_transport_round_trip(d in arb_document()) {
            let text = encode_transport(&d).unwrap();
            prop_assert_eq!(decode_transport(&text).unwrap(), d);
        }

        #[test]
        fn prop_storage_round_trip(t in ".*") {
            let blob = encode_storage(&t);
            prop_assert_eq!(try_decode_storage(&blob).unwrap(), t);
        }

        #[test]
        fn prop_blob_uses_base64_alphabet(t in ".*") {
            let blob = encode_storage(&t);
            prop_assert!(
                blob.bytes()
                    .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'='))
            );
        }
    }

    #[test]
    fn test_transport_is_compact_json() {
        let d = doc(json!({"score": 10, "items": ["item_a"]}));
        let text = encode_transport(&d).unwrap();
        assert!(!text.contains('\n'));
        assert!(!text.contains(": "));
    }

    #[test]
    fn test_key_order_not_significant() {
        let a = decode_transport(r#"{"x":80,"y":60}"#).unwrap();
        let b = decode_transport(r#"{"y":60,"x":80}"#).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_decode_transport_rejects_bad_syntax() {
        let err = decode_transport("{\"score\": ").unwrap_err();
        assert!(matches!(err, CodecError::MalformedTransport(_)));
        assert!(decode_transport("").is_err());
        assert!(decode_transport(r#"{"a":1} trailing"#).is_err());
    }

    #[test]
    fn test_decode_transport_rejects_non_mapping() {
        let err = decode_transport("[1, 2, 3]").unwrap_err();
        assert!(err.to_string().contains("an array"));
        assert!(decode_transport("42").is_err());
        assert!(decode_transport("null").is_err());
    }

    #[test]
    fn test_known_storage_encoding() {
        assert_eq!(encode_storage(r#"{"a":1}"#), "eyJhIjoxfQ==");
        assert_eq!(decode_storage("eyJhIjoxfQ=="), r#"{"a":1}"#);
    }

    #[test]
    fn test_non_ascii_storage_round_trip() {
        let text = r#"{"名前":"プレイヤー","emoji":"🎮"}"#;
        assert_eq!(decode_storage(&encode_storage(text)), text);
    }

    #[test]
    fn test_empty_blob_is_no_data() {
        assert_eq!(decode_storage(""), "");
        assert_eq!(try_decode_storage("").unwrap(), "");
        assert_eq!(try_decode_storage("  \n").unwrap(), "");
    }

    #[test]
    fn test_trailing_newline_tolerated() {
        assert_eq!(decode_storage("eyJhIjoxfQ==\n"), r#"{"a":1}"#);
    }

    #[test]
    fn test_truncated_blob_is_empty() {
        // "eyJhIjoxfQ==" with the padding cut off mid-quantum
        assert_eq!(decode_storage("eyJhIjoxf"), "");
        assert!(matches!(
            try_decode_storage("eyJhIjoxf"),
            Err(CodecError::MalformedStorage(_))
        ));
    }

    #[test]
    fn test_wrong_alphabet_is_empty() {
        assert_eq!(decode_storage("not*base64!"), "");
        // URL-safe alphabet is not accepted
        assert!(try_decode_storage("-_-_").is_err());
    }

    #[test]
    fn test_invalid_utf8_after_decode() {
        let blob = STANDARD.encode([0xff, 0xfe, 0xfd]);
        assert!(matches!(
            try_decode_storage(&blob),
            Err(CodecError::MalformedStorage(_))
        ));
        assert_eq!(decode_storage(&blob), "");
    }

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Progress {
        level: u32,
        name: String,
    }

    #[test]
    fn test_typed_value_round_trip() {
        let progress = Progress {
            level: 3,
            name: "cave".into(),
        };
        let d = encode_value(&progress).unwrap();
        assert_eq!(d["level"], json!(3));
        assert_eq!(decode_value::<Progress>(d).unwrap(), progress);
    }

    #[test]
    fn test_encode_value_rejects_non_mapping() {
        let err = encode_value(&42u32).unwrap_err();
        assert!(matches!(err, CodecError::Encoding(_)));
        assert!(!err.is_malformed());
    }

    #[test]
    fn test_encode_value_rejects_non_string_keys() {
        let mut m = HashMap::new();
        m.insert(vec![1u8, 2], 3u8);
        assert!(matches!(encode_value(&m), Err(CodecError::Encoding(_))));
    }

    #[test]
    fn test_decode_value_shape_mismatch() {
        let d = doc(json!({"level": "three"}));
        assert!(matches!(
            decode_value::<Progress>(d),
            Err(CodecError::MalformedTransport(_))
        ));
    }
}
