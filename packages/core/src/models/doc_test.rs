//! Tests for the generic document
//!
//! Covers forgiving reads, normalization on write, the append precondition
//! and the byte codec.

#[cfg(test)]
mod tests {
    use crate::models::{decode, encode, Color, Doc, DocumentError, SelectOption, Value};
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Doc {
        Doc::from_value(value).unwrap()
    }

    // ========================================================================
    // Zero-value Reads
    // ========================================================================

    #[test]
    fn test_missing_keys_read_as_zero_values() {
        let empty = Doc::new();
        assert_eq!(empty.get_string("missing"), "");
        assert_eq!(empty.get_int("missing"), 0);
        assert!(!empty.get_bool("missing"));
        assert_eq!(empty.get_float("missing"), 0.0);
        assert!(empty.get("missing").is_none());
    }

    #[test]
    fn test_malformed_numeric_string_defaults_to_zero() {
        let d = doc(json!({"n": "abc", "m": "42", "f": "2.5"}));
        assert_eq!(d.get_int("n"), 0);
        assert_eq!(d.get_int("m"), 42);
        assert_eq!(d.get_float("f"), 2.5);
    }

    #[test]
    fn test_type_mismatch_reads_as_zero_value() {
        let d = doc(json!({"list": [1, 2], "obj": {"a": 1}, "null": null}));
        assert_eq!(d.get_string("list"), "");
        assert_eq!(d.get_string("obj"), "");
        assert_eq!(d.get_string("null"), "");
        assert_eq!(d.get_int("obj"), 0);
        assert!(d.get("null").is_some());
    }

    #[test]
    fn test_scalar_reads_convert() {
        let d = doc(json!({"i": 7, "f": 7.0, "b": "true", "s": 12, "flag": true}));
        assert_eq!(d.get_int("i"), 7);
        assert_eq!(d.get_int("f"), 7);
        assert!(d.get_bool("b"));
        assert!(d.get_bool("flag"));
        assert_eq!(d.get_string("s"), "12");
    }

    // ========================================================================
    // Nested Access
    // ========================================================================

    #[test]
    fn test_get_doc_and_doc_list() {
        let d = doc(json!({
            "parent": {"type": "page_id", "page_id": "p1"},
            "items": [{"a": 1}, "stray", {"b": 2}]
        }));

        assert_eq!(d.get_doc("parent").unwrap().get_string("page_id"), "p1");
        assert!(d.get_doc("items").is_none());

        let items = d.get_doc_list("items").unwrap();
        assert_eq!(items.len(), 3);
        assert!(items[1].is_empty());
        assert_eq!(items[2].get_int("b"), 2);

        assert!(d.get_doc_list("parent").is_none());
        assert!(d.get_doc_list("missing").is_none());
    }

    #[test]
    fn test_get_doc_mut_writes_through() {
        let mut d = doc(json!({"to_do": {"checked": false}}));
        d.get_doc_mut("to_do").unwrap().insert("checked", true);
        assert_eq!(d.to_value(), json!({"to_do": {"checked": true}}));
    }

    // ========================================================================
    // Normalizing Writes
    // ========================================================================

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Sample {
        name: String,
        tags: Vec<String>,
    }

    #[test]
    fn test_set_normalizes_structs_into_docs() {
        let mut d = Doc::new();
        d.set(
            "sample",
            &Sample {
                name: "x".into(),
                tags: vec!["a".into()],
            },
        )
        .unwrap();

        let nested = d.get_doc("sample").expect("struct stored as a document");
        assert_eq!(nested.get_string("name"), "x");
        assert!(matches!(nested.get("tags"), Some(Value::List(_))));
    }

    #[test]
    fn test_set_stores_scalars_and_options() {
        let mut d = Doc::new();
        d.set("n", &3).unwrap();
        d.set("none", &Option::<String>::None).unwrap();
        d.set("color", &Color::RedBackground).unwrap();

        assert_eq!(d.get_int("n"), 3);
        assert!(d.get("none").unwrap().is_null());
        assert_eq!(d.get_string("color"), "red_background");
    }

    #[test]
    fn test_marshal_unmarshal_round_trip() {
        let option = SelectOption::new("Done", Color::Green);
        let d = Doc::marshal(&option).unwrap();
        assert_eq!(d.to_value(), json!({"name": "Done", "color": "green"}));

        let back: SelectOption = d.unmarshal().unwrap();
        assert_eq!(back, option);
    }

    #[test]
    fn test_marshal_rejects_non_objects() {
        let err = Doc::marshal(&vec![1, 2]).unwrap_err();
        assert!(err.is_decode_error());
    }

    #[test]
    fn test_unmarshal_shape_mismatch_is_decode_error() {
        let d = doc(json!({"name": 5}));
        let result: Result<SelectOption, DocumentError> = d.unmarshal();
        assert!(result.unwrap_err().is_decode_error());
    }

    // ========================================================================
    // Append
    // ========================================================================

    #[test]
    fn test_append_requires_existing_list() {
        let mut d = doc(json!({"text": [], "title": "x"}));

        assert!(d.append("text", &json!({"plain_text": "a"})).unwrap());
        assert!(!d.append("title", &json!({"plain_text": "b"})).unwrap());
        assert!(!d.append("missing", &json!({})).unwrap());

        assert_eq!(d.get_doc_list("text").unwrap().len(), 1);
        assert_eq!(d.get_string("title"), "x");
        assert!(d.get("missing").is_none());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut d = doc(json!({"items": []}));
        for i in 0..3 {
            d.append("items", &json!({"i": i})).unwrap();
        }
        let order: Vec<i64> = d
            .get_doc_list("items")
            .unwrap()
            .iter()
            .map(|item| item.get_int("i"))
            .collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    // ========================================================================
    // Codec
    // ========================================================================

    #[test]
    fn test_decode_encode_round_trip() {
        let bytes = br#"{"object":"block","type":"paragraph","paragraph":{"text":[]}}"#;
        let d = decode(bytes).unwrap();
        assert_eq!(d.get_string("type"), "paragraph");

        let again = decode(&encode(&d).unwrap()).unwrap();
        assert_eq!(again, d);
    }

    #[test]
    fn test_decode_rejects_non_objects_and_garbage() {
        assert!(decode(b"[1,2,3]").unwrap_err().is_decode_error());
        assert!(decode(b"{not json").unwrap_err().is_decode_error());
    }

    #[test]
    fn test_from_value_rejects_scalars() {
        assert!(Doc::from_value(json!("text")).is_err());
        assert!(Doc::try_from(json!({"a": 1})).is_ok());
    }
}
