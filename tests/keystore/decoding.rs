//! Typed Read Tests
//!
//! Tests for get_with, get_as_text and get_as_integer.

use crate::*;

// =============================================================================
// TEXT
// =============================================================================

#[test]
fn test_get_as_text_from_text() {
    let store = create_store();

    let key = store.store("hello").unwrap();
    assert_eq!(store.get_as_text(&key).unwrap(), Some("hello".to_string()));
}

#[test]
fn test_get_as_text_from_utf8_bytes() {
    let store = create_store();

    let key = store.store("héllo".as_bytes().to_vec()).unwrap();
    assert_eq!(store.get_as_text(&key).unwrap(), Some("héllo".to_string()));
}

#[test]
fn test_get_as_text_invalid_utf8_is_encoding_error() {
    let store = create_store();

    let key = store.store(vec![0xffu8, 0xfe, 0xfd]).unwrap();
    let err = store.get_as_text(&key).unwrap_err();

    assert!(err.is_encoding_error());
    assert!(matches!(err, Error::Decode(DecodeError::Encoding(_))));
}

#[test]
fn test_get_as_text_from_numbers() {
    let store = create_store();

    let int = store.store(12).unwrap();
    let float = store.store(0.25).unwrap();
    assert_eq!(store.get_as_text(&int).unwrap(), Some("12".to_string()));
    assert_eq!(store.get_as_text(&float).unwrap(), Some("0.25".to_string()));
}

#[test]
fn test_get_as_text_missing_is_none() {
    let store = create_store();
    assert_eq!(store.get_as_text("missing").unwrap(), None);
}

// =============================================================================
// INTEGER
// =============================================================================

#[test]
fn test_get_as_integer_from_text_42() {
    let store = create_store();

    let key = store.store("42").unwrap();
    assert_eq!(store.get_as_integer(&key).unwrap(), Some(42));
}

#[test]
fn test_get_as_integer_from_text_abc_is_format_error() {
    let store = create_store();

    let key = store.store("abc").unwrap();
    let err = store.get_as_integer(&key).unwrap_err();

    assert!(err.is_format_error());
    assert!(!err.is_retryable());
}

#[test]
fn test_get_as_integer_from_integer() {
    let store = create_store();

    let key = store.store(-9000i64).unwrap();
    assert_eq!(store.get_as_integer(&key).unwrap(), Some(-9000));
}

#[test]
fn test_get_as_integer_from_bytes() {
    let store = create_store();

    let key = store.store(b"123".to_vec()).unwrap();
    assert_eq!(store.get_as_integer(&key).unwrap(), Some(123));
}

#[test]
fn test_get_as_integer_from_float_is_format_error() {
    let store = create_store();

    let key = store.store(2.0).unwrap();
    assert!(store.get_as_integer(&key).unwrap_err().is_format_error());
}

#[test]
fn test_get_as_integer_missing_is_none() {
    let store = create_store();
    assert_eq!(store.get_as_integer("missing").unwrap(), None);
}

// =============================================================================
// CUSTOM DECODERS
// =============================================================================

#[test]
fn test_get_with_closure() {
    let store = create_store();

    let key = store.store("a,b,c").unwrap();
    let parts = store
        .get_with(&key, |raw: &Value| -> std::result::Result<Vec<String>, DecodeError> {
            let text = raw
                .as_text()
                .ok_or_else(|| DecodeError::custom("expected text"))?;
            Ok(text.split(',').map(str::to_string).collect())
        })
        .unwrap();

    assert_eq!(
        parts,
        Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    );
}

#[test]
fn test_get_with_builtin_decoder() {
    let store = create_store();

    let key = store.store(" 17 ").unwrap();
    assert_eq!(store.get_with(&key, Base10Integer).unwrap(), Some(17));
    assert_eq!(
        store.get_with(&key, Utf8Text).unwrap(),
        Some(" 17 ".to_string())
    );
}

#[test]
fn test_failed_decode_leaves_entry_intact() {
    let store = create_store();

    let key = store.store("abc").unwrap();
    assert!(store.get_as_integer(&key).is_err());
    assert_eq!(store.get(&key).unwrap(), Some(Value::Text("abc".into())));
}
