//! # Primitive Field Checker
//!
//! Presence and category checks for a single named field, shared by every
//! higher-level validator. Each check appends to the caller's
//! [`Diagnostics`] and hands back the field's value only when it has the
//! expected category, so callers can skip dependent checks (do not walk an
//! `options` list that turned out to be a string).
//!
//! Optional fields explicitly set to `null` are treated as absent. Required
//! fields set to `null` are present with the wrong category.

use serde_json::{Map, Value};
use sgate_core::{Diagnostics, ErrorKind, FieldPath, ValueKind, WarningKind};

/// Verify that `field` exists on `object` and has category `expected`.
///
/// Emits `missing` when the key is absent and `invalid_type` when its
/// category differs. Returns the value on success.
pub fn check_field<'a>(
    diags: &mut Diagnostics,
    object: &'a Map<String, Value>,
    field: &str,
    expected: ValueKind,
    prefix: &FieldPath,
) -> Option<&'a Value> {
    let Some(value) = object.get(field) else {
        diags.error(
            ErrorKind::Missing,
            &prefix.field(field),
            format!("Missing required field '{field}'"),
        );
        return None;
    };

    expect_kind(diags, value, field, expected, prefix)
}

/// Category check for a value already looked up under `field`.
///
/// Emits `invalid_type` at `prefix.field` when the category differs.
pub fn expect_kind<'a>(
    diags: &mut Diagnostics,
    value: &'a Value,
    field: &str,
    expected: ValueKind,
    prefix: &FieldPath,
) -> Option<&'a Value> {
    let actual = ValueKind::of(value);
    if actual != expected {
        diags.error(
            ErrorKind::InvalidType,
            &prefix.field(field),
            format!(
                "Field '{field}' must be {}, got {actual}",
                expected.with_article()
            ),
        );
        return None;
    }

    Some(value)
}

/// Required string field. Present-but-blank strings pass with a
/// `best_practice` warning.
pub fn require_string<'a>(
    diags: &mut Diagnostics,
    object: &'a Map<String, Value>,
    field: &str,
    prefix: &FieldPath,
) -> Option<&'a str> {
    let s = check_field(diags, object, field, ValueKind::String, prefix)?.as_str()?;
    if s.trim().is_empty() {
        diags.warn(
            WarningKind::BestPractice,
            &prefix.field(field),
            format!("Field '{field}' is empty"),
        );
    }
    Some(s)
}

/// Required array field.
pub fn require_array<'a>(
    diags: &mut Diagnostics,
    object: &'a Map<String, Value>,
    field: &str,
    prefix: &FieldPath,
) -> Option<&'a Vec<Value>> {
    check_field(diags, object, field, ValueKind::Array, prefix)?.as_array()
}

/// Required object field.
pub fn require_object<'a>(
    diags: &mut Diagnostics,
    object: &'a Map<String, Value>,
    field: &str,
    prefix: &FieldPath,
) -> Option<&'a Map<String, Value>> {
    check_field(diags, object, field, ValueKind::Object, prefix)?.as_object()
}

/// Look up an optional field, treating an explicit `null` as absent.
pub fn optional<'a>(object: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    object.get(field).filter(|v| !v.is_null())
}

/// An array element that must itself be an object (a scene, a turn, an
/// option). Anything else is a `structure` error naming the entry.
pub fn expect_entry<'a>(
    diags: &mut Diagnostics,
    value: &'a Value,
    entry: &str,
    path: &FieldPath,
) -> Option<&'a Map<String, Value>> {
    match value.as_object() {
        Some(object) => Some(object),
        None => {
            diags.error(
                ErrorKind::Structure,
                path,
                format!("{entry} must be an object, got {}", ValueKind::of(value)),
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn missing_field_reports_missing() {
        let mut diags = Diagnostics::new();
        let o = obj(json!({}));
        let base = FieldPath::document();
        assert!(check_field(&mut diags, &o, "gameId", ValueKind::String, &base).is_none());
        let result = diags.finish();
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].kind, ErrorKind::Missing);
        assert_eq!(result.errors()[0].path, "gameId");
    }

    #[test]
    fn mismatched_category_reports_expected_and_actual() {
        let mut diags = Diagnostics::new();
        let o = obj(json!({"version": 2}));
        assert!(require_string(&mut diags, &o, "version", &FieldPath::document()).is_none());
        let result = diags.finish();
        assert_eq!(result.errors()[0].kind, ErrorKind::InvalidType);
        assert_eq!(result.errors()[0].message, "Field 'version' must be a string, got number");
    }

    #[test]
    fn array_does_not_satisfy_object() {
        let mut diags = Diagnostics::new();
        let o = obj(json!({"metadata": []}));
        assert!(require_object(&mut diags, &o, "metadata", &FieldPath::document()).is_none());
        let result = diags.finish();
        assert_eq!(result.errors()[0].message, "Field 'metadata' must be an object, got array");
    }

    #[test]
    fn object_does_not_satisfy_array() {
        let mut diags = Diagnostics::new();
        let o = obj(json!({"scenes": {"0": {}}}));
        assert!(require_array(&mut diags, &o, "scenes", &FieldPath::document()).is_none());
        assert_eq!(diags.error_count(), 1);
    }

    #[test]
    fn null_required_field_is_invalid_type() {
        let mut diags = Diagnostics::new();
        let o = obj(json!({"title": null}));
        let prefix = FieldPath::document().field("metadata");
        assert!(require_string(&mut diags, &o, "title", &prefix).is_none());
        let result = diags.finish();
        assert_eq!(result.errors()[0].path, "metadata.title");
        assert!(result.errors()[0].message.ends_with("got null"));
    }

    #[test]
    fn blank_string_passes_with_warning() {
        let mut diags = Diagnostics::new();
        let o = obj(json!({"gameId": "  "}));
        assert_eq!(require_string(&mut diags, &o, "gameId", &FieldPath::document()), Some("  "));
        let result = diags.finish();
        assert!(result.is_valid());
        assert_eq!(result.warnings()[0].kind, WarningKind::BestPractice);
        assert_eq!(result.warnings()[0].path, "gameId");
    }

    #[test]
    fn optional_treats_null_as_absent() {
        let o = obj(json!({"navigation": null, "messages": []}));
        assert!(optional(&o, "navigation").is_none());
        assert!(optional(&o, "missing").is_none());
        assert!(optional(&o, "messages").is_some());
    }

    #[test]
    fn non_object_entry_is_structure_error() {
        let mut diags = Diagnostics::new();
        let path = FieldPath::document().field("scenes").index(3);
        assert!(expect_entry(&mut diags, &json!("intro"), "Scene", &path).is_none());
        let result = diags.finish();
        assert_eq!(result.errors()[0].kind, ErrorKind::Structure);
        assert_eq!(result.errors()[0].path, "scenes[3]");
        assert_eq!(result.errors()[0].message, "Scene must be an object, got string");
    }
}
