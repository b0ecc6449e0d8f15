//! # Runtime Value Categories
//!
//! Manifests are untyped at the boundary. Before any field is read, its
//! runtime category is tested through [`ValueKind::of`].
//!
//! ## Invariant
//!
//! Arrays are classified as [`ValueKind::Array`], never as
//! [`ValueKind::Object`]. Scenes and options are arrays while metadata is a
//! plain object; conflating the two would let an array stand in for the
//! metadata block (or an object for the scene list) without a diagnostic.

use serde_json::Value;

/// The runtime category of an untyped document value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// JSON `null`.
    Null,
    /// `true` or `false`.
    Boolean,
    /// Any JSON number, integer or float.
    Number,
    /// A UTF-8 string.
    String,
    /// An ordered sequence.
    Array,
    /// A plain key/value map.
    Object,
}

impl ValueKind {
    /// Classify a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Returns the lowercase category name used in diagnostic messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// The category name with its indefinite article ("an array", "a string").
    pub fn with_article(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "a boolean",
            Self::Number => "a number",
            Self::String => "a string",
            Self::Array => "an array",
            Self::Object => "an object",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
