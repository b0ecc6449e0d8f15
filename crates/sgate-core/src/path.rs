//! # Diagnostic Paths
//!
//! A [`FieldPath`] addresses one location inside a manifest using dotted
//! field names and bracketed array indices, e.g.
//! `scenes[2].dialogue_turns[0].speaker`.
//!
//! Paths are built by extension from a base: the manifest base is the empty
//! path (so root fields render as bare names like `gameId`), and bare-content
//! entry points start from [`FieldPath::root`] (so fields render as
//! `root.id`). The empty path itself renders as `root`.

use serde::{Serialize, Serializer};

/// Literal rendering of the document root.
pub const ROOT: &str = "root";

/// A dotted/bracketed address into a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    /// The manifest base. Fields appended to it render without a prefix.
    pub fn document() -> Self {
        Self(String::new())
    }

    /// The literal `root` prefix used by bare-content validation.
    pub fn root() -> Self {
        Self(ROOT.to_string())
    }

    /// Append a named field.
    pub fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{name}", self.0))
        }
    }

    /// Append an array index.
    pub fn index(&self, i: usize) -> Self {
        if self.0.is_empty() {
            Self(format!("{ROOT}[{i}]"))
        } else {
            Self(format!("{}[{i}]", self.0))
        }
    }

    /// The rendered path.
    pub fn as_str(&self) -> &str {
        if self.0.is_empty() {
            ROOT
        } else {
            &self.0
        }
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.as_str().to_string()
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
