//! # Diagnostics: Errors, Warnings, and the Validation Result
//!
//! Findings are split into two tiers:
//!
//! - **Errors** ([`ErrorKind`]) make a manifest unsafe to execute. Any error
//!   forces [`ValidationResult::is_valid`] to `false`.
//! - **Warnings** ([`WarningKind`]) flag content that renders but is likely
//!   a generation mistake. Warnings never affect the verdict.
//!
//! [`Diagnostics`] is the mutable accumulator owned by exactly one
//! validation call. It is consumed by [`Diagnostics::finish`] into an
//! immutable [`ValidationResult`].

use std::fmt;

use serde::Serialize;

use crate::path::FieldPath;

/// Category of a structural error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A required field is absent.
    Missing,
    /// A field is present with the wrong runtime category.
    InvalidType,
    /// A field has the right category but an unacceptable value.
    InvalidValue,
    /// An array element does not have the shape of an entry.
    Structure,
}

impl ErrorKind {
    /// Returns the snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::InvalidType => "invalid_type",
            Self::InvalidValue => "invalid_value",
            Self::Structure => "structure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a quality warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Content uses an encoding produced by an older generator.
    Deprecated,
    /// Content is large enough to slow down downstream consumers.
    Performance,
    /// Content renders but is probably not what the author meant.
    BestPractice,
}

impl WarningKind {
    /// Returns the snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deprecated => "deprecated",
            Self::Performance => "performance",
            Self::BestPractice => "best_practice",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A path-addressed structural error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Dotted/bracketed address of the offending field.
    pub path: String,
    /// Human-readable description of the problem.
    pub message: String,
    /// Error category.
    pub kind: ErrorKind,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}: {} [{}]", self.path, self.message, self.kind)
    }
}

/// A path-addressed quality warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationWarning {
    /// Dotted/bracketed address of the field concerned.
    pub path: String,
    /// Human-readable description of the concern.
    pub message: String,
    /// Warning category.
    pub kind: WarningKind,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}: {} [{}]", self.path, self.message, self.kind)
    }
}

/// Mutable error/warning collection for a single validation call.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationWarning>,
}

impl Diagnostics {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error at `path`.
    pub fn error(&mut self, kind: ErrorKind, path: &FieldPath, message: impl Into<String>) {
        self.errors.push(ValidationError {
            path: path.as_str().to_string(),
            message: message.into(),
            kind,
        });
    }

    /// Record a warning at `path`.
    pub fn warn(&mut self, kind: WarningKind, path: &FieldPath, message: impl Into<String>) {
        self.warnings.push(ValidationWarning {
            path: path.as_str().to_string(),
            message: message.into(),
            kind,
        });
    }

    /// Number of errors recorded so far.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Number of warnings recorded so far.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Freeze the accumulated findings into a result.
    pub fn finish(self) -> ValidationResult {
        ValidationResult {
            is_valid: self.errors.is_empty(),
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}

/// The outcome of one validation call.
///
/// `is_valid` is true iff `errors` is empty. Fields are private so the
/// verdict can never disagree with the error list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// True iff no error was recorded.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Errors in the order they were found.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Warnings in the order they were found.
    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    /// Errors recorded at exactly `path`.
    pub fn errors_at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors.iter().filter(move |e| e.path == path)
    }

    /// Warnings recorded at exactly `path`.
    pub fn warnings_at<'a>(
        &'a self,
        path: &'a str,
    ) -> impl Iterator<Item = &'a ValidationWarning> {
        self.warnings.iter().filter(move |w| w.path == path)
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            write!(f, "valid")?;
        } else {
            write!(f, "invalid ({} error(s))", self.errors.len())?;
        }
        for e in &self.errors {
            write!(f, "\n{e}")?;
        }
        for w in &self.warnings {
            write!(f, "\n{w}")?;
        }
        Ok(())
    }
}
