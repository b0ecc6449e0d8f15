//! # Error Types: Structured Error Hierarchy
//!
//! Operational errors for sgate. These are distinct from validation
//! diagnostics: a malformed manifest is reported through
//! [`ValidationResult`](crate::ValidationResult), never through an `Err`.
//! `SgateError` covers the cases where a caller hands the library something
//! it cannot interpret at all, such as a scene type name outside the closed
//! taxonomy.

use thiserror::Error;

/// Top-level error type for sgate.
#[derive(Error, Debug)]
pub enum SgateError {
    /// A scene type name outside the closed taxonomy.
    #[error("unknown scene type: {0:?}")]
    UnknownSceneType(String),
}
