//! # sgate-core: Foundational Types for the Manifest Gate
//!
//! This crate defines the vocabulary shared by every other `sgate-*` crate:
//! how an untyped document value is categorized at runtime, how a location
//! inside that document is addressed, and how findings about it are recorded
//! and handed back to callers.
//!
//! ## Key Design Principles
//!
//! 1. **Runtime categories, not compile-time shapes.** Manifests arrive from
//!    an untrusted generative pipeline. They are held as `serde_json::Value`
//!    and inspected through [`ValueKind`], which never reports an array as an
//!    object.
//!
//! 2. **Path-addressed diagnostics.** Every [`ValidationError`] and
//!    [`ValidationWarning`] carries the exact [`FieldPath`] it applies to
//!    (`scenes[2].dialogue_turns[0].speaker`).
//!
//! 3. **Per-call accumulation.** [`Diagnostics`] is created fresh for each
//!    validation call and consumed into an immutable [`ValidationResult`].
//!    There is no process-wide diagnostic state.
//!
//! 4. **Single `SceneType` enum.** The closed set of scene variants is
//!    defined once; adding a variant forces every dispatcher to handle it.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `sgate-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

#![deny(unsafe_code)]

pub mod diagnostic;
pub mod error;
pub mod path;
pub mod scene;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use diagnostic::{
    Diagnostics, ErrorKind, ValidationError, ValidationResult, ValidationWarning, WarningKind,
};
pub use error::SgateError;
pub use path::FieldPath;
pub use scene::{SceneType, SCENE_TYPE_COUNT};
pub use value::ValueKind;
