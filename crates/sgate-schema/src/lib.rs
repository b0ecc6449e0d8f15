//! # sgate-schema: Manifest Structural Validation
//!
//! This crate checks AI-generated training manifests before they reach the
//! game engine. A manifest is received as an untyped JSON/YAML document and
//! checked against the fixed manifest shape: root identity fields, metadata,
//! and an ordered list of scenes whose payload rules depend on the scene
//! type.
//!
//! ## Responsibilities
//!
//! - **Structural validation:** [`ManifestValidator`] reports every
//!   independent problem with its exact path, split into blocking errors and
//!   advisory warnings.
//! - **Dual-dialect tolerance:** Dialogue and quiz scenes each accept two
//!   encodings produced by different generator versions.
//! - **Document loading:** [`load_document`] turns `.json`, `.yaml` and
//!   `.yml` files into the same `serde_json::Value` the validator consumes.
//!
//! ## Design
//!
//! Validation is a pure function of the candidate and the
//! [`ValidatorOptions`]. It never panics and never fails; a non-object input
//! is itself a reportable error. The four free functions below use the
//! default options.

pub mod dialogue;
pub mod document;
pub mod fields;
pub mod manifest;
pub mod metadata;
pub mod navigation;
pub mod options;
pub mod quiz;
pub mod references;
pub mod scene;

// Re-export primary types.
pub use document::{load_document, parse_document, DocumentError, DocumentFormat};
pub use manifest::ManifestValidator;
pub use options::{ValidatorOptions, DEFAULT_SUPPORTED_LANGUAGES};

use serde_json::Value;
use sgate_core::ValidationResult;

/// Validate a complete manifest with default options.
pub fn validate_game_manifest(candidate: &Value) -> ValidationResult {
    ManifestValidator::default().validate_manifest(candidate)
}

/// Validate a single scene object with default options.
pub fn validate_scene_content(candidate: &Value) -> ValidationResult {
    ManifestValidator::default().validate_scene(candidate)
}

/// Validate a bare payload as a quiz scene with default options.
pub fn validate_quiz_content(candidate: &Value) -> ValidationResult {
    ManifestValidator::default().validate_quiz(candidate)
}

/// Validate a bare payload as a dialogue scene with default options.
pub fn validate_dialogue_content(candidate: &Value) -> ValidationResult {
    ManifestValidator::default().validate_dialogue(candidate)
}
