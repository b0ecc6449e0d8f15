//! # Manifest Orchestrator
//!
//! Top-level entry point for validating a training manifest.
//!
//! ## Security Invariant
//!
//! The validator sits directly on the boundary of an untrusted,
//! machine-generated feed. It is total: every input, including `null`,
//! primitives, arrays, deeply nested or enormous documents, produces a
//! [`ValidationResult`] and never a panic. Traversal is shallow and
//! field-driven; it reads the named fields of the manifest shape and never
//! walks unknown sub-trees, so cost is linear in the fields inspected.
//!
//! ## Short-Circuit Points
//!
//! Validation only stops early in two places:
//!
//! 1. A root that is not an object gets a single `invalid_type` error at
//!    `root` and nothing else.
//! 2. A scene with an unrecognized (or absent) type is not inspected beyond
//!    its `id`/`type` pair.
//!
//! Everywhere else all independent checks run, so a caller fixing one
//! problem sees the next real one without re-running.

use serde_json::Value;
use sgate_core::{
    Diagnostics, ErrorKind, FieldPath, SceneType, ValidationResult, ValueKind, WarningKind,
};

use crate::fields::{require_array, require_object, require_string};
use crate::metadata::validate_metadata;
use crate::options::ValidatorOptions;
use crate::references::check_references;
use crate::scene::{validate_scene, validate_scene_body, validate_scene_object};

/// Validates manifests and bare scene payloads.
///
/// Holds only immutable options; every call builds its own [`Diagnostics`],
/// so one validator can be shared across threads and calls never observe
/// each other's findings.
#[derive(Debug, Clone, Default)]
pub struct ManifestValidator {
    options: ValidatorOptions,
}

impl ManifestValidator {
    /// Create a validator with the given options.
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    /// Validate a complete manifest.
    pub fn validate_manifest(&self, candidate: &Value) -> ValidationResult {
        let mut diags = Diagnostics::new();
        let base = FieldPath::document();

        let Some(root) = candidate.as_object() else {
            diags.error(
                ErrorKind::InvalidType,
                &base,
                format!("Manifest must be an object, got {}", ValueKind::of(candidate)),
            );
            return diags.finish();
        };

        // Root fields are independent; every failure is reported.
        require_string(&mut diags, root, "gameId", &base);
        require_string(&mut diags, root, "version", &base);
        let metadata = require_object(&mut diags, root, "metadata", &base);
        let scenes = require_array(&mut diags, root, "scenes", &base);

        if let Some(metadata) = metadata {
            validate_metadata(&mut diags, &self.options, metadata, &base.field("metadata"));
        }

        let scene_count = scenes.map_or(0, Vec::len);
        if let Some(scenes) = scenes {
            let scenes_path = base.field("scenes");
            let mut outlines = Vec::with_capacity(scenes.len());
            for (i, scene) in scenes.iter().enumerate() {
                if let Some(outline) =
                    validate_scene(&mut diags, &self.options, scene, &scenes_path.index(i))
                {
                    outlines.push(outline);
                }
            }

            if scenes.is_empty() {
                diags.error(
                    ErrorKind::InvalidValue,
                    &scenes_path,
                    "Manifest must have at least one scene",
                );
            }

            if let Some(limit) = self.options.scene_count_warning {
                if scenes.len() > limit {
                    diags.warn(
                        WarningKind::Performance,
                        &scenes_path,
                        format!(
                            "Manifest has {} scenes, more than the recommended {limit}",
                            scenes.len()
                        ),
                    );
                }
            }

            if self.options.check_references {
                check_references(&mut diags, &outlines);
            }
        }

        tracing::debug!(
            scenes = scene_count,
            errors = diags.error_count(),
            warnings = diags.warning_count(),
            "validated manifest"
        );
        diags.finish()
    }

    /// Validate a bare scene object as if it were the document root.
    pub fn validate_scene(&self, candidate: &Value) -> ValidationResult {
        let mut diags = Diagnostics::new();
        let root = FieldPath::root();
        if let Some(scene) = gate_root(&mut diags, candidate) {
            validate_scene_object(&mut diags, &self.options, scene, &root);
        }
        diags.finish()
    }

    /// Validate a bare payload as a quiz scene, whatever its declared type.
    pub fn validate_quiz(&self, candidate: &Value) -> ValidationResult {
        self.validate_forced(candidate, SceneType::Quiz)
    }

    /// Validate a bare payload as a dialogue scene, whatever its declared type.
    pub fn validate_dialogue(&self, candidate: &Value) -> ValidationResult {
        self.validate_forced(candidate, SceneType::Dialogue)
    }

    fn validate_forced(&self, candidate: &Value, scene_type: SceneType) -> ValidationResult {
        let mut diags = Diagnostics::new();
        if let Some(payload) = gate_root(&mut diags, candidate) {
            validate_scene_body(&mut diags, &self.options, payload, &FieldPath::root(), scene_type);
        }
        tracing::debug!(
            scene_type = %scene_type,
            errors = diags.error_count(),
            "validated scene content"
        );
        diags.finish()
    }
}

/// Root type gate for bare-content entry points.
fn gate_root<'a>(
    diags: &mut Diagnostics,
    candidate: &'a Value,
) -> Option<&'a serde_json::Map<String, Value>> {
    let object = candidate.as_object();
    if object.is_none() {
        diags.error(
            ErrorKind::InvalidType,
            &FieldPath::root(),
            format!(
                "Scene content must be an object, got {}",
                ValueKind::of(candidate)
            ),
        );
    }
    object
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_manifest() -> Value {
        json!({
            "gameId": "safety-101",
            "version": "1.0.0",
            "metadata": {
                "title": "Workplace Safety",
                "description": "Spot the hazards before they spot you.",
                "duration": "5 minutes",
                "targetAudience": "new hires",
                "language": "en"
            },
            "scenes": [
                {
                    "id": "intro",
                    "type": "dialogue",
                    "dialogue_turns": [
                        {"speaker": "Ana", "character_id": "mentor", "text": "Welcome aboard."}
                    ],
                    "navigation": {"next": "check"}
                },
                {
                    "id": "check",
                    "type": "quiz",
                    "questions": [{
                        "question_text": "Where is the fire exit?",
                        "options": [
                            {"text": "Left", "is_correct": true},
                            {"text": "Right", "is_correct": false}
                        ]
                    }],
                    "navigation": {"next": "end"}
                }
            ]
        })
    }

    #[test]
    fn valid_manifest_passes() {
        let result = ManifestValidator::default().validate_manifest(&valid_manifest());
        assert!(result.is_valid(), "{result}");
        assert!(result.warnings().is_empty(), "{result}");
    }

    #[test]
    fn non_object_root_is_single_error() {
        let validator = ManifestValidator::default();
        let candidates = [
            json!(null),
            json!(42),
            json!("manifest"),
            json!([valid_manifest()]),
            json!(true),
        ];
        for candidate in candidates {
            let result = validator.validate_manifest(&candidate);
            assert_eq!(result.errors().len(), 1, "{candidate}");
            assert_eq!(result.errors()[0].kind, ErrorKind::InvalidType);
            assert_eq!(result.errors()[0].path, "root");
            assert!(result.warnings().is_empty());
        }
    }

    #[test]
    fn empty_object_reports_every_root_field() {
        let result = ManifestValidator::default().validate_manifest(&json!({}));
        let paths: Vec<&str> = result.errors().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["gameId", "version", "metadata", "scenes"]);
    }

    #[test]
    fn missing_version_and_description_reported_together() {
        let mut m = valid_manifest();
        m.as_object_mut().unwrap().remove("version");
        m["metadata"].as_object_mut().unwrap().remove("description");
        let result = ManifestValidator::default().validate_manifest(&m);
        assert_eq!(result.errors_at("version").count(), 1);
        assert_eq!(result.errors_at("metadata.description").count(), 1);
    }

    #[test]
    fn empty_scenes_rejected() {
        let mut m = valid_manifest();
        m["scenes"] = json!([]);
        let result = ManifestValidator::default().validate_manifest(&m);
        assert!(!result.is_valid());
        assert!(result.errors()[0].message.contains("at least one scene"));
    }

    #[test]
    fn array_metadata_is_type_confusion() {
        let mut m = valid_manifest();
        m["metadata"] = json!(["title"]);
        let result = ManifestValidator::default().validate_manifest(&m);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].path, "metadata");
        assert_eq!(result.errors()[0].kind, ErrorKind::InvalidType);
    }

    #[test]
    fn scene_count_warning() {
        let validator = ManifestValidator::new(ValidatorOptions {
            scene_count_warning: Some(1),
            ..ValidatorOptions::default()
        });
        let result = validator.validate_manifest(&valid_manifest());
        assert!(result.is_valid());
        assert_eq!(result.warnings()[0].kind, WarningKind::Performance);
        assert_eq!(result.warnings()[0].path, "scenes");
    }

    #[test]
    fn reference_checks_are_opt_in() {
        let mut m = valid_manifest();
        m["scenes"][0]["navigation"]["next"] = json!("nowhere");
        assert!(ManifestValidator::default().validate_manifest(&m).warnings().is_empty());

        let validator = ManifestValidator::new(ValidatorOptions {
            check_references: true,
            ..ValidatorOptions::default()
        });
        let result = validator.validate_manifest(&m);
        assert!(result.is_valid());
        assert_eq!(result.warnings_at("scenes[0].navigation.next").count(), 1);
    }

    #[test]
    fn bare_scene_uses_root_prefix() {
        let scene = json!({"type": "quiz", "questions": []});
        let result = ManifestValidator::default().validate_scene(&scene);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].path, "root.id");
    }

    #[test]
    fn bare_scene_non_object() {
        let result = ManifestValidator::default().validate_scene(&json!("scene"));
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].path, "root");
    }

    #[test]
    fn forced_quiz_ignores_declared_type() {
        let payload = json!({
            "type": "dialogue",
            "questions": [{"question_text": "Q", "options": [{"text": "a", "is_correct": false}]}]
        });
        let result = ManifestValidator::default().validate_quiz(&payload);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].path, "root.questions[0]");
    }

    #[test]
    fn forced_dialogue_requires_an_encoding() {
        let result = ManifestValidator::default().validate_dialogue(&json!({}));
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].path, "root");
        assert_eq!(result.errors()[0].kind, ErrorKind::Missing);
    }
}
