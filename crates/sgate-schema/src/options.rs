//! # Validator Options
//!
//! Tunables for the quality (warning) tier. No option changes which
//! manifests are structurally valid; they only widen or narrow the set of
//! warnings emitted alongside the verdict.
//!
//! Options can be loaded from a YAML or JSON file. Every field is optional
//! and falls back to its default, unknown keys are rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::{load_document, DocumentError};

/// Language codes accepted without a warning when no list is configured.
pub const DEFAULT_SUPPORTED_LANGUAGES: &[&str] =
    &["en", "es", "fr", "de", "pt", "it", "zh", "ja", "ko", "ar", "hi"];

/// Configuration for [`ManifestValidator`](crate::ManifestValidator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorOptions {
    /// `metadata.language` values that do not produce a warning.
    pub supported_languages: Vec<String>,
    /// Warn on duplicate scene ids and dangling `navigation.next` targets.
    pub check_references: bool,
    /// Warn when a scene uses the legacy `messages` or flat-question encoding.
    pub flag_legacy_encodings: bool,
    /// Warn when a manifest has more scenes than this.
    pub scene_count_warning: Option<usize>,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            supported_languages: DEFAULT_SUPPORTED_LANGUAGES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            check_references: false,
            flag_legacy_encodings: false,
            scene_count_warning: None,
        }
    }
}

impl ValidatorOptions {
    /// Load options from a YAML or JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Read`]/[`DocumentError::Parse`] if the file
    /// cannot be decoded, and [`DocumentError::Config`] if it decodes to
    /// something other than a valid options object.
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let value = load_document(path)?;
        let options: Self = serde_json::from_value(value).map_err(|e| DocumentError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        tracing::debug!(
            path = %path.display(),
            languages = options.supported_languages.len(),
            check_references = options.check_references,
            "loaded validator options"
        );
        Ok(options)
    }

    /// Returns true if `code` is on the allow-list. Case-sensitive.
    pub fn supports_language(&self, code: &str) -> bool {
        self.supported_languages.iter().any(|l| l == code)
    }
}
