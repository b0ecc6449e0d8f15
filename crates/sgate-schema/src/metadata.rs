//! # Metadata Validator
//!
//! Checks the manifest-level descriptive block. All five fields are required
//! strings. Two further rules only degrade to warnings: an unsupported
//! language code and a duration that does not read like `"5 minutes"`.
//! Both still render; they are signals for human content review.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use sgate_core::{Diagnostics, FieldPath, WarningKind};

use crate::fields::require_string;
use crate::options::ValidatorOptions;

/// Required string fields of the metadata block, in check order.
pub const METADATA_FIELDS: &[&str] = &[
    "title",
    "description",
    "duration",
    "targetAudience",
    "language",
];

static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+ minutes?$").expect("duration pattern is valid"));

/// Returns true if `duration` has the `<integer> minute(s)` form.
pub fn is_well_formed_duration(duration: &str) -> bool {
    DURATION_RE.is_match(duration)
}

/// Validate a metadata block already known to be an object.
pub fn validate_metadata(
    diags: &mut Diagnostics,
    options: &ValidatorOptions,
    metadata: &Map<String, Value>,
    path: &FieldPath,
) {
    let mut language = None;
    let mut duration = None;
    for field in METADATA_FIELDS {
        let value = require_string(diags, metadata, field, path);
        match *field {
            "language" => language = value,
            "duration" => duration = value,
            _ => {}
        }
    }

    // Blank values were already flagged by the field checker.
    if let Some(code) = language.filter(|s| !s.trim().is_empty()) {
        if !options.supports_language(code) {
            diags.warn(
                WarningKind::BestPractice,
                &path.field("language"),
                format!(
                    "Unsupported language code '{code}'. Supported: {}",
                    options.supported_languages.join(", ")
                ),
            );
        }
    }

    if let Some(d) = duration.filter(|s| !s.trim().is_empty()) {
        if !is_well_formed_duration(d) {
            diags.warn(
                WarningKind::BestPractice,
                &path.field("duration"),
                format!("Duration '{d}' does not match the expected format, e.g. '5 minutes'"),
            );
        }
    }
}
