//! # Navigation Validator
//!
//! Checks the optional outgoing-edge descriptor of a scene. Only the type of
//! `next` is checked here; whether it names a real scene is a reference
//! concern handled (optionally) by [`crate::references`].

use serde_json::Value;
use sgate_core::{Diagnostics, ErrorKind, FieldPath, ValueKind};

use crate::fields::optional;

/// `next` values that end the experience instead of naming a scene.
pub const TERMINAL_TARGETS: &[&str] = &["end"];

/// Validate a navigation descriptor found at `path`.
///
/// Returns the `next` target when it is a string.
pub fn validate_navigation<'a>(
    diags: &mut Diagnostics,
    navigation: &'a Value,
    path: &FieldPath,
) -> Option<&'a str> {
    let Some(nav) = navigation.as_object() else {
        diags.error(
            ErrorKind::InvalidType,
            path,
            format!(
                "Field 'navigation' must be an object, got {}",
                ValueKind::of(navigation)
            ),
        );
        return None;
    };

    let next = optional(nav, "next")?;
    match next.as_str() {
        Some(target) => Some(target),
        None => {
            diags.error(
                ErrorKind::InvalidType,
                &path.field("next"),
                format!("Field 'next' must be a string, got {}", ValueKind::of(next)),
            );
            None
        }
    }
}

/// Returns true if `target` ends the experience.
pub fn is_terminal(target: &str) -> bool {
    TERMINAL_TARGETS.contains(&target)
}
