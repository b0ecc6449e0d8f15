//! # Scene Dispatcher
//!
//! Checks the `id`/`type` pair of a scene and routes the payload to the
//! validator for its declared type. A scene whose type is absent, mistyped
//! or outside [`SceneType`] gets exactly one diagnosis for that and is not
//! inspected further.

use serde_json::{Map, Value};
use sgate_core::{Diagnostics, ErrorKind, FieldPath, SceneType};

use crate::dialogue::validate_dialogue;
use crate::fields::{expect_entry, optional, require_string};
use crate::navigation::validate_navigation;
use crate::options::ValidatorOptions;
use crate::quiz::validate_quiz;

/// What the reference checks need to know about one scene.
#[derive(Debug, Clone)]
pub struct SceneOutline<'a> {
    /// Path of the scene in the manifest.
    pub path: FieldPath,
    /// Declared id, when it is a string.
    pub id: Option<&'a str>,
    /// Navigation target, when the scene was fully dispatched and `next` is
    /// a string.
    pub next: Option<&'a str>,
}

/// Validate one element of the scene list.
///
/// Returns `None` only when the element is not an object at all.
pub fn validate_scene<'a>(
    diags: &mut Diagnostics,
    options: &ValidatorOptions,
    scene: &'a Value,
    path: &FieldPath,
) -> Option<SceneOutline<'a>> {
    let scene = expect_entry(diags, scene, "Scene", path)?;
    Some(validate_scene_object(diags, options, scene, path))
}

/// Validate a scene already known to be an object.
pub fn validate_scene_object<'a>(
    diags: &mut Diagnostics,
    options: &ValidatorOptions,
    scene: &'a Map<String, Value>,
    path: &FieldPath,
) -> SceneOutline<'a> {
    let id = require_string(diags, scene, "id", path);
    let mut outline = SceneOutline {
        path: path.clone(),
        id,
        next: None,
    };

    // The field checker has already reported an absent or mistyped type.
    let Some(declared) = require_string(diags, scene, "type", path) else {
        return outline;
    };

    let scene_type = match declared.parse::<SceneType>() {
        Ok(scene_type) => scene_type,
        Err(_) => {
            diags.error(
                ErrorKind::InvalidValue,
                &path.field("type"),
                format!(
                    "Invalid scene type '{declared}'. Must be one of: {}",
                    SceneType::allowed_list()
                ),
            );
            return outline;
        }
    };

    tracing::trace!(path = %path, scene_type = %scene_type, "dispatching scene");
    outline.next = validate_scene_body(diags, options, scene, path, scene_type);
    outline
}

/// Validate the payload and navigation of a scene of a known type.
///
/// Returns the navigation target, if any.
pub fn validate_scene_body<'a>(
    diags: &mut Diagnostics,
    options: &ValidatorOptions,
    scene: &'a Map<String, Value>,
    path: &FieldPath,
    scene_type: SceneType,
) -> Option<&'a str> {
    match scene_type {
        SceneType::Dialogue => validate_dialogue(diags, options, scene, path),
        SceneType::Quiz => validate_quiz(diags, options, scene, path),
        // Recognized by name only.
        SceneType::Assessment | SceneType::Resource | SceneType::Summary => {}
    }

    let navigation = optional(scene, "navigation")?;
    validate_navigation(diags, navigation, &path.field("navigation"))
}
