//! # Cross-Scene Reference Checks
//!
//! Optional quality pass over the scene outlines collected during dispatch:
//! duplicate scene ids and `navigation.next` targets that name no scene.
//! Both are warnings. One hash index over the ids keeps the pass linear in
//! the number of scenes.

use std::collections::HashMap;

use sgate_core::{Diagnostics, WarningKind};

use crate::navigation::is_terminal;
use crate::scene::SceneOutline;

/// Warn about duplicate ids and dangling navigation targets.
pub fn check_references(diags: &mut Diagnostics, outlines: &[SceneOutline<'_>]) {
    let mut first_seen: HashMap<&str, &SceneOutline<'_>> = HashMap::with_capacity(outlines.len());

    for outline in outlines {
        let Some(id) = outline.id else { continue };
        match first_seen.get(id) {
            Some(first) => diags.warn(
                WarningKind::BestPractice,
                &outline.path.field("id"),
                format!("Duplicate scene id '{id}' (first declared at {})", first.path),
            ),
            None => {
                first_seen.insert(id, outline);
            }
        }
    }

    for outline in outlines {
        let Some(next) = outline.next else { continue };
        if !is_terminal(next) && !first_seen.contains_key(next) {
            diags.warn(
                WarningKind::BestPractice,
                &outline.path.field("navigation").field("next"),
                format!("Navigation target '{next}' does not match any scene id"),
            );
        }
    }
}
