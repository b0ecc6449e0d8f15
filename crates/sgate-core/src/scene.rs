//! # Scene Types: Closed Variant Set
//!
//! Every scene declares one of five types. Two (`dialogue`, `quiz`) carry
//! fully validated payloads; the rest are recognized by name and only their
//! `id`/`type` pair is checked. Every `match` on `SceneType` is exhaustive,
//! so adding a variant forces the dispatcher to decide how to handle it.

use std::str::FromStr;

use crate::error::SgateError;

/// The declared type of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneType {
    /// Conversation between characters.
    Dialogue,
    /// Multiple-choice knowledge check.
    Quiz,
    /// Graded evaluation step.
    Assessment,
    /// Reference material.
    Resource,
    /// Closing recap.
    Summary,
}

/// Total number of scene types.
pub const SCENE_TYPE_COUNT: usize = 5;

impl SceneType {
    /// Returns all scene types in canonical order.
    pub fn all() -> &'static [SceneType] {
        &[
            Self::Dialogue,
            Self::Quiz,
            Self::Assessment,
            Self::Resource,
            Self::Summary,
        ]
    }

    /// Returns the snake_case identifier used in manifests.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dialogue => "dialogue",
            Self::Quiz => "quiz",
            Self::Assessment => "assessment",
            Self::Resource => "resource",
            Self::Summary => "summary",
        }
    }

    /// Comma-separated list of every identifier, for diagnostic messages.
    pub fn allowed_list() -> String {
        Self::all()
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for SceneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SceneType {
    type Err = SgateError;

    /// Parse a scene type from its identifier. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dialogue" => Ok(Self::Dialogue),
            "quiz" => Ok(Self::Quiz),
            "assessment" => Ok(Self::Assessment),
            "resource" => Ok(Self::Resource),
            "summary" => Ok(Self::Summary),
            other => Err(SgateError::UnknownSceneType(other.to_string())),
        }
    }
}
