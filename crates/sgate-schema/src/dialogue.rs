//! # Dialogue Scene Validator
//!
//! Two upstream generator versions encode the same conversation differently:
//!
//! - **turns** (`dialogue_turns`): each entry has `speaker`, `character_id`
//!   and `text`.
//! - **messages** (`messages`): each entry carries at least `text`.
//!
//! [`DialogueEncoding::detect`] resolves which one a scene uses. Turns take
//! priority when both are present; neither present is a single `missing`
//! error on the scene.

use serde_json::{Map, Value};
use sgate_core::{Diagnostics, ErrorKind, FieldPath, ValueKind, WarningKind};

use crate::fields::{expect_entry, expect_kind, optional, require_string};
use crate::options::ValidatorOptions;

/// Required string fields of a dialogue turn.
const TURN_FIELDS: &[&str] = &["speaker", "character_id", "text"];

/// The encoding a dialogue scene uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogueEncoding<'a> {
    /// Rich encoding, `dialogue_turns` present.
    Turns(&'a Value),
    /// Legacy encoding, `messages` present and `dialogue_turns` absent.
    Messages(&'a Value),
    /// Neither field present.
    Absent,
}

impl<'a> DialogueEncoding<'a> {
    /// Resolve the encoding of `scene`, richest first.
    pub fn detect(scene: &'a Map<String, Value>) -> Self {
        if let Some(turns) = optional(scene, "dialogue_turns") {
            Self::Turns(turns)
        } else if let Some(messages) = optional(scene, "messages") {
            Self::Messages(messages)
        } else {
            Self::Absent
        }
    }
}

/// Validate the dialogue payload of `scene`.
pub fn validate_dialogue(
    diags: &mut Diagnostics,
    options: &ValidatorOptions,
    scene: &Map<String, Value>,
    path: &FieldPath,
) {
    match DialogueEncoding::detect(scene) {
        DialogueEncoding::Turns(turns) => validate_turns(diags, turns, path),
        DialogueEncoding::Messages(messages) => {
            if options.flag_legacy_encodings {
                diags.warn(
                    WarningKind::Deprecated,
                    path,
                    "Dialogue uses the legacy 'messages' encoding; prefer 'dialogue_turns'",
                );
            }
            validate_messages(diags, messages, path);
        }
        DialogueEncoding::Absent => diags.error(
            ErrorKind::Missing,
            path,
            "Dialogue scene must have either dialogue_turns or messages",
        ),
    }
}

fn validate_turns(diags: &mut Diagnostics, turns: &Value, path: &FieldPath) {
    let Some(turns) = expect_kind(diags, turns, "dialogue_turns", ValueKind::Array, path)
        .and_then(Value::as_array)
    else {
        return;
    };
    let turns_path = path.field("dialogue_turns");

    if turns.is_empty() {
        diags.warn(
            WarningKind::BestPractice,
            &turns_path,
            "Dialogue has no turns",
        );
    }

    for (i, turn) in turns.iter().enumerate() {
        let turn_path = turns_path.index(i);
        let Some(turn) = expect_entry(diags, turn, "Dialogue turn", &turn_path) else {
            continue;
        };
        for field in TURN_FIELDS {
            require_string(diags, turn, field, &turn_path);
        }
    }
}

fn validate_messages(diags: &mut Diagnostics, messages: &Value, path: &FieldPath) {
    let Some(messages) = expect_kind(diags, messages, "messages", ValueKind::Array, path)
        .and_then(Value::as_array)
    else {
        return;
    };
    let messages_path = path.field("messages");

    if messages.is_empty() {
        diags.error(
            ErrorKind::InvalidValue,
            &messages_path,
            "Dialogue must have at least one message",
        );
        return;
    }

    for (i, message) in messages.iter().enumerate() {
        let message_path = messages_path.index(i);
        if let Some(message) = expect_entry(diags, message, "Message", &message_path) {
            require_string(diags, message, "text", &message_path);
        }
    }
}
