//! # Quiz Scene Validator
//!
//! Quizzes arrive in two encodings:
//!
//! - **questions** (rich): a `questions` list, each with `question_text` and
//!   `options`. An option's text lives under `text` or `option_text` (first
//!   match wins). Every question needs at least one option with
//!   `is_correct: true`.
//! - **flat** (legacy): a single `question` string and an `options` list of
//!   at least two entries. Options are not inspected further.
//!
//! The correctness rule applies to the rich encoding only.

use serde_json::{Map, Value};
use sgate_core::{Diagnostics, ErrorKind, FieldPath, ValueKind, WarningKind};

use crate::fields::{expect_entry, expect_kind, optional, require_array, require_string};
use crate::options::ValidatorOptions;

/// Synonymous option text fields, in priority order.
pub const OPTION_TEXT_FIELDS: &[&str] = &["text", "option_text"];

/// Minimum option count for the flat encoding.
pub const MIN_FLAT_OPTIONS: usize = 2;

/// The encoding a quiz scene uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuizEncoding<'a> {
    /// Rich encoding, `questions` present.
    Questions(&'a Value),
    /// Legacy flat `question`/`options` pair.
    Flat,
}

impl<'a> QuizEncoding<'a> {
    /// Resolve the encoding of `scene`, richest first.
    pub fn detect(scene: &'a Map<String, Value>) -> Self {
        match optional(scene, "questions") {
            Some(questions) => Self::Questions(questions),
            None => Self::Flat,
        }
    }
}

/// Validate the quiz payload of `scene`.
pub fn validate_quiz(
    diags: &mut Diagnostics,
    options: &ValidatorOptions,
    scene: &Map<String, Value>,
    path: &FieldPath,
) {
    match QuizEncoding::detect(scene) {
        QuizEncoding::Questions(questions) => validate_questions(diags, questions, path),
        QuizEncoding::Flat => {
            if options.flag_legacy_encodings {
                diags.warn(
                    WarningKind::Deprecated,
                    path,
                    "Quiz uses the legacy flat question encoding; prefer 'questions'",
                );
            }
            validate_flat(diags, scene, path);
        }
    }
}

fn validate_questions(diags: &mut Diagnostics, questions: &Value, path: &FieldPath) {
    let Some(questions) = expect_kind(diags, questions, "questions", ValueKind::Array, path)
        .and_then(Value::as_array)
    else {
        return;
    };
    let questions_path = path.field("questions");

    if questions.is_empty() {
        diags.warn(WarningKind::BestPractice, &questions_path, "Quiz has no questions");
    }

    for (i, question) in questions.iter().enumerate() {
        let question_path = questions_path.index(i);
        if let Some(question) = expect_entry(diags, question, "Question", &question_path) {
            validate_question(diags, question, &question_path);
        }
    }
}

fn validate_question(diags: &mut Diagnostics, question: &Map<String, Value>, path: &FieldPath) {
    require_string(diags, question, "question_text", path);
    let Some(options) = require_array(diags, question, "options", path) else {
        return;
    };
    let options_path = path.field("options");

    let mut has_correct = false;
    for (i, option) in options.iter().enumerate() {
        let option_path = options_path.index(i);
        let Some(option) = expect_entry(diags, option, "Option", &option_path) else {
            continue;
        };

        let text = OPTION_TEXT_FIELDS
            .iter()
            .find_map(|field| optional(option, field).map(|value| (*field, value)));
        match text {
            Some((field, value)) => {
                expect_kind(diags, value, field, ValueKind::String, &option_path);
            }
            None => diags.error(
                ErrorKind::Missing,
                &option_path.field("text"),
                "Option must have either text or option_text",
            ),
        }

        if option.get("is_correct") == Some(&Value::Bool(true)) {
            has_correct = true;
        }
    }

    // Whole-question invariant, evaluated after every option was scanned.
    if !has_correct {
        diags.error(
            ErrorKind::InvalidValue,
            path,
            "Question must have at least one correct option",
        );
    }
}

fn validate_flat(diags: &mut Diagnostics, scene: &Map<String, Value>, path: &FieldPath) {
    require_string(diags, scene, "question", path);
    if let Some(options) = require_array(diags, scene, "options", path) {
        if options.len() < MIN_FLAT_OPTIONS {
            diags.error(
                ErrorKind::InvalidValue,
                &path.field("options"),
                "Quiz must have at least two options",
            );
        }
    }
}
