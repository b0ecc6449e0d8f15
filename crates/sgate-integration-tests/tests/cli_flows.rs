//! # CLI Flows
//!
//! Drives the `sgate validate` handlers over real files on disk, the way a
//! content pipeline step invokes them, and checks the exit-code contract.

use std::path::{Path, PathBuf};

use sgate_cli::validate::{
    collect_reports, exit_code, run_validate, ContentKind, OutputFormat, ValidateArgs,
};
use sgate_cli::{load_options, EXIT_ERROR, EXIT_INVALID, EXIT_OK};

const GOOD_JSON: &str = r#"{
  "gameId": "ladder-safety",
  "version": "1.0.0",
  "metadata": {
    "title": "Ladder Safety",
    "description": "Three points of contact, always.",
    "duration": "3 minutes",
    "targetAudience": "maintenance crew",
    "language": "en"
  },
  "scenes": [
    {
      "id": "s1",
      "type": "dialogue",
      "messages": [{"text": "Grab the ladder."}],
      "navigation": {"next": "s2"}
    },
    {
      "id": "s2",
      "type": "quiz",
      "question": "How many points of contact?",
      "options": ["Two", "Three"],
      "navigation": {"next": "end"}
    }
  ]
}"#;

const GOOD_YAML: &str = r#"
gameId: ladder-safety
version: "1.0.1"
metadata:
  title: Ladder Safety
  description: Three points of contact, always.
  duration: 3 minutes
  targetAudience: maintenance crew
  language: fr
scenes:
  - id: s1
    type: summary
    navigation:
      next: s9
"#;

const BAD_JSON: &str = r#"{"gameId": "x", "version": "1", "metadata": {}, "scenes": []}"#;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

fn args() -> ValidateArgs {
    ValidateArgs {
        paths: Vec::new(),
        all: None,
        kind: ContentKind::Manifest,
        format: OutputFormat::Text,
        deny_warnings: false,
        check_references: false,
        flag_legacy: false,
    }
}

#[test]
fn directory_of_valid_manifests_passes() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a/ladder.json", GOOD_JSON);
    write(dir.path(), "b/ladder.yaml", GOOD_YAML);
    write(dir.path(), "README.md", "# not a manifest");

    let mut a = args();
    a.all = Some(dir.path().to_path_buf());
    let reports = collect_reports(&a, &load_options(None).unwrap()).unwrap();
    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.result.as_ref().is_some_and(|r| r.is_valid())));
    assert_eq!(exit_code(&reports, false), EXIT_OK);
}

#[test]
fn one_invalid_manifest_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let good = write(dir.path(), "good.json", GOOD_JSON);
    let bad = write(dir.path(), "bad.json", BAD_JSON);

    let mut a = args();
    a.paths = vec![good, bad];
    a.format = OutputFormat::Json;
    assert_eq!(run_validate(&a, &load_options(None).unwrap()).unwrap(), EXIT_INVALID);
}

#[test]
fn unreadable_input_is_operational_error() {
    let dir = tempfile::tempdir().unwrap();
    let bad = write(dir.path(), "broken.yaml", "scenes: [");

    let mut a = args();
    a.paths = vec![bad, dir.path().join("missing.json")];
    let reports = collect_reports(&a, &load_options(None).unwrap()).unwrap();
    assert!(reports.iter().all(|r| r.error.is_some()));
    assert_eq!(exit_code(&reports, false), EXIT_ERROR);
}

#[test]
fn config_file_shapes_warnings() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write(dir.path(), "ladder.yaml", GOOD_YAML);

    // Defaults: French is supported and references are not checked.
    let mut a = args();
    a.paths = vec![manifest];
    a.deny_warnings = true;
    assert_eq!(run_validate(&a, &load_options(None).unwrap()).unwrap(), EXIT_OK);

    // An English-only allow-list turns `fr` into a warning, denied here.
    let config = write(dir.path(), "sgate.yaml", "supported_languages: [en]\n");
    let options = load_options(Some(&config)).unwrap();
    assert_eq!(run_validate(&a, &options).unwrap(), EXIT_INVALID);
}

#[test]
fn check_references_flag_reports_dangling_target() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write(dir.path(), "ladder.yaml", GOOD_YAML);

    let mut a = args();
    a.paths = vec![manifest];
    a.check_references = true;
    let reports = collect_reports(&a, &load_options(None).unwrap()).unwrap();
    let result = reports[0].result.as_ref().unwrap();
    assert!(result.is_valid());
    assert_eq!(result.warnings_at("scenes[0].navigation.next").count(), 1);
}

#[test]
fn flag_legacy_marks_both_legacy_scenes() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write(dir.path(), "ladder.json", GOOD_JSON);

    let mut a = args();
    a.paths = vec![manifest];
    a.flag_legacy = true;
    let reports = collect_reports(&a, &load_options(None).unwrap()).unwrap();
    let result = reports[0].result.as_ref().unwrap();
    assert_eq!(result.warnings().len(), 2);
    assert_eq!(exit_code(&reports, true), EXIT_INVALID);
}
