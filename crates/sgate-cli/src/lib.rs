//! # sgate-cli: CLI Tool for the Manifest Gate
//!
//! Provides the `sgate` command-line interface used by content pipelines to
//! reject malformed training manifests before they are shipped to the game
//! engine.
//!
//! ## Subcommands
//!
//! - `sgate validate`: Validate manifest files, a directory tree, or stdin.
//! - `sgate languages`: Print the effective language allow-list.
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Every input is valid |
//! | 1 | At least one input is invalid (or has warnings under `--deny-warnings`) |
//! | 2 | Operational error: unreadable file, malformed JSON/YAML, bad config |
//!
//! ```bash
//! sgate validate manifests/safety-101.json
//! sgate validate --all manifests/ --format json --deny-warnings
//! cat scene.json | sgate validate --kind scene -
//! ```

pub mod languages;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use sgate_schema::ValidatorOptions;

/// Exit code: every input passed.
pub const EXIT_OK: u8 = 0;
/// Exit code: at least one input failed validation.
pub const EXIT_INVALID: u8 = 1;
/// Exit code: an input or the configuration could not be loaded.
pub const EXIT_ERROR: u8 = 2;

/// Resolve validator options from an optional configuration file.
///
/// Without a file the built-in defaults apply.
pub fn load_options(config: Option<&Path>) -> Result<ValidatorOptions> {
    match config {
        Some(path) => ValidatorOptions::from_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => Ok(ValidatorOptions::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_config_uses_defaults() {
        assert_eq!(load_options(None).unwrap(), ValidatorOptions::default());
    }

    #[test]
    fn yaml_config_overrides_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sgate.yaml");
        std::fs::write(&path, "supported_languages: [en, cy]\ncheck_references: true\n").unwrap();

        let options = load_options(Some(&path)).unwrap();
        assert!(options.supports_language("cy"));
        assert!(!options.supports_language("fr"));
        assert!(options.check_references);
        assert!(!options.flag_legacy_encodings);
    }

    #[test]
    fn missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_options(Some(&dir.path().join("absent.yaml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load configuration"));
    }

    #[test]
    fn unknown_config_key_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sgate.json");
        std::fs::write(&path, r#"{"strict": true}"#).unwrap();
        assert!(load_options(Some(&path)).is_err());
    }
}
