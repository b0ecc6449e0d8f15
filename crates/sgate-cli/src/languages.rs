//! # Languages Subcommand
//!
//! Prints the language codes `metadata.language` may use without a warning,
//! after the configuration file has been applied.

use anyhow::Result;
use sgate_schema::ValidatorOptions;

/// Execute the languages subcommand. Always succeeds.
pub fn run_languages(options: &ValidatorOptions) -> Result<u8> {
    for code in &options.supported_languages {
        println!("{code}");
    }
    tracing::info!(count = options.supported_languages.len(), "listed supported languages");
    Ok(crate::EXIT_OK)
}
