//! # Validate Subcommand
//!
//! Validates manifests (or bare scene payloads) from files, a directory
//! tree, or stdin, and prints a text or JSON report.
//!
//! ## Security Invariant
//!
//! Manifests are produced by a generative model and are untrusted. Every
//! manifest must pass this gate before it is shipped to the game engine; a
//! non-zero exit code blocks the pipeline step.

use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;
use serde_json::Value;

use sgate_core::ValidationResult;
use sgate_schema::{
    load_document, parse_document, DocumentFormat, ManifestValidator, ValidatorOptions,
};

use crate::{EXIT_ERROR, EXIT_INVALID, EXIT_OK};

/// Source name used for stdin in reports.
const STDIN_SOURCE: &str = "<stdin>";

/// File extensions discovered by `--all`.
const MANIFEST_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// What each input is validated as.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// A complete manifest.
    Manifest,
    /// A single scene object.
    Scene,
    /// A bare quiz payload.
    Quiz,
    /// A bare dialogue payload.
    Dialogue,
}

/// Report encoding.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `OK:`/`FAIL:` line per input followed by its diagnostics.
    Text,
    /// A JSON array with one entry per input.
    Json,
}

/// Arguments for the `sgate validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Files to validate. Use `-` to read JSON from stdin.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Validate every .json, .yaml and .yml file under DIR.
    #[arg(long, value_name = "DIR")]
    pub all: Option<PathBuf>,

    /// Validate inputs as this kind of content.
    #[arg(long, value_enum, default_value_t = ContentKind::Manifest)]
    pub kind: ContentKind,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Treat warnings as failures.
    #[arg(long)]
    pub deny_warnings: bool,

    /// Warn about duplicate scene ids and dangling navigation targets.
    #[arg(long)]
    pub check_references: bool,

    /// Warn about legacy dialogue and quiz encodings.
    #[arg(long)]
    pub flag_legacy: bool,
}

/// Outcome for one input.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// File path, or `<stdin>`.
    pub source: String,
    /// Validation result, when the input could be loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ValidationResult>,
    /// Load failure, when it could not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    fn passed(&self, deny_warnings: bool) -> bool {
        match &self.result {
            Some(result) => result.is_valid() && !(deny_warnings && !result.warnings().is_empty()),
            None => false,
        }
    }
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when every input passes, 1 on validation failure,
/// 2 when an input could not be loaded.
pub fn run_validate(args: &ValidateArgs, options: &ValidatorOptions) -> Result<u8> {
    let reports = collect_reports(args, options)?;

    match args.format {
        OutputFormat::Text => print_text(&reports, args.deny_warnings),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&reports).context("failed to encode report")?;
            println!("{json}");
        }
    }

    Ok(exit_code(&reports, args.deny_warnings))
}

/// Load and validate every input named by `args`, in order.
///
/// Load failures are recorded in the report rather than aborting the run.
///
/// # Errors
///
/// Fails when no input was given, when `-` is given more than once, or when
/// `--all` does not name a directory.
pub fn collect_reports(
    args: &ValidateArgs,
    options: &ValidatorOptions,
) -> Result<Vec<FileReport>> {
    let validator = ManifestValidator::new(effective_options(args, options));

    if args.paths.iter().filter(|p| is_stdin(p)).count() > 1 {
        bail!("stdin ('-') can only be validated once per run");
    }

    let mut sources = args.paths.clone();
    if let Some(dir) = &args.all {
        if !dir.is_dir() {
            bail!("--all expects a directory, got {}", dir.display());
        }
        let found = find_manifest_files(dir);
        tracing::info!(dir = %dir.display(), count = found.len(), "discovered manifest files");
        sources.extend(found);
    }

    if sources.is_empty() {
        bail!("nothing to validate; pass PATH, '-' or --all DIR");
    }

    let reports = sources
        .iter()
        .map(|source| {
            let name = source_name(source);
            match read_source(source) {
                Ok(document) => FileReport {
                    source: name,
                    result: Some(validate_as(&validator, args.kind, &document)),
                    error: None,
                },
                Err(e) => FileReport {
                    source: name,
                    result: None,
                    error: Some(format!("{e:#}")),
                },
            }
        })
        .collect();

    Ok(reports)
}

/// Exit code for a finished run. Load failures outrank validation failures.
pub fn exit_code(reports: &[FileReport], deny_warnings: bool) -> u8 {
    if reports.iter().any(|r| r.error.is_some()) {
        EXIT_ERROR
    } else if reports.iter().all(|r| r.passed(deny_warnings)) {
        EXIT_OK
    } else {
        EXIT_INVALID
    }
}

/// Command-line flags can only switch extra warnings on.
fn effective_options(args: &ValidateArgs, options: &ValidatorOptions) -> ValidatorOptions {
    let mut options = options.clone();
    options.check_references |= args.check_references;
    options.flag_legacy_encodings |= args.flag_legacy;
    options
}

fn validate_as(
    validator: &ManifestValidator,
    kind: ContentKind,
    document: &Value,
) -> ValidationResult {
    match kind {
        ContentKind::Manifest => validator.validate_manifest(document),
        ContentKind::Scene => validator.validate_scene(document),
        ContentKind::Quiz => validator.validate_quiz(document),
        ContentKind::Dialogue => validator.validate_dialogue(document),
    }
}

fn is_stdin(source: &Path) -> bool {
    source.as_os_str() == "-"
}

fn source_name(source: &Path) -> String {
    if is_stdin(source) {
        STDIN_SOURCE.to_string()
    } else {
        source.display().to_string()
    }
}

fn read_source(source: &Path) -> Result<Value> {
    if is_stdin(source) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read stdin")?;
        return Ok(parse_document(&content, DocumentFormat::Json)?);
    }
    Ok(load_document(source)?)
}

/// Headline for one report: `OK:`, `FAIL:` or `ERROR:` followed by the source.
fn status_line(report: &FileReport, deny_warnings: bool) -> String {
    match (&report.result, &report.error) {
        (_, Some(error)) => format!("ERROR: {}: {error}", report.source),
        (Some(_), None) if report.passed(deny_warnings) => format!("OK: {}", report.source),
        (Some(result), None) if result.is_valid() => format!(
            "FAIL: {} ({} warning(s) denied)",
            report.source,
            result.warnings().len()
        ),
        (Some(result), None) => {
            format!("FAIL: {} ({} error(s))", report.source, result.errors().len())
        }
        (None, None) => format!("ERROR: {}: no result", report.source),
    }
}

fn print_text(reports: &[FileReport], deny_warnings: bool) {
    let mut passed = 0usize;

    for report in reports {
        println!("{}", status_line(report, deny_warnings));
        if report.passed(deny_warnings) {
            passed += 1;
        }
        if let Some(result) = &report.result {
            for error in result.errors() {
                println!("{error}");
            }
            for warning in result.warnings() {
                println!("{warning}");
            }
        }
    }

    if reports.len() > 1 {
        println!("Manifests: {}/{} passed", passed, reports.len());
    }
}

/// Recursively find manifest files (by extension) under a directory.
pub fn find_manifest_files(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    let mut visited = HashSet::new();
    walk_for_manifests(dir, &mut results, &mut visited);
    results.sort();
    results
}

/// Symlinked directories are followed, but each real directory is read once.
fn walk_for_manifests(dir: &Path, acc: &mut Vec<PathBuf>, visited: &mut HashSet<PathBuf>) {
    let canonical = match std::fs::canonicalize(dir) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(
                dir = %dir.display(),
                error = %e,
                "failed to resolve directory during file walk"
            );
            return;
        }
    };
    if !visited.insert(canonical) {
        tracing::debug!(dir = %dir.display(), "skipping already visited directory");
        return;
    }

    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            tracing::warn!(
                dir = %dir.display(),
                error = %e,
                "failed to read directory during file walk"
            );
            return;
        }
    };
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                continue;
            }
        };
        let path = entry.path();
        if path.is_dir() {
            walk_for_manifests(&path, acc, visited);
        } else if has_manifest_extension(&path) {
            acc.push(path);
        }
    }
}

fn has_manifest_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| MANIFEST_EXTENSIONS.contains(&ext))
}
