//! # Document Loading
//!
//! Turns manifest files into the untyped `serde_json::Value` the validator
//! consumes. JSON and YAML are both accepted; YAML is converted to the
//! equivalent JSON tree so that every downstream check sees one value model.
//!
//! Loading is the only fallible step. Once a value exists, validation is
//! total and reports problems through diagnostics rather than errors.

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

/// On-disk encoding of a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON text.
    Json,
    /// YAML text (JSON-compatible subset).
    Yaml,
}

impl DocumentFormat {
    /// Determine the format from a file extension. Anything that is not
    /// `.yaml`/`.yml` is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    /// Lowercase name for messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// Error while reading or decoding a document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be read.
    #[error("cannot read '{path}': {reason}")]
    Read {
        /// Path of the document.
        path: String,
        /// Underlying IO failure.
        reason: String,
    },

    /// The text is not well-formed in its declared format.
    #[error("invalid {format} in '{path}': {reason}")]
    Parse {
        /// Path (or `<input>` for inline text).
        path: String,
        /// Format the text was decoded as.
        format: &'static str,
        /// Decoder message.
        reason: String,
    },

    /// A configuration document decoded but does not describe valid options.
    #[error("invalid configuration in '{path}': {reason}")]
    Config {
        /// Path of the configuration file.
        path: String,
        /// Deserialization message.
        reason: String,
    },
}

/// Origin label used for text that did not come from a file.
const INLINE_ORIGIN: &str = "<input>";

/// Decode document text in the given format.
///
/// # Errors
///
/// Returns [`DocumentError::Parse`] if the text is not well-formed.
pub fn parse_document(content: &str, format: DocumentFormat) -> Result<Value, DocumentError> {
    decode(content, format, INLINE_ORIGIN)
}

/// Read and decode a document, choosing the format from its extension.
///
/// # Errors
///
/// Returns [`DocumentError::Read`] if the file cannot be read, or
/// [`DocumentError::Parse`] if its content is not well-formed.
pub fn load_document(path: &Path) -> Result<Value, DocumentError> {
    let content = std::fs::read_to_string(path).map_err(|e| DocumentError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let value = decode(
        &content,
        DocumentFormat::from_path(path),
        &path.display().to_string(),
    )?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded document");
    Ok(value)
}

fn decode(content: &str, format: DocumentFormat, origin: &str) -> Result<Value, DocumentError> {
    let parse_error = |reason: String| DocumentError::Parse {
        path: origin.to_string(),
        format: format.as_str(),
        reason,
    };

    match format {
        DocumentFormat::Json => {
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))
        }
        DocumentFormat::Yaml => {
            let yaml: serde_yaml::Value =
                serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            yaml_to_json_value(&yaml).map_err(parse_error)
        }
    }
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// The generator emits manifests as JSON, and YAML copies are hand-edited
/// renditions of the same document, so only the JSON-compatible subset of
/// YAML carries meaning for the validator. Tags are dropped and scalar map
/// keys are stringified. Null or collection keys and non-finite floats have
/// no JSON form and are parse errors.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, String> = seq.iter().map(yaml_to_json_value).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key type: {other:?}")),
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}
