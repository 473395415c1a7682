//! Document metadata as handed over by the host.
//!
//! Metadata is a loosely typed, order-preserving map. Values of recognized
//! keys are narrowed to [`MetaValue`] on entry; every other key is left alone.

use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Order-preserving metadata map (serde_json `preserve_order`).
pub type Metadata = serde_json::Map<String, Value>;

/// Metadata key holding the header fragments after injection.
pub const HEADER_ASSETS_KEY: &str = "header_assets";
/// Metadata key holding the footer fragments after injection.
pub const FOOTER_ASSETS_KEY: &str = "footer_assets";

#[derive(Debug, Error)]
pub enum MetaError {
    #[error("`{key}` must be a string or a list of strings, found {found}")]
    InvalidValue { key: String, found: &'static str },

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Metadata JSON parsing error")]
    Json(#[from] serde_json::Error),

    #[error("Metadata TOML parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported metadata format `{0}` (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),
}

/// Value of a recognized tag: one string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue<'a> {
    Single(&'a str),
    List(Vec<&'a str>),
}

impl<'a> MetaValue<'a> {
    /// Narrow a raw metadata value belonging to `key`.
    pub fn from_json(key: &str, value: &'a Value) -> Result<Self, MetaError> {
        match value {
            Value::String(s) => Ok(Self::Single(s)),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().ok_or_else(|| invalid(key, item)))
                .collect::<Result<_, _>>()
                .map(Self::List),
            other => Err(invalid(key, other)),
        }
    }

    /// Items in order; a single string becomes a one-element list.
    pub fn into_items(self) -> Vec<&'a str> {
        match self {
            Self::Single(s) => vec![s],
            Self::List(items) => items,
        }
    }
}

fn invalid(key: &str, value: &Value) -> MetaError {
    MetaError::InvalidValue {
        key: key.to_owned(),
        found: type_name(value),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list containing non-strings",
        Value::Object(_) => "a table",
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Parse metadata from a JSON object string.
pub fn from_json_str(content: &str) -> Result<Metadata, MetaError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse metadata from a TOML document string.
pub fn from_toml_str(content: &str) -> Result<Metadata, MetaError> {
    Ok(toml::from_str(content)?)
}

/// Load a metadata file, picking the format from its extension.
pub fn from_path(path: &Path) -> Result<Metadata, MetaError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let read = || fs::read_to_string(path).map_err(|err| MetaError::Io(path.to_path_buf(), err));

    match ext.as_deref() {
        Some("json") => from_json_str(&read()?),
        Some("toml") => from_toml_str(&read()?),
        _ => Err(MetaError::UnsupportedFormat(path.to_path_buf())),
    }
}
