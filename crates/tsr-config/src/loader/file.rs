//! File-based configuration loading

use crate::error::{ConfigError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Name of the configuration file looked up in the base directory
pub const CONFIG_FILE_NAME: &str = "tsr.config.json";

/// Read the raw key map from `path`.
///
/// Returns `Ok(None)` when no file exists there. A file that exists but is
/// not valid JSON is a parse error; valid JSON whose root is not an object
/// is a schema error.
pub fn load_raw<P: AsRef<Path>>(path: P) -> Result<Option<Map<String, Value>>> {
    let path = path.as_ref();

    if !path.exists() {
        debug!(path = %path.display(), "no config file found");
        return Ok(None);
    }

    let content = fs::read(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(path = %path.display(), bytes = content.len(), "read config file");

    parse_with_path(&content, path.to_str()).map(Some)
}

/// Parse a config object from a JSON string
pub fn parse(content: &str) -> Result<Map<String, Value>> {
    parse_with_path(content.as_bytes(), None)
}

/// Parse a config object from raw JSON bytes with file path for better errors
///
/// Bytes that are not valid UTF-8 are malformed JSON and fail as a parse error.
pub fn parse_with_path(content: &[u8], path: Option<&str>) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_slice(content).map_err(|e| {
        ConfigError::from_json_error(e, &String::from_utf8_lossy(content), path)
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(ConfigError::invalid_type("(root)", "an object", &other)),
    }
}
