//! Error types for configuration loading and validation

pub mod format;

use std::path::PathBuf;
use thiserror::Error;

pub use format::ErrorFormatter;

/// Result type for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Coarse error category, for callers that only need to branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The config file exists but is not valid JSON
    Parse,
    /// The merged input violates the schema
    Schema,
    /// The config file or working directory could not be read
    Io,
}

/// Errors that can occur during configuration resolution
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing error with context
    #[error("Failed to parse JSON configuration{location}:\n{message}\n{context}")]
    Parse {
        location: String,
        message: String,
        context: String,
    },

    /// Field holds a value of the wrong JSON type
    #[error("Invalid type for {field}: expected {expected}, found {found}")]
    InvalidType {
        field: String,
        expected: String,
        found: String,
    },

    /// Invalid enum value
    #[error("Invalid value '{value}' for {field}\n  Valid options: {options}\n  Hint: {hint}")]
    InvalidEnum {
        field: String,
        value: String,
        options: String,
        hint: String,
    },

    /// IO error
    #[error("Failed to read {path}\n{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Which category this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse { .. } => ErrorKind::Parse,
            Self::InvalidType { .. } | Self::InvalidEnum { .. } => ErrorKind::Schema,
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// Dotted path of the offending field, for schema errors
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidType { field, .. } | Self::InvalidEnum { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Create an invalid type error
    pub fn invalid_type(
        field: impl Into<String>,
        expected: impl Into<String>,
        found: &serde_json::Value,
    ) -> Self {
        Self::InvalidType {
            field: field.into(),
            expected: expected.into(),
            found: json_type_name(found).to_string(),
        }
    }

    /// Create an invalid enum error with a suggestion
    pub fn invalid_enum(
        field: impl Into<String>,
        value: impl Into<String>,
        options: &[&str],
    ) -> Self {
        let value = value.into();
        let hint = Self::suggest_option(&value, options);
        Self::InvalidEnum {
            field: field.into(),
            value,
            options: options.join(", "),
            hint,
        }
    }

    /// Create a parse error from serde_json::Error
    pub fn from_json_error(err: serde_json::Error, content: &str, path: Option<&str>) -> Self {
        let context = extract_json_context(&err, content);
        Self::Parse {
            location: path.map(|p| format!(" in {}", p)).unwrap_or_default(),
            message: err.to_string(),
            context,
        }
    }

    /// Simple string distance for option suggestions (Levenshtein-like)
    fn suggest_option(input: &str, options: &[&str]) -> String {
        let input_lower = input.to_lowercase();
        let closest = options
            .iter()
            .min_by_key(|opt| Self::distance(&input_lower, &opt.to_lowercase()));

        match closest {
            Some(opt) if Self::distance(&input_lower, &opt.to_lowercase()) <= 3 => {
                format!("Did you mean '{}'?", opt)
            }
            _ => format!("Use one of: {}", options.join(", ")),
        }
    }

    /// Edit distance between two strings
    fn distance(a: &str, b: &str) -> usize {
        let b_chars: Vec<char> = b.chars().collect();
        let mut prev_row: Vec<usize> = (0..=b_chars.len()).collect();

        for (i, a_char) in a.chars().enumerate() {
            let mut curr_row = vec![i + 1];
            for (j, b_char) in b_chars.iter().enumerate() {
                let cost = usize::from(a_char != *b_char);
                let best = (curr_row[j] + 1)
                    .min(prev_row[j + 1] + 1)
                    .min(prev_row[j] + cost);
                curr_row.push(best);
            }
            prev_row = curr_row;
        }

        prev_row.last().copied().unwrap_or(0)
    }
}

/// JSON type name as it appears in error messages
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Extract context from JSON error
fn extract_json_context(err: &serde_json::Error, content: &str) -> String {
    let line_num = err.line();
    let col_num = err.column();
    let lines: Vec<&str> = content.lines().collect();

    if line_num == 0 || line_num > lines.len() {
        return String::new();
    }

    let start = line_num.saturating_sub(2);
    let end = (line_num + 1).min(lines.len());

    lines[start..end]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let num = start + i + 1;
            if num == line_num {
                let mut result = format!("→ {:3} | {}", num, line);
                if col_num > 0 {
                    result.push_str(&format!("\n        {}^", " ".repeat(col_num - 1)));
                }
                result
            } else {
                format!("  {:3} | {}", num, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invalid_enum_suggests_close_option() {
        let err = ConfigError::invalid_enum("quoteStyle", "singel", &["single", "double"]);
        match err {
            ConfigError::InvalidEnum { hint, options, .. } => {
                assert_eq!(hint, "Did you mean 'single'?");
                assert_eq!(options, "single, double");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_enum_without_close_option() {
        let err = ConfigError::invalid_enum("quoteStyle", "backtick", &["single", "double"]);
        assert!(err.to_string().contains("Use one of: single, double"));
        assert_eq!(err.kind(), ErrorKind::Schema);
        assert_eq!(err.field(), Some("quoteStyle"));
    }

    #[test]
    fn test_invalid_type_names_json_type() {
        let err = ConfigError::invalid_type("semicolons", "a boolean", &json!("yes"));
        assert_eq!(
            err.to_string(),
            "Invalid type for semicolons: expected a boolean, found string"
        );
    }

    #[test]
    fn test_parse_error_context_points_at_line() {
        let content = "{\n  \"semicolons\": true,\n  oops\n}";
        let err = serde_json::from_str::<serde_json::Value>(content).unwrap_err();
        let err = ConfigError::from_json_error(err, content, Some("tsr.config.json"));
        assert_eq!(err.kind(), ErrorKind::Parse);
        let text = err.to_string();
        assert!(text.contains(" in tsr.config.json"));
        assert!(text.contains("→   3 |   oops"));
    }

    #[test]
    fn test_distance() {
        assert_eq!(ConfigError::distance("single", "single"), 0);
        assert_eq!(ConfigError::distance("dubble", "double"), 1);
        assert_eq!(ConfigError::distance("", "abc"), 3);
    }
}
