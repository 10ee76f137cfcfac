//! Schema validation for merged configuration input
//!
//! Validation and defaulting happen in one pass: starting from
//! [`Config::default`], every recognized key present in the input is
//! type-checked and assigned, absent keys keep their default, and unknown
//! keys are dropped. A key that is present but malformed (including an
//! explicit `null`) is always an error, never a fallback to the default.

use crate::error::{ConfigError, Result};
use crate::types::{Config, QuoteStyle};
use serde_json::{Map, Value};
use tracing::trace;

/// Validate a raw key map against the schema, applying defaults
pub fn validate(input: &Map<String, Value>) -> Result<Config> {
    let mut config = Config::default();

    for (key, value) in input {
        apply_field(&mut config, key, value)?;
    }

    Ok(config)
}

/// Check a single key and assign it onto `config`
fn apply_field(config: &mut Config, key: &str, value: &Value) -> Result<()> {
    match key {
        "routeFilePrefix" => config.route_file_prefix = Some(expect_string(key, value)?),
        "routeFileIgnorePrefix" => {
            config.route_file_ignore_prefix = Some(expect_string(key, value)?)
        }
        "routeFileIgnorePattern" => {
            config.route_file_ignore_pattern = Some(expect_string(key, value)?)
        }
        "routesDirectory" => config.routes_directory = expect_string(key, value)?,
        "generatedRouteTree" => config.generated_route_tree = expect_string(key, value)?,
        "quoteStyle" => config.quote_style = expect_quote_style(key, value)?,
        "semicolons" => config.semicolons = expect_bool(key, value)?,
        "disableTypes" => config.disable_types = expect_bool(key, value)?,
        "addExtensions" => config.add_extensions = expect_bool(key, value)?,
        "disableLogging" => config.disable_logging = expect_bool(key, value)?,
        "routeTreeFileHeader" => config.route_tree_file_header = expect_string_array(key, value)?,
        "routeTreeFileFooter" => config.route_tree_file_footer = expect_string_array(key, value)?,
        unknown => trace!(key = unknown, "ignoring unrecognized config key"),
    }
    Ok(())
}

/// Helper to require a JSON string
pub fn expect_string(field: &str, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ConfigError::invalid_type(field, "a string", value))
}

/// Helper to require a JSON boolean
pub fn expect_bool(field: &str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| ConfigError::invalid_type(field, "a boolean", value))
}

/// Helper to require an array whose elements are all strings
///
/// Element failures are reported as `field[index]`.
pub fn expect_string_array(field: &str, value: &Value) -> Result<Vec<String>> {
    let items = value
        .as_array()
        .ok_or_else(|| ConfigError::invalid_type(field, "an array of strings", value))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| expect_string(&format!("{}[{}]", field, i), item))
        .collect()
}

/// Helper to require one of the [`QuoteStyle`] names
pub fn expect_quote_style(field: &str, value: &Value) -> Result<QuoteStyle> {
    let expected = format!("one of {}", QuoteStyle::VARIANTS.join(", "));
    let name = value
        .as_str()
        .ok_or_else(|| ConfigError::invalid_type(field, expected, value))?;

    QuoteStyle::from_name(name)
        .ok_or_else(|| ConfigError::invalid_enum(field, name, &QuoteStyle::VARIANTS))
}
