//! Caller-supplied configuration overrides
//!
//! Overrides are kept as raw JSON until resolution so that they go through
//! the same schema pass as the config file. The typed setters can only
//! produce valid values; [`ConfigOverrides::set`] and
//! [`ConfigOverrides::from_value`] accept anything and are checked later.

use crate::error::{ConfigError, Result};
use crate::types::QuoteStyle;
use serde_json::{Map, Value};

/// Partial configuration layered on top of the config file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    values: Map<String, Value>,
}

impl ConfigOverrides {
    /// Empty overrides: resolution uses the file and defaults only
    pub fn new() -> Self {
        Self::default()
    }

    /// Build overrides from a JSON object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(ConfigError::invalid_type("(root)", "an object", &other)),
        }
    }

    /// Set a raw value by its camelCase key
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Drop a previously set key
    pub fn unset(mut self, key: &str) -> Self {
        self.values.remove(key);
        self
    }

    pub fn route_file_prefix(self, prefix: impl Into<String>) -> Self {
        self.set("routeFilePrefix", prefix.into())
    }

    pub fn route_file_ignore_prefix(self, prefix: impl Into<String>) -> Self {
        self.set("routeFileIgnorePrefix", prefix.into())
    }

    pub fn route_file_ignore_pattern(self, pattern: impl Into<String>) -> Self {
        self.set("routeFileIgnorePattern", pattern.into())
    }

    pub fn routes_directory(self, dir: impl Into<String>) -> Self {
        self.set("routesDirectory", dir.into())
    }

    pub fn generated_route_tree(self, path: impl Into<String>) -> Self {
        self.set("generatedRouteTree", path.into())
    }

    pub fn quote_style(self, style: QuoteStyle) -> Self {
        self.set("quoteStyle", style.as_str())
    }

    pub fn semicolons(self, enabled: bool) -> Self {
        self.set("semicolons", enabled)
    }

    pub fn disable_types(self, disabled: bool) -> Self {
        self.set("disableTypes", disabled)
    }

    pub fn add_extensions(self, enabled: bool) -> Self {
        self.set("addExtensions", enabled)
    }

    pub fn disable_logging(self, disabled: bool) -> Self {
        self.set("disableLogging", disabled)
    }

    pub fn route_tree_file_header<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set("routeTreeFileHeader", string_array(lines))
    }

    pub fn route_tree_file_footer<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set("routeTreeFileFooter", string_array(lines))
    }

    /// Raw override values
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Map<String, Value>> for ConfigOverrides {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

fn string_array<I, S>(lines: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Value::Array(lines.into_iter().map(|s| Value::String(s.into())).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_typed_setters_use_schema_keys() {
        let overrides = ConfigOverrides::new()
            .quote_style(QuoteStyle::Double)
            .semicolons(true)
            .route_tree_file_footer(["// end"]);

        assert_eq!(
            Value::Object(overrides.as_map().clone()),
            json!({
                "quoteStyle": "double",
                "semicolons": true,
                "routeTreeFileFooter": ["// end"],
            })
        );
    }

    #[test]
    fn test_from_value_requires_object() {
        assert!(ConfigOverrides::from_value(json!({ "semicolons": true })).is_ok());
        assert!(ConfigOverrides::from_value(json!([true])).is_err());
    }

    #[test]
    fn test_unset() {
        let overrides = ConfigOverrides::new().semicolons(true).unset("semicolons");
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_empty_header_is_explicit() {
        let overrides = ConfigOverrides::new().route_tree_file_header(Vec::<String>::new());
        assert_eq!(overrides.as_map()["routeTreeFileHeader"], json!([]));
    }
}
