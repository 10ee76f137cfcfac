//! Configuration type definitions
//!
//! [`Config`] is the resolved settings record handed to the route tree
//! generator. Field names serialize in camelCase, matching `tsr.config.json`.

pub mod quote;

pub use quote::QuoteStyle;

use serde::Serialize;

/// Default value of `routeFileIgnorePrefix`
pub const DEFAULT_ROUTE_FILE_IGNORE_PREFIX: &str = "-";

/// Default value of `routesDirectory`
pub const DEFAULT_ROUTES_DIRECTORY: &str = "./src/routes";

/// Default value of `generatedRouteTree`
pub const DEFAULT_GENERATED_ROUTE_TREE: &str = "./src/routeTree.gen.ts";

/// Default lines written at the top of the generated route tree
pub const DEFAULT_ROUTE_TREE_FILE_HEADER: [&str; 4] = [
    "/* prettier-ignore-start */",
    "/* eslint-disable */",
    "// @ts-nocheck",
    "// noinspection JSUnusedGlobalSymbols",
];

/// Default lines written at the bottom of the generated route tree
pub const DEFAULT_ROUTE_TREE_FILE_FOOTER: [&str; 1] = ["/* prettier-ignore-end */"];

/// Resolved route generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Only files starting with this prefix are treated as routes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_file_prefix: Option<String>,

    /// Files and directories starting with this prefix are skipped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_file_ignore_prefix: Option<String>,

    /// Regex source; matching route files are skipped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_file_ignore_pattern: Option<String>,

    pub routes_directory: String,

    /// Output path of the generated route tree
    pub generated_route_tree: String,

    pub quote_style: QuoteStyle,

    pub semicolons: bool,

    /// Emit plain JavaScript; forces a `.js` extension on `generated_route_tree`
    pub disable_types: bool,

    /// Keep file extensions in generated import specifiers
    pub add_extensions: bool,

    pub disable_logging: bool,

    pub route_tree_file_header: Vec<String>,

    pub route_tree_file_footer: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            route_file_prefix: None,
            route_file_ignore_prefix: Some(DEFAULT_ROUTE_FILE_IGNORE_PREFIX.to_string()),
            route_file_ignore_pattern: None,
            routes_directory: DEFAULT_ROUTES_DIRECTORY.to_string(),
            generated_route_tree: DEFAULT_GENERATED_ROUTE_TREE.to_string(),
            quote_style: QuoteStyle::default(),
            semicolons: false,
            disable_types: false,
            add_extensions: false,
            disable_logging: false,
            route_tree_file_header: to_owned_lines(&DEFAULT_ROUTE_TREE_FILE_HEADER),
            route_tree_file_footer: to_owned_lines(&DEFAULT_ROUTE_TREE_FILE_FOOTER),
        }
    }
}

impl Config {
    /// Recompute fields derived from other fields.
    ///
    /// With `disable_types` set, a trailing `.ts` or `.tsx` on
    /// `generated_route_tree` becomes `.js`. Returns whether anything changed;
    /// calling it again is a no-op.
    pub fn apply_derived_fields(&mut self) -> bool {
        if !self.disable_types {
            return false;
        }

        let stem = self
            .generated_route_tree
            .strip_suffix(".tsx")
            .or_else(|| self.generated_route_tree.strip_suffix(".ts"));

        match stem {
            Some(stem) => {
                self.generated_route_tree = format!("{stem}.js");
                true
            }
            None => false,
        }
    }

    /// Serialize to pretty-printed JSON in `tsr.config.json` shape
    pub fn to_json_pretty(&self) -> String {
        // Only strings, bools and a unit enum: serialization is infallible.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

fn to_owned_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.route_file_prefix, None);
        assert_eq!(config.route_file_ignore_prefix.as_deref(), Some("-"));
        assert_eq!(config.route_file_ignore_pattern, None);
        assert_eq!(config.routes_directory, "./src/routes");
        assert_eq!(config.generated_route_tree, "./src/routeTree.gen.ts");
        assert_eq!(config.quote_style, QuoteStyle::Single);
        assert!(!config.semicolons);
        assert!(!config.disable_types);
        assert!(!config.add_extensions);
        assert!(!config.disable_logging);
        assert_eq!(config.route_tree_file_header.len(), 4);
        assert_eq!(
            config.route_tree_file_footer,
            vec!["/* prettier-ignore-end */".to_string()]
        );
    }

    #[test]
    fn test_derived_fields_untouched_with_types() {
        let mut config = Config::default();
        assert!(!config.apply_derived_fields());
        assert_eq!(config.generated_route_tree, "./src/routeTree.gen.ts");
    }

    #[test]
    fn test_derived_fields_rewrite_ts_and_tsx() {
        let mut config = Config {
            disable_types: true,
            ..Default::default()
        };
        assert!(config.apply_derived_fields());
        assert_eq!(config.generated_route_tree, "./src/routeTree.gen.js");

        config.generated_route_tree = "./app/tree.tsx".to_string();
        assert!(config.apply_derived_fields());
        assert_eq!(config.generated_route_tree, "./app/tree.js");
    }

    #[test]
    fn test_derived_fields_idempotent() {
        let mut config = Config {
            disable_types: true,
            generated_route_tree: "./x.ts".to_string(),
            ..Default::default()
        };
        config.apply_derived_fields();
        assert!(!config.apply_derived_fields());
        assert_eq!(config.generated_route_tree, "./x.js");
    }

    #[test]
    fn test_derived_fields_only_match_suffix() {
        let mut config = Config {
            disable_types: true,
            generated_route_tree: "./ts/tree.mts".to_string(),
            ..Default::default()
        };
        assert!(!config.apply_derived_fields());
        assert_eq!(config.generated_route_tree, "./ts/tree.mts");
    }

    #[test]
    fn test_serialize_camel_case_skips_absent_optionals() {
        let value = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(value["quoteStyle"], json!("single"));
        assert_eq!(value["routeFileIgnorePrefix"], json!("-"));
        assert!(value.get("routeFilePrefix").is_none());
        assert!(value.get("route_file_prefix").is_none());
    }
}
