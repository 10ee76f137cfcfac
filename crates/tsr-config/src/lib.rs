//! Configuration resolution for the route tree generator
//!
//! This crate turns three sources into one validated [`Config`]:
//! - Built-in defaults
//! - An optional `tsr.config.json` in the project directory
//! - Caller-supplied [`ConfigOverrides`], which win on every key they set
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use tsr_config::{resolve, ConfigOverrides, QuoteStyle};
//!
//! let overrides = ConfigOverrides::new().quote_style(QuoteStyle::Double);
//! let config = resolve(&overrides, Some(Path::new("./my-app")))?;
//!
//! println!("routes live in {}", config.routes_directory);
//! # Ok::<(), tsr_config::ConfigError>(())
//! ```

pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

pub use error::{ConfigError, ErrorFormatter, ErrorKind, Result};
pub use loader::{config_file_path, resolve, ConfigOverrides, ConfigResolver, CONFIG_FILE_NAME};
pub use types::{Config, QuoteStyle};
