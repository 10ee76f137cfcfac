//! Configuration resolution
//!
//! Sources are layered with the following precedence:
//! defaults < `tsr.config.json` < caller overrides

pub mod file;
pub mod merge;
pub mod overrides;

pub use file::CONFIG_FILE_NAME;
pub use overrides::ConfigOverrides;

use crate::error::{ConfigError, Result};
use crate::{validation, Config};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path of the config file inside `base_directory`
pub fn config_file_path<P: AsRef<Path>>(base_directory: P) -> PathBuf {
    base_directory.as_ref().join(CONFIG_FILE_NAME)
}

/// Resolve the effective configuration.
///
/// Looks for `tsr.config.json` in `base_directory`, or in the current
/// working directory when `None`. A missing file is not an error.
pub fn resolve(overrides: &ConfigOverrides, base_directory: Option<&Path>) -> Result<Config> {
    let base = match base_directory {
        Some(dir) => absolutize(dir)?,
        None => current_dir()?,
    };
    let path = config_file_path(&base);

    let source = match file::load_raw(&path)? {
        Some(from_file) => merge::merge(from_file, overrides.as_map()),
        None => overrides.as_map().clone(),
    };

    let mut config = validation::validate(&source)?;

    if config.apply_derived_fields() {
        debug!(
            generated_route_tree = %config.generated_route_tree,
            "types disabled, rewrote route tree extension"
        );
    }

    Ok(config)
}

/// Builder-style entry point for [`resolve`]
///
/// # Example
///
/// ```no_run
/// use tsr_config::{ConfigOverrides, ConfigResolver};
///
/// let config = ConfigResolver::new()
///     .with_base_directory("./my-app")
///     .resolve(&ConfigOverrides::new().semicolons(true))?;
/// assert!(config.semicolons);
/// # Ok::<(), tsr_config::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    base_directory: Option<PathBuf>,
}

impl ConfigResolver {
    /// Resolver rooted at the current working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Look for the config file in `dir` instead of the working directory
    pub fn with_base_directory<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.base_directory = Some(dir.as_ref().to_path_buf());
        self
    }

    /// The config file this resolver will consult
    pub fn config_path(&self) -> Result<PathBuf> {
        let base = match &self.base_directory {
            Some(dir) => absolutize(dir)?,
            None => current_dir()?,
        };
        Ok(config_file_path(base))
    }

    pub fn resolve(&self, overrides: &ConfigOverrides) -> Result<Config> {
        resolve(overrides, self.base_directory.as_deref())
    }
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| ConfigError::Io {
        path: PathBuf::from("."),
        source: e,
    })
}

/// Relative directories are taken relative to the working directory
fn absolutize(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        Ok(dir.to_path_buf())
    } else {
        Ok(current_dir()?.join(dir))
    }
}
