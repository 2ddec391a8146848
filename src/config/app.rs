// src/config/app.rs
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

use super::defaults::*;
use crate::batch::BatchOptions;
use crate::consts::{CONFIG_ENV_VAR, LOCAL_CONFIG_FILE, USER_CONFIG_DIR, USER_CONFIG_FILE};
use crate::core::{Result, Shift};
use crate::enums::Mode;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cipher: Cipher,
    pub batch: Batch,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Cipher {
    pub default_shift: Shift,
    pub default_mode: Mode,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Batch {
    pub input_extension: String,
    pub output_extension: String,
    pub manifest_name: String,
}

impl Default for Cipher {
    fn default() -> Self {
        default_cipher()
    }
}

impl Default for Batch {
    fn default() -> Self {
        default_batch()
    }
}

impl Config {
    /// Parse config text. Missing sections and fields take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Batch options seeded from this config
    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            input_extension: self.batch.input_extension.clone(),
            output_extension: self.batch.output_extension.clone(),
            shift: self.cipher.default_shift,
            mode: self.cipher.default_mode,
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Read and parse a config file without touching the global
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Config::from_toml_str(&content)
}

/// Pick the config file to read, in lookup order:
///
/// 1. `explicit` (the `CAESAR_TOOL_CONFIG` value), whether or not it exists
/// 2. `caesar-tool.toml` in `cwd`
/// 3. `caesar-tool/config.toml` under `config_dir`
///
/// `None` means no file applies and the built-in defaults are used.
pub fn locate_from(
    explicit: Option<PathBuf>,
    cwd: &Path,
    config_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return Some(path);
    }

    let local = cwd.join(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    config_dir
        .map(|dir| dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE))
        .filter(|path| path.is_file())
}

/// The config file `load` would read in the current process environment
pub fn config_path() -> Option<PathBuf> {
    locate_from(
        std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from),
        &std::env::current_dir().unwrap_or_default(),
        dirs::config_dir(),
    )
}

/// Read the located file, or fall back to defaults when there is none
pub fn load_located(location: Option<&Path>) -> Result<Config> {
    match location {
        Some(path) => {
            #[cfg(feature = "logging")]
            debug!("Loading config from {}", path.display());

            load_from(path)
        }
        None => {
            #[cfg(feature = "logging")]
            warn!("No caesar-tool config found, using built-in defaults");

            Ok(Config::default())
        }
    }
}

/// Load config once. An explicit `CAESAR_TOOL_CONFIG` path must exist and
/// parse; otherwise a missing file means built-in defaults.
pub fn load() -> Result<&'static Config> {
    if let Some(conf) = CONFIG.get() {
        return Ok(conf);
    }

    let conf = load_located(config_path().as_deref())?;
    Ok(CONFIG.get_or_init(|| conf))
}
