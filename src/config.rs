//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::Result;
use crate::auth::KeyMatch;
use crate::error::Error;
use crate::store::PassStore;

/// Environment variable naming an alternative config file
pub const CONFIG_ENV: &str = "KUBE_PASS_AUTH_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Password store binary, a name on PATH or an absolute path
    #[serde(default = "default_pass_program")]
    pub pass_program: String,

    /// Passed to the store as PASSWORD_STORE_DIR when set
    #[serde(default)]
    pub password_store_dir: Option<PathBuf>,

    /// How secret keys are matched against lines
    #[serde(default)]
    pub key_match: KeyMatch,
}

fn default_pass_program() -> String {
    "pass".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pass_program: default_pass_program(),
            password_store_dir: None,
            key_match: KeyMatch::default(),
        }
    }
}

impl Config {
    /// Build the secret store this configuration describes
    pub fn store(&self) -> PassStore {
        let store = PassStore::new(&self.pass_program);
        match &self.password_store_dir {
            Some(dir) => store.with_store_dir(dir),
            None => store,
        }
    }
}

/// Get the config directory path
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kube-pass-auth")
}

/// Get the default config file path
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Load configuration.
///
/// An explicit path must exist. Without one, a missing default file yields
/// the defaults.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(Error::Config(format!("Config not found at {:?}", path)));
            }
            load_file(path)
        }
        None => {
            let path = config_path();
            if path.exists() {
                load_file(&path)
            } else {
                tracing::debug!("No config at {:?}, using defaults", path);
                Ok(Config::default())
            }
        }
    }
}

fn load_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&content)
        .map_err(|e| Error::Config(format!("Invalid config at {:?}: {}", path, e)))?;
    tracing::debug!("Loaded config from {:?}", path);
    Ok(config)
}
