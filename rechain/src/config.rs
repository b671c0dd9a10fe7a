use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config as config_rs;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "rechain.toml";
pub const ENV_DB_DIR: &str = "RECHAIN_DB_DIR";
pub const ENV_GENESIS_FILE: &str = "RECHAIN_GENESIS_FILE";

/// Layout of a node home directory. Relative paths are resolved against
/// `root_dir`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HomeConfig {
    #[serde(skip)]
    pub root_dir: PathBuf,
    pub db_dir: PathBuf,
    pub genesis_file: PathBuf,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            db_dir: PathBuf::from("data"),
            genesis_file: PathBuf::from("config").join("genesis.json"),
        }
    }
}

impl HomeConfig {
    pub fn config_path(home: &Path) -> PathBuf {
        home.join("config").join(CONFIG_FILE)
    }

    /// Defaults, then `<home>/config/rechain.toml` if present, then the
    /// environment.
    pub fn load(home: &Path) -> Result<Self> {
        let path = Self::config_path(home);
        let mut cfg = if path.is_file() {
            Self::load_from_file(&path)?
        } else {
            Self::default()
        };
        cfg.root_dir = home.to_path_buf();
        Ok(cfg.merge_with_env())
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let cfg = config_rs::Config::builder()
            .add_source(config_rs::File::from(path).format(config_rs::FileFormat::Toml))
            .build()
            .with_context(|| format!("failed to load config file: {}", path.display()))?;

        cfg.try_deserialize::<HomeConfig>()
            .with_context(|| format!("failed to deserialize config: {}", path.display()))
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config parent directory: {}", parent.display())
            })?;
        }
        let out = toml::to_string_pretty(self).context("failed to serialize config as toml")?;
        std::fs::write(path, out)
            .with_context(|| format!("failed to write config file: {}", path.display()))?;
        Ok(())
    }

    pub fn merge_with_env(self) -> Self {
        self.merge_with_vars(|key| std::env::var(key).ok())
    }

    pub fn merge_with_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup(ENV_DB_DIR).filter(|v| !v.is_empty()) {
            self.db_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup(ENV_GENESIS_FILE).filter(|v| !v.is_empty()) {
            self.genesis_file = PathBuf::from(v);
        }
        self
    }

    pub fn db_dir(&self) -> PathBuf {
        self.resolve(&self.db_dir)
    }

    pub fn state_db_path(&self) -> PathBuf {
        self.db_dir().join("state.db")
    }

    pub fn genesis_path(&self) -> PathBuf {
        self.resolve(&self.genesis_file)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root_dir.join(path)
        }
    }
}
