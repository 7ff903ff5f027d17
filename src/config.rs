use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:4221";

/// Process-wide settings, resolved once before the listener starts.
///
/// Sources, lowest precedence first: built-in defaults, a YAML file named by
/// `COURIER_CONFIG`, the `LISTEN` / `DIRECTORY` env vars, then CLI flags via
/// [`Config::with_overrides`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub listen_addr: String,
    /// Root for `/files/<name>`
    pub directory: PathBuf,
}

/// Shape of the optional YAML file. Every key may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    listen_addr: Option<String>,
    directory: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            directory: std::env::temp_dir(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("COURIER_CONFIG") {
            Ok(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {}", path))?;
                Self::from_yaml_str(&text)?
            }
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.listen_addr = addr;
        }
        if let Ok(dir) = std::env::var("DIRECTORY") {
            cfg.directory = PathBuf::from(dir);
        }

        Ok(cfg)
    }

    /// Parses a YAML document on top of the defaults.
    pub fn from_yaml_str(text: &str) -> anyhow::Result<Self> {
        let file: FileConfig = serde_yaml::from_str(text).context("parsing YAML config")?;
        let defaults = Self::default();

        Ok(Self {
            listen_addr: file.listen_addr.unwrap_or(defaults.listen_addr),
            directory: file.directory.unwrap_or(defaults.directory),
        })
    }

    /// Applies command-line values, which win over every other source.
    pub fn with_overrides(mut self, listen_addr: Option<String>, directory: Option<PathBuf>) -> Self {
        if let Some(addr) = listen_addr {
            self.listen_addr = addr;
        }
        if let Some(dir) = directory {
            self.directory = dir;
        }
        self
    }
}
