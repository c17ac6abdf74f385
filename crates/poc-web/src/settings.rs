//! Runtime configuration: an optional TOML file overlaid by `POC_*`
//! environment variables.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use poc_store_sqlite::DEFAULT_PATH;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "poc-desk.toml";

/// Which store backend the server talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
  #[default]
  Local,
  Remote,
}

/// Server configuration. Deliberately not `Debug`: `remote_key` is a secret.
#[derive(Clone, Deserialize)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub backend:    Backend,
  pub store_path: PathBuf,
  #[serde(default)]
  pub remote_url: Option<String>,
  #[serde(default)]
  pub remote_key: Option<String>,
}

impl ServerConfig {
  /// Read `file` (if it exists) and the environment.
  ///
  /// `SUPABASE_URL` / `SUPABASE_KEY` are honoured as fallbacks for the
  /// remote secrets when the `POC_`-prefixed variables are unset.
  pub fn load(file: &Path) -> Result<Self, ConfigError> {
    let mut cfg: Self = Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8501)?
      .set_default("backend", "local")?
      .set_default("store_path", DEFAULT_PATH)?
      .add_source(File::from(file).required(false))
      .add_source(Environment::with_prefix("POC").try_parsing(true))
      .build()?
      .try_deserialize()?;

    if cfg.remote_url.is_none() {
      cfg.remote_url = std::env::var("SUPABASE_URL").ok();
    }
    if cfg.remote_key.is_none() {
      cfg.remote_key = std::env::var("SUPABASE_KEY").ok();
    }
    cfg.store_path = expand_tilde(&cfg.store_path);
    Ok(cfg)
  }

  pub fn address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
