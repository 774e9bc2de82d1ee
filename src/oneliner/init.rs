use crate::api::OneLinerApi;
use crate::codec::Codec;
use crate::config::{ConfigSources, FileConfig, OneLinerConfig};
use crate::error::Result;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use log::{debug, warn};
use std::path::PathBuf;

pub struct OneLinerContext {
    pub api: OneLinerApi<FileStore>,
    pub config: OneLinerConfig,
}

/// Platform directory holding the optional `config.json`.
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "one-liner", "one-liner").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Resolves configuration from flags, the process environment and the config
/// file, then builds the API over the alias file.
pub fn initialize(alias_file: Option<PathBuf>, interpreter: Option<String>) -> Result<OneLinerContext> {
    let file = match config_dir() {
        Some(dir) => FileConfig::load(&dir).unwrap_or_else(|e| {
            warn!("ignoring unreadable config in {}: {}", dir.display(), e);
            FileConfig::default()
        }),
        None => FileConfig::default(),
    };

    let env = |key: &str| std::env::var(key).ok();
    let config = OneLinerConfig::resolve(ConfigSources {
        alias_file,
        interpreter,
        env: &env,
        file,
    })?;
    debug!(
        "alias file: {}, interpreter: {}",
        config.alias_file.display(),
        config.interpreter
    );

    let store = FileStore::new(config.alias_file.clone());
    let api = OneLinerApi::new(store, Codec::new(config.interpreter.clone()));
    Ok(OneLinerContext { api, config })
}
