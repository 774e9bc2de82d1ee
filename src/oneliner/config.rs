//! # Configuration
//!
//! Two values are required: the alias file path and the interpreter used
//! inside generated aliases. Each is taken from the first source that has it:
//!
//! 1. command-line flags (`--alias-file`, `--interpreter`)
//! 2. environment (`ONELINER_PATH`, `ONELINER_PYTHON_EXEC`)
//! 3. `config.json` in the platform config directory
//!
//! Missing either one is a [`OneLinerError::Configuration`] error.

use crate::error::{OneLinerError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const ALIAS_FILE_VAR: &str = "ONELINER_PATH";
pub const INTERPRETER_VAR: &str = "ONELINER_PYTHON_EXEC";

const CONFIG_FILENAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneLinerConfig {
    pub alias_file: PathBuf,
    pub interpreter: String,
}

/// Optional settings file, stored as `config.json`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct FileConfig {
    #[serde(default)]
    pub alias_file: Option<PathBuf>,

    #[serde(default)]
    pub interpreter: Option<String>,
}

impl FileConfig {
    /// Reads `config.json` from `config_dir`. A missing file means no settings.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(OneLinerError::Io)?;
        let config: FileConfig =
            serde_json::from_str(&content).map_err(OneLinerError::Serialization)?;
        Ok(config)
    }
}

/// Everything configuration can be resolved from. The environment is a
/// lookup function so tests do not have to mutate the process environment.
pub struct ConfigSources<'a> {
    pub alias_file: Option<PathBuf>,
    pub interpreter: Option<String>,
    pub env: &'a dyn Fn(&str) -> Option<String>,
    pub file: FileConfig,
}

impl OneLinerConfig {
    pub fn resolve(sources: ConfigSources<'_>) -> Result<Self> {
        let env = |key: &str| (sources.env)(key).filter(|v| !v.is_empty());

        let alias_file = sources
            .alias_file
            .or_else(|| env(ALIAS_FILE_VAR).map(PathBuf::from))
            .or(sources.file.alias_file)
            .ok_or_else(|| missing("alias file path", ALIAS_FILE_VAR))?;

        let interpreter = sources
            .interpreter
            .filter(|v| !v.is_empty())
            .or_else(|| env(INTERPRETER_VAR))
            .or(sources.file.interpreter)
            .ok_or_else(|| missing("interpreter", INTERPRETER_VAR))?;

        Ok(Self {
            alias_file,
            interpreter,
        })
    }
}

fn missing(what: &str, var: &str) -> OneLinerError {
    OneLinerError::Configuration(format!(
        "no {} configured; set {} or pass it on the command line",
        what, var
    ))
}
