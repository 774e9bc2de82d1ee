//! Shell profile bootstrapping: make the shell `source` the alias file.

use crate::error::{OneLinerError, Result};
use directories::BaseDirs;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
}

impl Shell {
    /// Detects the shell from a `$SHELL` value such as `/bin/zsh`.
    pub fn from_path(shell: &str) -> Option<Self> {
        match Path::new(shell).file_name()?.to_str()? {
            "bash" => Some(Shell::Bash),
            "zsh" => Some(Shell::Zsh),
            _ => None,
        }
    }

    pub fn rc_file(&self, home: &Path) -> PathBuf {
        match self {
            Shell::Bash => home.join(".bashrc"),
            Shell::Zsh => home.join(".zshrc"),
        }
    }
}

pub fn home_dir() -> Result<PathBuf> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or_else(|| OneLinerError::Configuration("cannot determine home directory".into()))
}

/// Appends `source <alias_file>` to `rc_file` unless a line already mentions
/// it. Returns whether the file was changed.
pub fn ensure_sourced(rc_file: &Path, alias_file: &Path) -> Result<bool> {
    let source_line = format!("source {}", alias_file.display());

    let existing = match fs::read_to_string(rc_file) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(OneLinerError::Io(e)),
    };
    if existing.lines().any(|line| line.contains(&source_line)) {
        return Ok(false);
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(rc_file)
        .map_err(OneLinerError::Io)?;
    writeln!(file, "\n{}", source_line).map_err(OneLinerError::Io)?;
    Ok(true)
}
