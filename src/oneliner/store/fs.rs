use super::DocumentStore;
use crate::error::{OneLinerError, Result};
use log::debug;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for FileStore {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load_raw(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                debug!("loaded {} bytes from {}", text.len(), self.path.display());
                Ok(text)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(OneLinerError::Uninitialized(self.path.clone()))
            }
            Err(e) => Err(OneLinerError::Io(e)),
        }
    }

    fn save_raw(&mut self, text: &str) -> Result<()> {
        atomic_write(&self.path, text.as_bytes())?;
        debug!("saved {} bytes to {}", text.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

/// Replaces `path` with `content` via a sibling temp file and a rename.
///
/// A symlinked `path` is written through to its target, and an existing
/// file keeps its permissions.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let target = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(OneLinerError::Io(e)),
    };
    let permissions = match fs::metadata(&target) {
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(OneLinerError::Io(e)),
    };

    let mut tmp = NamedTempFile::new_in(parent_dir(&target)?).map_err(OneLinerError::Io)?;
    tmp.write_all(content).map_err(OneLinerError::Io)?;
    if let Some(permissions) = permissions.or_else(default_permissions) {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(OneLinerError::Io)?;
    }
    tmp.as_file().sync_all().map_err(OneLinerError::Io)?;
    tmp.persist(&target).map_err(|e| OneLinerError::Io(e.error))?;
    Ok(())
}

/// Creates `path` with `content`, failing if anything already exists there.
pub fn create_new(path: &Path, content: &[u8]) -> Result<()> {
    parent_dir(path)?;
    let file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path);
    let mut file = match file {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(OneLinerError::DestinationExists(path.to_path_buf()));
        }
        Err(e) => return Err(OneLinerError::Io(e)),
    };
    file.write_all(content).map_err(OneLinerError::Io)?;
    Ok(())
}

/// The directory holding `path`, created if missing.
fn parent_dir(path: &Path) -> Result<&Path> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(OneLinerError::Io)?;
    }
    Ok(dir)
}

// Temp files start out owner-only; new files get the usual 0644 instead.
#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}
