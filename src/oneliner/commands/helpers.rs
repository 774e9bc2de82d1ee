use crate::error::{OneLinerError, Result};
use crate::model::{is_valid_name, AliasDocument, Entry};
use std::path::Path;

pub fn validate_name(name: &str) -> Result<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(OneLinerError::InvalidName(name.to_string()))
    }
}

pub fn require<'a>(doc: &'a AliasDocument, name: &str) -> Result<&'a Entry> {
    doc.get(name)
        .ok_or_else(|| OneLinerError::NotFound(name.to_string()))
}

/// Alias name for a script file: its final path segment minus a `.py` suffix.
pub fn derive_name(path: &Path) -> Result<String> {
    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| OneLinerError::Api(format!("Cannot derive a name from {}", path.display())))?;
    let name = file_name.strip_suffix(".py").unwrap_or(file_name);
    validate_name(name)?;
    Ok(name.to_string())
}
