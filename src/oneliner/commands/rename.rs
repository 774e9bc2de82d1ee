use crate::commands::{CmdMessage, CmdResult};
use crate::error::{OneLinerError, Result};
use crate::model::BOOTSTRAP_NAME;
use crate::store::DocumentStore;

use super::helpers::validate_name;

pub fn run<S: DocumentStore>(store: &mut S, old: &str, new: &str) -> Result<CmdResult> {
    validate_name(new)?;
    if old == BOOTSTRAP_NAME || new == BOOTSTRAP_NAME {
        return Err(OneLinerError::Api(format!(
            "The {} alias cannot be renamed",
            BOOTSTRAP_NAME
        )));
    }

    let mut doc = store.load()?;
    if !doc.contains(old) {
        return Err(OneLinerError::NotFound(old.to_string()));
    }
    if old == new {
        return Ok(CmdResult::default());
    }
    if doc.contains(new) {
        return Err(OneLinerError::AlreadyExists(new.to_string()));
    }

    let mut entry = doc
        .remove(old)
        .ok_or_else(|| OneLinerError::NotFound(old.to_string()))?;
    entry.name = new.to_string();
    doc.insert(entry);
    store.save(&doc)?;

    let mut result = CmdResult::default().changed();
    result.add_message(CmdMessage::success(format!("Alias renamed: {} -> {}", old, new)));
    Ok(result)
}
