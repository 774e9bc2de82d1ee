//! The `override` operation: new script, same alias name and comments.

use crate::codec::Codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{OneLinerError, Result};
use crate::store::DocumentStore;
use log::debug;

pub fn run<S: DocumentStore>(
    store: &mut S,
    codec: &Codec,
    name: &str,
    script: &[u8],
) -> Result<CmdResult> {
    let mut doc = store.load()?;
    let payload = codec.encode(script)?;
    let entry = doc
        .get_mut(name)
        .ok_or_else(|| OneLinerError::NotFound(name.to_string()))?;
    entry.payload = payload;
    debug!("{}", entry.definition_line());
    store.save(&doc)?;

    let mut result = CmdResult::default().changed();
    result.add_message(CmdMessage::success(format!("Alias overridden: {}", name)));
    Ok(result)
}
