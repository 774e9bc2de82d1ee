use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DocumentStore;

use super::helpers::require;

pub fn run<S: DocumentStore>(store: &S, name: &str) -> Result<CmdResult> {
    let doc = store.load()?;
    let entry = require(&doc, name)?;
    Ok(CmdResult::default().with_definition(entry.definition_line()))
}
