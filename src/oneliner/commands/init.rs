use crate::codec::Codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{AliasDocument, Entry, BOOTSTRAP_NAME, SYNC_MARKER};
use crate::store::DocumentStore;
use log::debug;

/// Writes the bootstrap alias, creating the alias file if needed.
pub fn run<S: DocumentStore>(store: &mut S, codec: &Codec, script: &[u8]) -> Result<CmdResult> {
    let created = !store.exists();
    let mut doc = if created {
        AliasDocument::with_default_preamble()
    } else {
        store.load()?
    };

    let payload = codec.encode(script)?;
    let mut entry = Entry::new(BOOTSTRAP_NAME, payload);
    if let Some(existing) = doc.get(BOOTSTRAP_NAME) {
        entry.leading_comment = existing.leading_comment.clone();
    }
    entry.trailing_comment = SYNC_MARKER.to_string();
    debug!("bootstrap alias: {}", entry.definition_line());
    doc.insert(entry);

    store.save(&doc)?;

    let mut result = CmdResult::default().changed();
    if created {
        result.add_message(CmdMessage::info(format!(
            "Created alias file at {}",
            store.location().display()
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Installed the {} alias",
        BOOTSTRAP_NAME
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::export;
    use crate::store::memory::fixtures::{codec, StoreFixture};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_document_with_bootstrap_entry() {
        let mut store = InMemoryStore::new();
        run(&mut store, &codec(), b"print('boot')").unwrap();

        let doc = store.load().unwrap();
        assert!(doc.has_marker());
        let boot = doc.get(BOOTSTRAP_NAME).unwrap();
        assert_eq!(boot.trailing_comment, SYNC_MARKER);

        let out = export::run(&store, BOOTSTRAP_NAME, None, false).unwrap();
        assert_eq!(out.script.unwrap(), b"print('boot')");
    }

    #[test]
    fn reinit_replaces_bootstrap_and_keeps_others() {
        let mut store = StoreFixture::new().with_script("greet", "print('hi')").build();
        run(&mut store, &codec(), b"print('v2')").unwrap();

        let doc = store.load().unwrap();
        assert!(doc.contains("greet"));
        assert_eq!(doc.len(), 2);
        let out = export::run(&store, BOOTSTRAP_NAME, None, false).unwrap();
        assert_eq!(out.script.unwrap(), b"print('v2')");
    }

    #[test]
    fn bootstrap_is_written_first() {
        let mut store = StoreFixture::new().with_script("aaa", "1").build();
        run(&mut store, &codec(), b"boot").unwrap();
        let text = store.text().unwrap();
        let first_alias = text.lines().find(|l| l.starts_with("alias ")).unwrap();
        assert!(first_alias.starts_with("alias one-liner="));
    }

    #[test]
    fn keeps_existing_preamble() {
        let mut store = InMemoryStore::with_text("# custom\nexport A=1\n# PARAMETERS END\n");
        run(&mut store, &codec(), b"boot").unwrap();
        assert!(store.text().unwrap().starts_with("# custom\nexport A=1\n# PARAMETERS END\n\n"));
    }
}
