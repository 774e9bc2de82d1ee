use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::parser::parse;
use crate::serializer::serialize;
use crate::store::DocumentStore;

/// Rewrites the alias file in canonical form without changing any alias.
pub fn run<S: DocumentStore>(store: &mut S) -> Result<CmdResult> {
    let raw = store.load_raw()?;
    let canonical = serialize(&parse(&raw));

    let mut result = CmdResult::default();
    if canonical == raw {
        result.add_message(CmdMessage::info("Alias file is already in canonical form."));
        return Ok(result);
    }

    store.save_raw(&canonical)?;
    result.add_message(CmdMessage::success(format!(
        "Reformatted {}",
        store.location().display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn canonicalizes_order_and_spacing() {
        let mut store = InMemoryStore::with_text(
            "# PARAMETERS END\nalias zz='1'\n\n\n\nalias aa='2'\nalias one-liner='b'\n",
        );
        run(&mut store).unwrap();
        assert_eq!(
            store.text().unwrap(),
            "# PARAMETERS END\n\nalias one-liner='b'\n\nalias aa='2'\n\nalias zz='1'\n"
        );
        assert_eq!(list::run(&store).unwrap().names, vec!["aa", "zz"]);
    }

    #[test]
    fn canonical_file_is_not_rewritten() {
        let mut store = StoreFixture::new().with_script("a", "1").build();
        let before = store.text().unwrap().to_string();
        run(&mut store).unwrap();
        assert_eq!(store.saves(), 0);
        assert_eq!(store.text().unwrap(), before);
    }
}
