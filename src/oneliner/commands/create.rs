use crate::codec::Codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{OneLinerError, Result};
use crate::model::Entry;
use crate::store::DocumentStore;
use log::debug;

use super::helpers::validate_name;

pub fn run<S: DocumentStore>(
    store: &mut S,
    codec: &Codec,
    name: &str,
    script: &[u8],
) -> Result<CmdResult> {
    validate_name(name)?;
    let mut doc = store.load()?;
    if doc.contains(name) {
        return Err(OneLinerError::AlreadyExists(name.to_string()));
    }

    let entry = Entry::new(name, codec.encode(script)?);
    debug!("{}", entry.definition_line());
    doc.insert(entry);
    store.save(&doc)?;

    let mut result = CmdResult::default().changed();
    result.add_message(CmdMessage::success(format!("Alias created: {}", name)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{export, list};
    use crate::store::memory::fixtures::{codec, StoreFixture};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_and_exports_script() {
        let mut store = StoreFixture::new().build();
        run(&mut store, &codec(), "greet", b"print('hi')").unwrap();

        let out = export::run(&store, "greet", None, false).unwrap();
        assert_eq!(out.script.unwrap(), b"print('hi')");
        assert_eq!(list::run(&store).unwrap().names, vec!["greet"]);
    }

    #[test]
    fn existing_name_fails_without_writing() {
        let mut store = StoreFixture::new().with_script("greet", "print('hi')").build();
        let before = store.text().unwrap().to_string();

        let err = run(&mut store, &codec(), "greet", b"print('other')").unwrap_err();
        assert!(matches!(err, OneLinerError::AlreadyExists(ref n) if n == "greet"));
        assert_eq!(store.text().unwrap(), before);
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn invalid_name_is_rejected() {
        let mut store = StoreFixture::new().build();
        let err = run(&mut store, &codec(), "bad name", b"").unwrap_err();
        assert!(matches!(err, OneLinerError::InvalidName(_)));
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn requires_initialized_store() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, &codec(), "greet", b"").unwrap_err();
        assert!(matches!(err, OneLinerError::Uninitialized(_)));
    }
}
