use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(store: &S) -> Result<CmdResult> {
    let doc = store.load()?;
    Ok(CmdResult::default().with_names(doc.names()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_sorted_without_bootstrap() {
        let store = StoreFixture::new()
            .with_script("zz", "1")
            .with_script("aa", "2")
            .with_script("mm", "3")
            .build();
        assert_eq!(run(&store).unwrap().names, vec!["aa", "mm", "zz"]);
    }

    #[test]
    fn bootstrap_only_lists_nothing() {
        let store = StoreFixture::new().build();
        assert!(run(&store).unwrap().names.is_empty());
    }

    #[test]
    fn markerless_file_lists_nothing() {
        let store = InMemoryStore::with_text("alias a='x'\n");
        assert!(run(&store).unwrap().names.is_empty());
    }
}
