use crate::commands::{CmdMessage, CmdResult};
use crate::error::{OneLinerError, Result};
use crate::model::BOOTSTRAP_NAME;
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    if name == BOOTSTRAP_NAME {
        return Err(OneLinerError::Api(format!(
            "The {} alias cannot be deleted",
            BOOTSTRAP_NAME
        )));
    }

    let mut doc = store.load()?;
    if doc.remove(name).is_none() {
        return Err(OneLinerError::NotFound(name.to_string()));
    }
    store.save(&doc)?;

    let mut result = CmdResult::default().changed();
    result.add_message(CmdMessage::success(format!("Alias deleted: {}", name)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removed_name_no_longer_listed() {
        let mut store = StoreFixture::new()
            .with_script("a", "1")
            .with_script("b", "2")
            .build();
        run(&mut store, "a").unwrap();

        let names = list::run(&store).unwrap().names;
        assert_eq!(names, vec!["b"]);
        assert!(!store.text().unwrap().contains("alias a="));
    }

    #[test]
    fn unknown_name_is_not_found() {
        let mut store = StoreFixture::new().build();
        assert!(matches!(
            run(&mut store, "ghost"),
            Err(OneLinerError::NotFound(_))
        ));
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn bootstrap_is_protected() {
        let mut store = StoreFixture::new().build();
        assert!(matches!(
            run(&mut store, BOOTSTRAP_NAME),
            Err(OneLinerError::Api(_))
        ));
    }
}
