use super::DocumentStore;
use crate::error::{OneLinerError, Result};
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    text: Option<String>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            saves: 0,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Number of successful saves, so tests can assert nothing was written.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DocumentStore for InMemoryStore {
    fn exists(&self) -> bool {
        self.text.is_some()
    }

    fn load_raw(&self) -> Result<String> {
        self.text
            .clone()
            .ok_or_else(|| OneLinerError::Uninitialized(self.location()))
    }

    fn save_raw(&mut self, text: &str) -> Result<()> {
        self.text = Some(text.to_string());
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("<memory>")
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::codec::Codec;
    use crate::model::{AliasDocument, Entry, BOOTSTRAP_NAME, SYNC_MARKER};
    use crate::serializer::serialize;

    pub const TEST_INTERPRETER: &str = "python3";

    pub struct StoreFixture {
        doc: AliasDocument,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        /// A document holding only the bootstrap entry.
        pub fn new() -> Self {
            let mut doc = AliasDocument::with_default_preamble();
            let mut boot = Entry::new(BOOTSTRAP_NAME, encode(b"print('one-liner')"));
            boot.trailing_comment = SYNC_MARKER.to_string();
            doc.insert(boot);
            Self { doc }
        }

        pub fn with_script(mut self, name: &str, script: &str) -> Self {
            self.doc.insert(Entry::new(name, encode(script.as_bytes())));
            self
        }

        pub fn with_commented_script(mut self, name: &str, script: &str, comment: &str) -> Self {
            let mut entry = Entry::new(name, encode(script.as_bytes()));
            entry.leading_comment = comment.to_string();
            self.doc.insert(entry);
            self
        }

        pub fn with_raw_entry(mut self, entry: Entry) -> Self {
            self.doc.insert(entry);
            self
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::with_text(serialize(&self.doc))
        }
    }

    pub fn codec() -> Codec {
        Codec::new(TEST_INTERPRETER)
    }

    fn encode(script: &[u8]) -> String {
        codec().encode(script).unwrap()
    }
}
