//! # Storage Layer
//!
//! The [`DocumentStore`] trait hides where the alias file lives. Commands only
//! see parsed documents: `load` parses, `save` serializes and replaces the
//! whole file.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the real alias file. Saves go to a temp file in the
//!   same directory which is then renamed over the target, so an interrupted
//!   write leaves the previous content in place.
//! - [`memory::InMemoryStore`]: holds the raw text in memory, for tests.
//!
//! There is no locking. Two invocations racing on one file end with the last
//! writer's content.

use crate::error::Result;
use crate::model::AliasDocument;
use crate::parser::parse;
use crate::serializer::serialize;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub trait DocumentStore {
    /// Whether a document has been written yet.
    fn exists(&self) -> bool;

    /// Raw file content. Fails with `Uninitialized` when nothing exists yet.
    fn load_raw(&self) -> Result<String>;

    /// Replace the whole content, all or nothing.
    fn save_raw(&mut self, text: &str) -> Result<()>;

    /// Where the document lives, for messages.
    fn location(&self) -> PathBuf;

    fn load(&self) -> Result<AliasDocument> {
        Ok(parse(&self.load_raw()?))
    }

    fn save(&mut self, doc: &AliasDocument) -> Result<()> {
        self.save_raw(&serialize(doc))
    }
}
