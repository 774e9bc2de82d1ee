//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. Every UI goes
//! through [`OneLinerApi`].
//!
//! It normalizes inputs before dispatching: script files are read here, and
//! alias names are derived from file names when none is given. Business rules
//! stay in `commands/*.rs`; nothing here prints.
//!
//! `OneLinerApi<S: DocumentStore>` is generic over the store:
//! - Production: `OneLinerApi<FileStore>`
//! - Testing: `OneLinerApi<InMemoryStore>`

use crate::codec::Codec;
use crate::commands;
use crate::commands::helpers::derive_name;
use crate::error::{OneLinerError, Result};
use crate::store::DocumentStore;
use std::fs;
use std::path::Path;

pub struct OneLinerApi<S: DocumentStore> {
    store: S,
    codec: Codec,
}

impl<S: DocumentStore> OneLinerApi<S> {
    pub fn new(store: S, codec: Codec) -> Self {
        Self { store, codec }
    }

    pub fn init(&mut self, script: &[u8]) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store, &self.codec, script)
    }

    pub fn create(&mut self, name: Option<&str>, source: &Path) -> Result<commands::CmdResult> {
        let name = resolve_name(name, source)?;
        let script = read_script(source)?;
        commands::create::run(&mut self.store, &self.codec, &name, &script)
    }

    pub fn override_alias(
        &mut self,
        name: Option<&str>,
        source: &Path,
    ) -> Result<commands::CmdResult> {
        let name = resolve_name(name, source)?;
        let script = read_script(source)?;
        commands::overwrite::run(&mut self.store, &self.codec, &name, &script)
    }

    pub fn rename(&mut self, old: &str, new: &str) -> Result<commands::CmdResult> {
        commands::rename::run(&mut self.store, old, new)
    }

    pub fn delete(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, name)
    }

    pub fn print(&self, name: &str) -> Result<commands::CmdResult> {
        commands::print::run(&self.store, name)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn export(
        &self,
        name: &str,
        dest: Option<&Path>,
        overwrite: bool,
    ) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, name, dest, overwrite)
    }

    pub fn fix(&mut self) -> Result<commands::CmdResult> {
        commands::fix::run(&mut self.store)
    }

    pub fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.store.load()?.contains(name))
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn resolve_name(name: Option<&str>, source: &Path) -> Result<String> {
    match name {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => derive_name(source),
    }
}

fn read_script(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| {
        OneLinerError::Api(format!("Cannot read script {}: {}", path.display(), e))
    })
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
