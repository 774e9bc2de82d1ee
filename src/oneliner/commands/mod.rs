//! # Command Layer
//!
//! One module per operation. Each `run` loads the document from the store,
//! changes it in memory and saves it only when the whole operation succeeded,
//! so a failing command never touches the file.

use std::path::PathBuf;

pub mod create;
pub mod delete;
pub mod export;
pub mod fix;
pub mod helpers;
pub mod init;
pub mod list;
pub mod overwrite;
pub mod print;
pub mod rename;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Alias names, for `list`.
    pub names: Vec<String>,
    /// A definition line, for `print`.
    pub definition: Option<String>,
    /// Decoded script, for `export` to the terminal.
    pub script: Option<Vec<u8>>,
    /// File written by `export`.
    pub written_path: Option<PathBuf>,
    /// Set when the alias file was rewritten with different aliases, meaning
    /// the shell has to re-source it.
    pub aliases_changed: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.names = names;
        self
    }

    pub fn with_definition(mut self, definition: String) -> Self {
        self.definition = Some(definition);
        self
    }

    pub fn with_script(mut self, script: Vec<u8>) -> Self {
        self.script = Some(script);
        self
    }

    pub fn with_written_path(mut self, path: PathBuf) -> Self {
        self.written_path = Some(path);
        self
    }

    pub fn changed(mut self) -> Self {
        self.aliases_changed = true;
        self
    }
}
