//! # one-liner Architecture
//!
//! one-liner turns scripts into shell aliases that carry the script inside the
//! alias definition, compressed and base64-encoded, so nothing has to exist on
//! disk for the alias to run. All aliases live in one human-editable alias
//! file which this library parses, edits and rewrites.
//!
//! It is a library that happens to have a CLI client:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, formats output                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Reads script files, derives alias names                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per module, load → mutate → save           │
//! │  - Built on the codec and the document model                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/) + text format (parser, serializer)  │
//! │  - DocumentStore trait, FileStore / InMemoryStore           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Alias File
//!
//! ```text
//! <preamble lines>
//! # PARAMETERS END
//!
//! <leading comment lines>
//! alias <name>='<interpreter> -c "<decode-and-exec template>"'
//! <trailing comment lines>
//!
//! <next entry...>
//! ```
//!
//! The preamble is kept verbatim. Entries are rewritten in canonical order on
//! every save: the `one-liner` bootstrap alias first, the rest by name.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`codec`]: Script bytes ⇄ alias payload
//! - [`model`]: `AliasDocument` and `Entry`
//! - [`parser`] / [`serializer`]: Text ⇄ `AliasDocument`
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Alias file and interpreter resolution
//! - [`init`]: Context setup for clients
//! - [`shell`]: Shell profile bootstrapping
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod parser;
pub mod serializer;
pub mod shell;
pub mod store;
