//! # CLI Layer
//!
//! This is **one possible UI client** for one-liner. It is the only place
//! that reads stdin, writes stdout/stderr or decides exit codes.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Per-command handlers that call the API and print results
//! - `print`: Output formatting (colored messages, script framing)

mod commands;
mod print;
pub mod setup;

pub use commands::run;
