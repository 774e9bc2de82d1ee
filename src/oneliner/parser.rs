//! # Alias File Parser
//!
//! A single forward pass over lines, driven by a small state machine:
//!
//! ```text
//!   InPreamble ──marker──▶ AwaitingEntry ──comment──▶ InLeadingComment
//!                               ▲   │                       │
//!                               │   └──────definition───────┤
//!                             blank                         ▼
//!                               └──────────────────── InTrailingComment
//! ```
//!
//! - Everything up to and including the marker line is preamble.
//! - A definition line opens an entry. Comment lines before it become its
//!   leading comment, comment lines after it (until a blank line or the next
//!   definition) its trailing comment.
//! - A blank line or a new definition closes the pending entry.
//! - Lines that look like definitions but do not match the pattern exactly
//!   (e.g. an unterminated quote) are comment text.
//!
//! A file without a marker is all preamble and has no entries. Duplicate names
//! are resolved by keeping the last occurrence.

use crate::model::{AliasDocument, Entry, PREAMBLE_MARKER};
use log::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    InPreamble,
    AwaitingEntry,
    InLeadingComment,
    InTrailingComment,
}

/// Line classification used by the state machine.
#[derive(Debug)]
pub enum Line<'a> {
    Blank,
    Definition(Entry),
    Comment(&'a str),
}

pub fn classify(line: &str) -> Line<'_> {
    if line.trim().is_empty() {
        Line::Blank
    } else if let Some(entry) = Entry::from_line(line) {
        Line::Definition(entry)
    } else {
        Line::Comment(line)
    }
}

pub fn parse(raw: &str) -> AliasDocument {
    let mut parser = Parser::default();
    for line in raw.lines() {
        parser.feed(line);
    }
    parser.finish()
}

#[derive(Debug)]
struct Parser {
    state: State,
    preamble: Vec<String>,
    entries: Vec<Entry>,
    leading: Vec<String>,
    pending: Option<Entry>,
    trailing: Vec<String>,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            state: State::InPreamble,
            preamble: Vec::new(),
            entries: Vec::new(),
            leading: Vec::new(),
            pending: None,
            trailing: Vec::new(),
        }
    }
}

impl Parser {
    fn feed(&mut self, line: &str) {
        if self.state == State::InPreamble {
            self.preamble.push(line.to_string());
            if line.trim_end() == PREAMBLE_MARKER {
                self.state = State::AwaitingEntry;
            }
            return;
        }

        self.state = match (self.state, classify(line)) {
            (_, Line::Definition(entry)) => {
                self.close();
                self.pending = Some(entry);
                State::InTrailingComment
            }
            (State::InTrailingComment, Line::Blank) => {
                self.close();
                State::AwaitingEntry
            }
            (State::InTrailingComment, Line::Comment(text)) => {
                self.trailing.push(text.to_string());
                State::InTrailingComment
            }
            (State::InLeadingComment, Line::Blank) => {
                self.leading.push(String::new());
                State::InLeadingComment
            }
            (_, Line::Comment(text)) => {
                self.leading.push(text.to_string());
                State::InLeadingComment
            }
            (state, Line::Blank) => state,
        };
    }

    /// Emits the pending entry, if any, with the accumulated comments.
    fn close(&mut self) {
        let Some(mut entry) = self.pending.take() else {
            return;
        };
        while self.leading.last().is_some_and(|l| l.is_empty()) {
            self.leading.pop();
        }
        entry.leading_comment = std::mem::take(&mut self.leading).join("\n");
        entry.trailing_comment = std::mem::take(&mut self.trailing).join("\n");
        self.entries.push(entry);
    }

    fn finish(mut self) -> AliasDocument {
        self.close();

        if self.state == State::InPreamble && !self.preamble.is_empty() {
            warn!("alias file has no '{}' line; treating it all as preamble", PREAMBLE_MARKER);
        }

        let orphans: Vec<String> = self.leading.into_iter().filter(|l| !l.is_empty()).collect();
        if !orphans.is_empty() {
            match self.entries.last_mut() {
                Some(last) => {
                    if !last.trailing_comment.is_empty() {
                        last.trailing_comment.push('\n');
                    }
                    last.trailing_comment.push_str(&orphans.join("\n"));
                }
                None => warn!("dropping {} comment line(s) with no alias to attach to", orphans.len()),
            }
        }

        let mut doc = AliasDocument::new(self.preamble.join("\n"));
        for entry in self.entries {
            let name = entry.name.clone();
            if doc.insert(entry).is_some() {
                warn!("duplicate alias '{}'; keeping the last definition", name);
            }
        }
        doc
    }
}
