//! Canonical text form of an [`AliasDocument`].
//!
//! Layout: preamble, then one block per entry (bootstrap first, the rest by
//! name), every block preceded by a single blank line.

use crate::model::{AliasDocument, PREAMBLE_MARKER};

pub fn serialize(doc: &AliasDocument) -> String {
    let mut out = String::new();

    if !doc.preamble.is_empty() {
        out.push_str(&doc.preamble);
        out.push('\n');
    }
    if !doc.is_empty() && !doc.has_marker() {
        out.push_str(PREAMBLE_MARKER);
        out.push('\n');
    }

    for entry in doc.ordered() {
        out.push('\n');
        if !entry.leading_comment.is_empty() {
            out.push_str(&entry.leading_comment);
            out.push('\n');
        }
        out.push_str(&entry.definition_line());
        out.push('\n');
        if !entry.trailing_comment.is_empty() {
            out.push_str(&entry.trailing_comment);
            out.push('\n');
        }
    }

    out
}
