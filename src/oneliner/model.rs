use std::collections::BTreeMap;

/// Name of the alias that installs this tool itself. Always serialized first.
pub const BOOTSTRAP_NAME: &str = "one-liner";

/// Line closing the preamble. Nothing above it is interpreted as entries.
pub const PREAMBLE_MARKER: &str = "# PARAMETERS END";

/// Trailing comment attached to the bootstrap entry by `init`.
pub const SYNC_MARKER: &str = "########## sync below ##########";

pub const DEFAULT_PREAMBLE: &str = "# one-liner alias file\n\
# Managed by one-liner; entries below the marker are rewritten on every change.\n\
# PARAMETERS END";

/// Alias names are restricted to `[A-Za-z0-9_-]+`.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// One named alias plus the comment text around it.
///
/// The name and the quoted payload are kept apart; only
/// [`Entry::definition_line`] joins them, so renaming never touches the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    /// The quoted right-hand side of the definition, quotes included.
    pub payload: String,
    pub leading_comment: String,
    pub trailing_comment: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: payload.into(),
            leading_comment: String::new(),
            trailing_comment: String::new(),
        }
    }

    /// Recognizes `alias <name>=<quoted-payload>`.
    ///
    /// The payload must open and close with the same quote character. Lines
    /// that fail any part of the pattern are not definitions.
    pub fn from_line(line: &str) -> Option<Self> {
        let rest = line.trim_end().strip_prefix("alias ")?;
        let (name, payload) = rest.split_once('=')?;
        if !is_valid_name(name) || !is_quoted(payload) {
            return None;
        }
        Some(Self::new(name, payload))
    }

    pub fn definition_line(&self) -> String {
        format!("alias {}={}", self.name, self.payload)
    }

    pub fn is_bootstrap(&self) -> bool {
        self.name == BOOTSTRAP_NAME
    }
}

fn is_quoted(payload: &str) -> bool {
    let bytes = payload.as_bytes();
    if bytes.len() < 2 {
        return false;
    }
    let first = bytes[0];
    (first == b'\'' || first == b'"') && bytes[bytes.len() - 1] == first
}

/// In-memory form of the alias file: a verbatim preamble and the named entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasDocument {
    /// Header text up to and including the marker line, without a trailing newline.
    pub preamble: String,
    entries: BTreeMap<String, Entry>,
}

impl AliasDocument {
    pub fn new(preamble: impl Into<String>) -> Self {
        Self {
            preamble: preamble.into(),
            entries: BTreeMap::new(),
        }
    }

    /// A fresh document for a file that does not exist yet.
    pub fn with_default_preamble() -> Self {
        Self::new(DEFAULT_PREAMBLE)
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Entry> {
        self.entries.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Inserts or replaces by name, returning the replaced entry.
    pub fn insert(&mut self, entry: Entry) -> Option<Entry> {
        self.entries.insert(entry.name.clone(), entry)
    }

    pub fn remove(&mut self, name: &str) -> Option<Entry> {
        self.entries.remove(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// User-registered names in ascending order, without the bootstrap entry.
    pub fn names(&self) -> Vec<String> {
        self.entries
            .keys()
            .filter(|name| name.as_str() != BOOTSTRAP_NAME)
            .cloned()
            .collect()
    }

    /// Entries in canonical order: bootstrap first, then ascending by name.
    pub fn ordered(&self) -> impl Iterator<Item = &Entry> {
        self.entries
            .get(BOOTSTRAP_NAME)
            .into_iter()
            .chain(self.entries.values().filter(|e| !e.is_bootstrap()))
    }

    pub fn has_marker(&self) -> bool {
        self.preamble
            .lines()
            .last()
            .is_some_and(|line| line.trim_end() == PREAMBLE_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(is_valid_name("greet"));
        assert!(is_valid_name("my-tool_2"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("has space"));
        assert!(!is_valid_name("dot.py"));
        assert!(!is_valid_name("semi;colon"));
    }

    #[test]
    fn recognizes_single_and_double_quoted_definitions() {
        let e = Entry::from_line("alias hi='echo hi'").unwrap();
        assert_eq!(e.name, "hi");
        assert_eq!(e.payload, "'echo hi'");

        let e = Entry::from_line("alias hi=\"echo hi\"").unwrap();
        assert_eq!(e.payload, "\"echo hi\"");
    }

    #[test]
    fn rejects_unterminated_quote() {
        assert!(Entry::from_line("alias hi='echo hi").is_none());
        assert!(Entry::from_line("alias hi='").is_none());
        assert!(Entry::from_line("alias hi='echo hi\"").is_none());
    }

    #[test]
    fn rejects_non_definitions() {
        assert!(Entry::from_line("# alias hi='x'").is_none());
        assert!(Entry::from_line("alias ='x'").is_none());
        assert!(Entry::from_line("alias hi=x").is_none());
        assert!(Entry::from_line("export PATH='x'").is_none());
        assert!(Entry::from_line("alias h i='x'").is_none());
    }

    #[test]
    fn definition_line_joins_name_and_payload() {
        let e = Entry::new("greet", "'python3 -c \"print(1)\"'");
        assert_eq!(e.definition_line(), "alias greet='python3 -c \"print(1)\"'");
    }

    #[test]
    fn ordered_puts_bootstrap_first() {
        let mut doc = AliasDocument::with_default_preamble();
        doc.insert(Entry::new("zeta", "'z'"));
        doc.insert(Entry::new(BOOTSTRAP_NAME, "'b'"));
        doc.insert(Entry::new("alpha", "'a'"));

        let names: Vec<_> = doc.ordered().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec![BOOTSTRAP_NAME, "alpha", "zeta"]);
        assert_eq!(doc.names(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn default_preamble_ends_with_marker() {
        assert!(AliasDocument::with_default_preamble().has_marker());
        assert!(!AliasDocument::new("# just a header").has_marker());
    }
}
