//! Tolerant line parser for `.env` style files.
//!
//! Accepts the common dialect:
//! ```text
//! # comment
//! KEY=value
//! KEY="quoted value"
//! KEY='single quoted'
//! KEY=             (present but empty)
//! KEY              (declared without a value)
//! export KEY=value
//! KEY=value # inline comment
//! DEBUG=true  # optional
//! ```
//!
//! Every non-blank, non-comment line has an interpretation, so parsing never
//! fails on content. Only reading the file itself can fail.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::{Error, Result};

/// Matches a `# optional` annotation anywhere on a template line.
static OPTIONAL_ANNOTATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)#\s*optional\b").expect("Invalid optional annotation regex")
});

const EXPORT_PREFIX: &str = "export ";

/// One declared variable from a parsed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    /// The variable name. Never empty.
    pub name: String,
    /// `None` when the line had no `=`, `Some("")` for `KEY=`.
    pub value: Option<String>,
    /// Whether the line carried a `# optional` annotation.
    pub optional: bool,
}

impl ParsedEntry {
    /// True when the entry has a present, non-empty value.
    pub fn has_value(&self) -> bool {
        self.value.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// True when the entry was written as `KEY=` with nothing after it.
    pub fn is_empty_value(&self) -> bool {
        self.value.as_deref() == Some("")
    }
}

/// Ordered mapping of variable name to [`ParsedEntry`].
///
/// Iteration follows the position where a name was first declared. A later
/// declaration of the same name replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    entries: Vec<ParsedEntry>,
    index: HashMap<String, usize>,
}

impl EnvFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the entry it replaced if the name was
    /// already declared.
    pub fn insert(&mut self, entry: ParsedEntry) -> Option<ParsedEntry> {
        match self.index.get(&entry.name) {
            Some(&idx) => Some(std::mem::replace(&mut self.entries[idx], entry)),
            None => {
                self.index.insert(entry.name.clone(), self.entries.len());
                self.entries.push(entry);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParsedEntry> {
        self.index.get(name).map(|&idx| &self.entries[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ParsedEntry> {
        self.entries.iter()
    }

    /// Variable names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}

impl<'a> IntoIterator for &'a EnvFile {
    type Item = &'a ParsedEntry;
    type IntoIter = std::slice::Iter<'a, ParsedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Parses `.env` text into an ordered [`EnvFile`].
///
/// # Arguments
/// * `content` - The file text
/// * `detect_annotations` - Whether `# optional` annotations mark entries optional.
///   Only meaningful for template files.
///
/// # Example
/// ```
/// use dotenvguard_core::parser::parse_str;
///
/// let file = parse_str("export A=1\nB=\"x # y\"\nC\n", false);
/// assert_eq!(file.get("A").unwrap().value.as_deref(), Some("1"));
/// assert_eq!(file.get("B").unwrap().value.as_deref(), Some("x # y"));
/// assert_eq!(file.get("C").unwrap().value, None);
/// ```
pub fn parse_str(content: &str, detect_annotations: bool) -> EnvFile {
    let mut file = EnvFile::new();

    for (lineno, raw) in split_lines(content).enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // The annotation may sit anywhere on the raw line, independent of `export`.
        let optional = detect_annotations && OPTIONAL_ANNOTATION_REGEX.is_match(raw);

        let line = line.strip_prefix(EXPORT_PREFIX).unwrap_or(line);

        let (name, value) = match line.split_once('=') {
            Some((key, rest)) => (key.trim(), Some(parse_value(rest))),
            None => (line.trim(), None),
        };

        if name.is_empty() {
            debug!(line = lineno + 1, "Skipping line with empty variable name");
            continue;
        }

        trace!(line = lineno + 1, name, ?value, optional, "Parsed entry");

        let previous = file.insert(ParsedEntry {
            name: name.to_string(),
            value,
            optional,
        });
        if previous.is_some() {
            debug!(line = lineno + 1, name, "Duplicate declaration overrides earlier value");
        }
    }

    file
}

/// Split on `\r\n`, `\n` and a lone `\r`.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split("\r\n")
        .flat_map(|chunk| chunk.split(['\n', '\r']))
}

/// Normalize the right-hand side of `KEY=...`.
fn parse_value(raw: &str) -> String {
    let mut value = raw.trim();

    if !value.starts_with(['"', '\'']) {
        value = value.split('#').next().unwrap_or_default().trim();
    }

    value = strip_quotes(value);
    value.to_string()
}

/// Remove exactly one layer of matching `"` or `'` quotes.
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Reads and parses a file.
///
/// A file that does not exist yields an empty [`EnvFile`]. Any other read
/// failure is returned as [`Error::Io`].
pub fn parse_file(path: impl AsRef<Path>, detect_annotations: bool) -> Result<EnvFile> {
    let path = path.as_ref();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "File not found, treating as empty");
            return Ok(EnvFile::new());
        }
        Err(e) => return Err(Error::io(path, e)),
    };

    let file = parse_str(&content, detect_annotations);
    debug!(path = %path.display(), entries = file.len(), "Parsed file");
    Ok(file)
}

/// Parse an actual `.env` file. Annotations are ignored.
pub fn parse_env_file(path: impl AsRef<Path>) -> Result<EnvFile> {
    parse_file(path, false)
}

/// Parse a template file, honoring `# optional` annotations.
pub fn parse_example_file(path: impl AsRef<Path>) -> Result<EnvFile> {
    parse_file(path, true)
}
