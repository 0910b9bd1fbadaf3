//! The bookmark store: a name → target mapping reconstructed from the
//! startup file on every read and fully rewritten on every write. The
//! process is one-shot, so nothing is cached across invocations.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{RcLine, format_record};

pub(crate) struct Store {
    path: PathBuf,
}

impl Store {
    pub(crate) fn new(path: PathBuf) -> Store {
        Store { path }
    }

    #[allow(dead_code)]
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Scan every line and collect the record lines. A name declared twice
    /// keeps its last declaration, matching what zsh itself would do.
    pub(crate) fn load(&self) -> io::Result<BTreeMap<String, String>> {
        let text = fs::read_to_string(&self.path)?;
        let mut bookmarks = BTreeMap::new();
        for raw in text.lines() {
            if let RcLine::Record { name, target } = RcLine::parse(raw) {
                bookmarks.insert(name, target);
            }
        }
        Ok(bookmarks)
    }

    /// Rewrite the backing file: opaque lines stay verbatim in their
    /// original order, every record line is dropped, and one freshly
    /// formatted record per bookmark is appended in name order.
    pub(crate) fn save(&self, bookmarks: &BTreeMap<String, String>) -> io::Result<()> {
        let text = fs::read_to_string(&self.path)?;
        let mut lines: Vec<&str> = text
            .lines()
            .filter(|raw| !RcLine::parse(raw).is_record())
            .collect();
        let records: Vec<String> = bookmarks
            .iter()
            .map(|(name, target)| format_record(name, target))
            .collect();
        lines.extend(records.iter().map(String::as_str));
        let mut out = lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        fs::write(&self.path, out)
    }
}

/// Why a proposed bookmark name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NameError {
    /// Characters outside [A-Za-z0-9_-].
    UnsupportedCharacters,
    /// Leading '-' or digits only.
    IllegalFormat,
}

pub(crate) fn validate_name(name: &str) -> Result<(), NameError> {
    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(NameError::UnsupportedCharacters);
    }
    if name.starts_with('-') || name.chars().all(|c| c.is_ascii_digit()) {
        return Err(NameError::IllegalFormat);
    }
    Ok(())
}

/// Names already pointing at `target`, in name order.
pub(crate) fn aliases_of<'a>(
    bookmarks: &'a BTreeMap<String, String>,
    target: &str,
) -> Vec<&'a str> {
    bookmarks
        .iter()
        .filter(|(_, t)| t.as_str() == target)
        .map(|(name, _)| name.as_str())
        .collect()
}
