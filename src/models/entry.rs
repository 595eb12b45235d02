//! Objects and virtual directories returned by the listing API.

/// Whether an entry is a stored object or a collapsed common prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One object or one virtual directory of a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Full object key (or common prefix), including the listing prefix.
    pub key: String,
    /// Modification time as sent by the store; empty for directories.
    pub last_modified: String,
    /// Size in bytes; zero for directories.
    pub size: u64,
    pub kind: EntryKind,
}

impl Entry {
    /// Create a file entry from an object node.
    pub fn file(key: impl Into<String>, last_modified: impl Into<String>, size: u64) -> Self {
        Self {
            key: key.into(),
            last_modified: last_modified.into(),
            size,
            kind: EntryKind::File,
        }
    }

    /// Create a directory entry from a common prefix.
    pub fn directory(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            last_modified: String::new(),
            size: 0,
            kind: EntryKind::Directory,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// One listing API response.
///
/// Consumed by the pagination engine right after parsing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Page {
    /// Objects, in the order the store returned them.
    pub files: Vec<Entry>,
    /// Common prefixes, in the order the store returned them.
    pub directories: Vec<Entry>,
    /// Percent-encoded marker for the next request.
    ///
    /// `Some` exactly when the store reported the listing as truncated; a
    /// truncated page without any usable marker fails to parse instead.
    pub next_marker: Option<String>,
    /// Prefix echoed back by the store.
    pub prefix: String,
}
