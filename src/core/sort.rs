//! Entry ordering.
//!
//! Applied once to the whole aggregated listing, files and directories
//! alike. The sort is stable: directories carry an empty modification time
//! and zero size, so time and size modes keep them in arrival order.

use std::cmp::Ordering;

use crate::models::{Entry, SortMode};

/// Compare two entries under `mode`. [`SortMode::Default`] treats all as equal.
pub fn compare(mode: SortMode, a: &Entry, b: &Entry) -> Ordering {
    match mode {
        SortMode::Default => Ordering::Equal,
        SortMode::OldToNew => a.last_modified.cmp(&b.last_modified),
        SortMode::NewToOld => b.last_modified.cmp(&a.last_modified),
        SortMode::NameAscending => a.key.cmp(&b.key),
        SortMode::NameDescending => b.key.cmp(&a.key),
        SortMode::BigToSmall => b.size.cmp(&a.size),
        SortMode::SmallToBig => a.size.cmp(&b.size),
    }
}

/// Sort entries in place. The default mode leaves the store's order alone.
pub fn sort_entries(entries: &mut [Entry], mode: SortMode) {
    if mode == SortMode::Default {
        return;
    }
    entries.sort_by(|a, b| compare(mode, a, b));
}

/// Sorted copy of `entries`.
pub fn sorted(entries: &[Entry], mode: SortMode) -> Vec<Entry> {
    let mut entries = entries.to_vec();
    sort_entries(&mut entries, mode);
    entries
}
