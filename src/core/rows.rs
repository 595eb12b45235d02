//! Row and breadcrumb construction.
//!
//! Derives what the table shows from an aggregated [`Listing`]: display
//! text relative to the current prefix, link targets for both prefix modes,
//! and the breadcrumb trail.

use tracing::trace;

use crate::config::{DELIMITER, ListingConfig};
use crate::core::sort;
use crate::models::{Crumb, EntryKind, Listing, ListingView, PageLocation, Row, RowKind};
use crate::utils::{encode_component, encode_path, format_size};

/// Label of the parent-directory row.
const PARENT_TEXT: &str = "../";

/// Size and time shown for rows that have none.
const PLACEHOLDER: &str = "-";

/// Build everything the listing region displays.
///
/// Entries are ordered by the configured sort mode before rows are built.
pub fn build_view(
    listing: &Listing,
    config: &ListingConfig,
    location: &PageLocation,
    complete: bool,
) -> ListingView {
    ListingView {
        navigation: build_navigation(&listing.prefix, config),
        rows: build_rows(listing, config, location),
        complete,
    }
}

/// Breadcrumbs for `prefix`: the root, then one crumb per segment.
///
/// Each crumb links to `?prefix=` with the cumulative path up to and
/// including its segment.
pub fn build_navigation(prefix: &str, config: &ListingConfig) -> Vec<Crumb> {
    let segments: Vec<&str> = prefix.split(DELIMITER).filter(|s| !s.is_empty()).collect();

    let mut crumbs = vec![Crumb {
        label: config.website_url.clone(),
        href: "?prefix=".to_string(),
        current: segments.is_empty(),
    }];

    let mut path = String::new();
    for (idx, segment) in segments.iter().enumerate() {
        path.push_str(&encode_component(segment));
        path.push(DELIMITER);
        crumbs.push(Crumb {
            label: segment.to_string(),
            href: format!("?prefix={path}"),
            current: idx == segments.len() - 1,
        });
    }

    crumbs
}

/// Table rows: the parent row when below the root, then one per entry.
pub fn build_rows(listing: &Listing, config: &ListingConfig, location: &PageLocation) -> Vec<Row> {
    let prefix = listing.prefix.as_str();
    let mut rows = Vec::with_capacity(listing.entries.len() + 1);

    if !prefix.is_empty() && prefix != config.root_dir {
        let href = if config.ignore_path {
            format!("?prefix={}", encode_path(&parent_prefix(prefix)))
        } else {
            PARENT_TEXT.to_string()
        };
        rows.push(Row {
            kind: RowKind::Parent,
            text: PARENT_TEXT.to_string(),
            href,
            last_modified: String::new(),
            size: PLACEHOLDER.to_string(),
        });
    }

    for entry in sort::sorted(&listing.entries, config.sort) {
        let text = entry.key.strip_prefix(prefix).unwrap_or(&entry.key);
        if text.is_empty() {
            trace!(key = %entry.key, "skipping folder marker object");
            continue;
        }

        let row = match entry.kind {
            EntryKind::Directory => Row {
                kind: RowKind::Directory,
                href: if config.ignore_path {
                    format!("{}?prefix={}", location.page_url(), encode_path(&entry.key))
                } else {
                    encode_path(text)
                },
                text: text.to_string(),
                last_modified: entry.last_modified.clone(),
                size: PLACEHOLDER.to_string(),
            },
            EntryKind::File => Row {
                kind: RowKind::File,
                href: format!("{}/{}", config.website_url, encode_path(&entry.key)),
                text: text.to_string(),
                last_modified: entry.last_modified.clone(),
                size: format_size(entry.size),
            },
        };
        rows.push(row);
    }

    rows
}

/// `prefix` with its last segment removed; empty at the top level.
fn parent_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_end_matches(DELIMITER);
    match trimmed.rfind(DELIMITER) {
        Some(idx) => format!("{}{DELIMITER}", &trimmed[..idx]),
        None => String::new(),
    }
}
