//! Listing API query construction.
//!
//! Two ways of choosing the listing prefix, selected by
//! [`ListingConfig::ignore_path`]:
//!
//! - path mode: `{bucket}/{path}` lists prefix `{root}{path}`, so the page
//!   can live at every "directory" of a bucket website
//! - ignore-path mode: only `?prefix={root}...` selects the prefix, for
//!   pages deployed outside the bucket
//!
//! In both modes a `prefix` query parameter below the root wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{DELIMITER, ListingConfig};
use crate::models::PageLocation;
use crate::utils::{decode, encode_path};

static PREFIX_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[?&])prefix=([^&#]*)").expect("prefix pattern is valid")
});

/// Prefix to list for this location, normalized to end in one `/`.
///
/// Empty means the bucket root. A location that resolves to nothing usable
/// falls back to the root rather than failing.
pub fn resolve_prefix(config: &ListingConfig, location: &PageLocation) -> String {
    let prefix = match prefix_param(&config.root_dir, &location.search) {
        Some(prefix) => prefix,
        None if config.ignore_path => config.root_dir.clone(),
        None => path_prefix(&config.root_dir, &location.pathname),
    };
    normalize_prefix(&prefix)
}

/// Build the request URL for one page of the listing.
///
/// `marker` must already be encoded; it is appended as given.
pub fn build_query_url(config: &ListingConfig, prefix: &str, marker: Option<&str>) -> String {
    let mut url = format!("{}?delimiter={}", config.bucket_url, DELIMITER);

    if !prefix.is_empty() {
        url.push_str("&prefix=");
        url.push_str(&encode_path(prefix));
    }
    if let Some(marker) = marker.filter(|m| !m.is_empty()) {
        url.push_str("&marker=");
        url.push_str(marker);
    }

    url
}

/// `prefix` query parameter, if it names something below the root.
///
/// When the parameter repeats, the last occurrence wins.
fn prefix_param(root_dir: &str, search: &str) -> Option<String> {
    let captures = PREFIX_PARAM.captures_iter(search).last()?;
    let value = decode(captures.get(1)?.as_str());
    let rest = value.strip_prefix(root_dir)?;

    if rest.is_empty() {
        None
    } else {
        Some(format!("{root_dir}{rest}"))
    }
}

/// URL path with its leading `/` replaced by the root directory.
fn path_prefix(root_dir: &str, pathname: &str) -> String {
    let path = decode(pathname);
    match path.strip_prefix(DELIMITER) {
        Some(rest) => format!("{root_dir}{rest}"),
        None => path,
    }
}

/// Strip trailing `/` and append exactly one; all-slash input is the root.
pub(crate) fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_end_matches(DELIMITER);
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}{DELIMITER}")
    }
}
