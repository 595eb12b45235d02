//! Application configuration.
//!
//! Centralizes the constants used throughout the application and the
//! listing settings a page provides through global variables. The settings
//! are resolved once at startup into a [`ListingConfig`], which is shared
//! read-only from then on.

use tracing::{Level, warn};

use crate::core::query::normalize_prefix;
use crate::models::{PageLocation, SortMode};
use crate::utils::dom;

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Delimiter used to fold keys into common prefixes.
pub const DELIMITER: char = '/';

// =============================================================================
// Page Integration
// =============================================================================

/// Element the listing is mounted into. Falls back to `<body>`.
pub const LISTING_ELEMENT_ID: &str = "listing";

/// Log level used when the page does not set one.
pub const DEFAULT_LOG_LEVEL: Level = Level::INFO;

/// Names of the page globals read at startup.
pub mod globals {
    pub const BUCKET_URL: &str = "BUCKET_URL";
    pub const BUCKET_NAME: &str = "BUCKET_NAME";
    pub const BUCKET_WEBSITE_URL: &str = "BUCKET_WEBSITE_URL";
    pub const ROOT_DIR: &str = "S3B_ROOT_DIR";
    pub const IGNORE_PATH: &str = "S3BL_IGNORE_PATH";
    pub const SORT: &str = "S3B_SORT";
    pub const LOG_LEVEL: &str = "S3BL_LOG_LEVEL";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Listing Configuration
// =============================================================================

/// Settings exactly as the page provided them. `None` means undefined.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawConfig {
    pub bucket_url: Option<String>,
    pub bucket_name: Option<String>,
    pub website_url: Option<String>,
    pub root_dir: Option<String>,
    pub ignore_path: Option<bool>,
    pub sort: Option<String>,
    pub log_level: Option<String>,
}

impl RawConfig {
    /// Read the settings from the page's global variables.
    pub fn from_page() -> Self {
        Self {
            bucket_url: dom::global_string(globals::BUCKET_URL),
            bucket_name: dom::global_string(globals::BUCKET_NAME),
            website_url: dom::global_string(globals::BUCKET_WEBSITE_URL),
            root_dir: dom::global_string(globals::ROOT_DIR),
            ignore_path: dom::global_bool(globals::IGNORE_PATH),
            sort: dom::global_string(globals::SORT),
            log_level: dom::global_string(globals::LOG_LEVEL),
        }
    }

    /// Console log level, falling back to [`DEFAULT_LOG_LEVEL`].
    pub fn log_level(&self) -> Level {
        self.log_level
            .as_deref()
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

/// Resolved listing settings, immutable for the lifetime of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingConfig {
    /// Listing API endpoint, without trailing slash.
    pub bucket_url: String,
    /// Base URL for file links, without trailing slash.
    pub website_url: String,
    /// Prefix that acts as the root of the browsable tree. Empty or ending
    /// in exactly one `/`.
    pub root_dir: String,
    /// Take the prefix from `?prefix=` only, never from the URL path.
    pub ignore_path: bool,
    pub sort: SortMode,
}

impl ListingConfig {
    /// Apply defaults to the page settings.
    ///
    /// - bucket URL defaults to the page origin
    /// - with a bucket name that is not already the host (virtual-hosted
    ///   style), the name is appended to the bucket URL (path style)
    /// - website URL defaults to the bucket URL
    /// - the root directory gets the same trailing-slash form as prefixes
    /// - unknown sort modes fall back to [`SortMode::Default`]
    pub fn resolve(raw: RawConfig, location: &PageLocation) -> Self {
        let mut bucket_url = raw
            .bucket_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| location.origin());

        if let Some(name) = raw.bucket_name.as_deref().filter(|n| !n.is_empty()) {
            let virtual_hosted = format!("{}//{}", location.protocol, name);
            if !bucket_url.starts_with(&virtual_hosted) {
                bucket_url = format!("{}/{}", bucket_url.trim_end_matches('/'), name);
            }
        }
        let bucket_url = bucket_url.trim_end_matches('/').to_string();

        let website_url = raw
            .website_url
            .filter(|url| !url.is_empty())
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| bucket_url.clone());

        let sort = match raw.sort.as_deref() {
            None => SortMode::Default,
            Some(name) => name.parse().unwrap_or_else(|err| {
                warn!("{err}, using {}", SortMode::Default);
                SortMode::Default
            }),
        };

        Self {
            bucket_url,
            website_url,
            root_dir: normalize_prefix(raw.root_dir.as_deref().unwrap_or_default()),
            ignore_path: raw.ignore_path.unwrap_or(false),
            sort,
        }
    }
}
