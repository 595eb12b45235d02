//! Snapshot of the page location.
//!
//! Every request of one browse action derives its prefix from the same
//! snapshot, so the location is read once and passed around by reference.

use crate::utils::dom;

/// The parts of `window.location` the listing depends on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageLocation {
    /// Scheme including the trailing colon (e.g. `https:`).
    pub protocol: String,
    /// Host name, with port when one is present.
    pub host: String,
    /// Path, still percent-encoded as the browser reports it.
    pub pathname: String,
    /// Query string including the leading `?`, or empty.
    pub search: String,
}

impl PageLocation {
    /// Read the current browser location.
    ///
    /// Missing parts (no window, detached document) read as empty strings.
    pub fn current() -> Self {
        let Some(location) = dom::window().map(|w| w.location()) else {
            return Self::default();
        };

        Self {
            protocol: location.protocol().unwrap_or_default(),
            host: location.host().unwrap_or_default(),
            pathname: location.pathname().unwrap_or_default(),
            search: location.search().unwrap_or_default(),
        }
    }

    /// Split an absolute URL into its location parts.
    #[cfg(test)]
    pub fn from_url(url: &str) -> Self {
        let (protocol, rest) = url.split_once("//").unwrap_or(("", url));
        let (rest, search) = match rest.find('?') {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, ""),
        };
        let (host, pathname) = match rest.find('/') {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, "/"),
        };

        Self {
            protocol: protocol.to_string(),
            host: host.to_string(),
            pathname: pathname.to_string(),
            search: search.to_string(),
        }
    }

    /// `protocol//host`, the default bucket URL.
    pub fn origin(&self) -> String {
        format!("{}//{}", self.protocol, self.host)
    }

    /// The current page without its query string.
    pub fn page_url(&self) -> String {
        format!("{}{}", self.origin(), self.pathname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_url() {
        let location = PageLocation::from_url("https://bucket.example.com:8443/a/b/?prefix=x/");
        assert_eq!(location.protocol, "https:");
        assert_eq!(location.host, "bucket.example.com:8443");
        assert_eq!(location.pathname, "/a/b/");
        assert_eq!(location.search, "?prefix=x/");
    }

    #[test]
    fn test_origin_and_page_url() {
        let location = PageLocation::from_url("http://localhost/index.html?prefix=logs/");
        assert_eq!(location.origin(), "http://localhost");
        assert_eq!(location.page_url(), "http://localhost/index.html");

        let bare = PageLocation::from_url("https://example.org");
        assert_eq!(bare.pathname, "/");
        assert_eq!(bare.search, "");
    }
}
