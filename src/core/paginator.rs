//! Pagination engine.
//!
//! The listing API returns at most one page of keys per request (1000 on
//! AWS). [`fetch_listing`] keeps requesting with the returned marker until a
//! page is no longer truncated and merges all pages into one [`Listing`].
//!
//! ```text
//! FETCHING(marker) --page truncated--> FETCHING(next marker)
//! FETCHING(marker) --page complete---> DONE
//! FETCHING(marker) --fetch/parse err-> ERROR
//! FETCHING(marker) --caller stops----> ERROR (superseded)
//! ```
//!
//! Entries are kept in arrival order; sorting happens when rows are built.

use std::ops::ControlFlow;

use tracing::{debug, info, warn};

use crate::config::ListingConfig;
use crate::core::error::{FetchError, ListingError};
use crate::core::parser::parse_page;
use crate::core::query::{build_query_url, resolve_prefix};
use crate::models::{Listing, Page, PageLocation};

/// Transport for listing requests.
///
/// Implemented by the browser fetch layer and by in-memory sources in tests.
#[allow(async_fn_in_trait)]
pub trait ListingSource {
    /// GET `url` and return the response body.
    async fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// A browse action that ended in the ERROR state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationFailure {
    /// Everything merged before the failing request, in arrival order.
    pub listing: Listing,
    pub error: ListingError,
}

enum State {
    Fetching { marker: Option<String> },
    Done,
}

/// Fetch every page of the directory selected by `location`.
///
/// The prefix is resolved once, so all requests of this call list the same
/// prefix. `on_page` sees the accumulated listing after each merged page and
/// decides whether another request may be issued; breaking ends the call with
/// [`ListingError::Superseded`]. Requests are strictly sequential and never
/// retried; on failure the partial listing is handed back with the error.
pub async fn fetch_listing<S, F>(
    source: &S,
    config: &ListingConfig,
    location: &PageLocation,
    mut on_page: F,
) -> Result<Listing, PaginationFailure>
where
    S: ListingSource,
    F: FnMut(&Listing) -> ControlFlow<()>,
{
    let prefix = resolve_prefix(config, location);
    let mut listing = Listing::new(prefix.clone());
    let mut state = State::Fetching { marker: None };

    while let State::Fetching { marker } = state {
        let url = build_query_url(config, &prefix, marker.as_deref());
        debug!(%url, page = listing.pages + 1, "requesting listing page");

        let page = match fetch_page(source, &url).await {
            Ok(page) => page,
            Err(error) => {
                warn!(%url, %error, "listing request failed");
                return Err(PaginationFailure { listing, error });
            }
        };

        if let Err(error) = check_prefix(&listing, &prefix, &page) {
            return Err(PaginationFailure { listing, error });
        }

        let next_marker = page.next_marker.clone();
        listing.push_page(page);

        if on_page(&listing).is_break() && next_marker.is_some() {
            debug!(pages = listing.pages, "listing stopped by caller");
            return Err(PaginationFailure {
                listing,
                error: ListingError::Superseded,
            });
        }

        state = match next_marker {
            None => State::Done,
            Some(next) if marker.as_deref() == Some(next.as_str()) => {
                return Err(PaginationFailure {
                    listing,
                    error: ListingError::StalledMarker(next),
                });
            }
            Some(next) => State::Fetching { marker: Some(next) },
        };
    }

    info!(
        prefix = %listing.prefix,
        pages = listing.pages,
        files = listing.file_count(),
        directories = listing.directory_count(),
        "listing complete"
    );
    Ok(listing)
}

async fn fetch_page<S: ListingSource>(source: &S, url: &str) -> Result<Page, ListingError> {
    let body = source.get(url).await?;
    parse_page(&body)
}

/// Every page must echo the prefix of the first one.
///
/// Stores that do not echo a prefix are held to the requested one.
fn check_prefix(listing: &Listing, requested: &str, page: &Page) -> Result<(), ListingError> {
    let echoed = if page.prefix.is_empty() {
        requested
    } else {
        page.prefix.as_str()
    };
    let expected = if listing.pages == 0 {
        requested
    } else {
        listing.prefix.as_str()
    };

    if echoed == expected {
        Ok(())
    } else {
        Err(ListingError::PrefixChanged {
            expected: expected.to_string(),
            found: echoed.to_string(),
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::config::RawConfig;

    /// Replays canned responses and records every requested URL.
    #[derive(Default)]
    pub(crate) struct ScriptedSource {
        responses: RefCell<VecDeque<Result<String, FetchError>>>,
        pub(crate) requests: RefCell<Vec<String>>,
    }

    impl ScriptedSource {
        pub(crate) fn new(responses: Vec<Result<String, FetchError>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl ListingSource for ScriptedSource {
        async fn get(&self, url: &str) -> Result<String, FetchError> {
            self.requests.borrow_mut().push(url.to_string());
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(FetchError::NetworkError("no more responses".to_string())))
        }
    }

    /// Listing document with one object per key and one prefix per directory.
    pub(crate) fn page_xml(
        prefix: &str,
        keys: &[(&str, u64)],
        dirs: &[&str],
        next_marker: Option<&str>,
    ) -> String {
        let mut xml = format!(
            "<ListBucketResult><Prefix>{prefix}</Prefix><IsTruncated>{}</IsTruncated>",
            next_marker.is_some()
        );
        if let Some(marker) = next_marker {
            xml.push_str(&format!("<NextMarker>{marker}</NextMarker>"));
        }
        for (key, size) in keys {
            xml.push_str(&format!(
                "<Contents><Key>{key}</Key><LastModified>2024-01-01T00:00:00.000Z</LastModified><Size>{size}</Size></Contents>"
            ));
        }
        for dir in dirs {
            xml.push_str(&format!("<CommonPrefixes><Prefix>{dir}</Prefix></CommonPrefixes>"));
        }
        xml.push_str("</ListBucketResult>");
        xml
    }

    pub(crate) fn config(sort: &str) -> ListingConfig {
        let raw = RawConfig {
            bucket_url: Some("https://bucket.example.com".to_string()),
            ignore_path: Some(true),
            sort: Some(sort.to_string()),
            ..Default::default()
        };
        ListingConfig::resolve(raw, &PageLocation::from_url("https://www.example.com/"))
    }

    pub(crate) fn location(prefix: &str) -> PageLocation {
        PageLocation::from_url(&format!("https://www.example.com/?prefix={prefix}"))
    }

    fn keep_going(_: &Listing) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    fn keys(listing: &Listing) -> Vec<&str> {
        listing.entries.iter().map(|e| e.key.as_str()).collect()
    }

    #[tokio::test]
    async fn test_single_page() {
        let source = ScriptedSource::new(vec![Ok(page_xml(
            "logs/",
            &[("logs/a.log", 1), ("logs/b.log", 2)],
            &["logs/2024/"],
            None,
        ))]);

        let listing = fetch_listing(&source, &config("DEFAULT"), &location("logs/"), keep_going)
            .await
            .unwrap();

        assert_eq!(listing.file_count(), 2);
        assert_eq!(listing.directory_count(), 1);
        assert_eq!(listing.prefix, "logs/");
        assert_eq!(
            *source.requests.borrow(),
            vec!["https://bucket.example.com?delimiter=/&prefix=logs/"]
        );
    }

    #[tokio::test]
    async fn test_follows_markers_until_complete() {
        let source = ScriptedSource::new(vec![
            Ok(page_xml("", &[("a", 1), ("b", 1)], &[], Some("b"))),
            Ok(page_xml("", &[("c", 1)], &["d/"], Some("d/"))),
            Ok(page_xml("", &[("e", 1)], &[], None)),
        ]);
        let mut seen = Vec::new();

        let listing = fetch_listing(&source, &config("DEFAULT"), &location(""), |l| {
            seen.push(l.entries.len());
            ControlFlow::Continue(())
        })
        .await
        .unwrap();

        assert_eq!(keys(&listing), vec!["a", "b", "c", "d/", "e"]);
        assert_eq!(listing.pages, 3);
        assert_eq!(seen, vec![2, 4, 5]);
        assert_eq!(
            *source.requests.borrow(),
            vec![
                "https://bucket.example.com?delimiter=/",
                "https://bucket.example.com?delimiter=/&marker=b",
                "https://bucket.example.com?delimiter=/&marker=d%2F",
            ]
        );
    }

    #[tokio::test]
    async fn test_keeps_arrival_order() {
        let source = ScriptedSource::new(vec![
            Ok(page_xml("", &[("a", 500), ("b", 10)], &[], Some("b"))),
            Ok(page_xml("", &[("c", 2_000_000)], &[], None)),
        ]);

        let listing = fetch_listing(&source, &config("BIG2SMALL"), &location(""), keep_going)
            .await
            .unwrap();

        assert_eq!(keys(&listing), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_break_stops_before_next_request() {
        let source = ScriptedSource::new(vec![
            Ok(page_xml("", &[("a", 1)], &[], Some("a"))),
            Ok(page_xml("", &[("b", 1)], &[], Some("b"))),
            Ok(page_xml("", &[("c", 1)], &[], None)),
        ]);

        let failure = fetch_listing(&source, &config("DEFAULT"), &location(""), |_| {
            ControlFlow::Break(())
        })
        .await
        .unwrap_err();

        assert_eq!(failure.error, ListingError::Superseded);
        assert_eq!(keys(&failure.listing), vec!["a"]);
        assert_eq!(source.requests.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_break_on_last_page_still_completes() {
        let source = ScriptedSource::new(vec![Ok(page_xml("", &[("a", 1)], &[], None))]);

        let listing = fetch_listing(&source, &config("DEFAULT"), &location(""), |_| {
            ControlFlow::Break(())
        })
        .await
        .unwrap();

        assert_eq!(keys(&listing), vec!["a"]);
    }

    #[tokio::test]
    async fn test_failure_keeps_partial_listing() {
        let source = ScriptedSource::new(vec![
            Ok(page_xml("", &[("a", 1)], &[], Some("a"))),
            Err(FetchError::HttpError(503)),
        ]);

        let failure = fetch_listing(&source, &config("DEFAULT"), &location(""), keep_going)
            .await
            .unwrap_err();

        assert_eq!(failure.error, ListingError::Fetch(FetchError::HttpError(503)));
        assert_eq!(keys(&failure.listing), vec!["a"]);
        assert_eq!(source.requests.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_response_aborts() {
        let source = ScriptedSource::new(vec![Ok("<html>oops</html>".to_string())]);

        let failure = fetch_listing(&source, &config("DEFAULT"), &location(""), keep_going)
            .await
            .unwrap_err();

        assert!(matches!(failure.error, ListingError::Parse(_)));
        assert_eq!(failure.listing.pages, 0);
    }

    #[tokio::test]
    async fn test_stalled_marker_stops() {
        let source = ScriptedSource::new(vec![
            Ok(page_xml("", &[("a", 1)], &[], Some("a"))),
            Ok(page_xml("", &[("a", 1)], &[], Some("a"))),
        ]);

        let failure = fetch_listing(&source, &config("DEFAULT"), &location(""), keep_going)
            .await
            .unwrap_err();

        assert_eq!(failure.error, ListingError::StalledMarker("a".to_string()));
        assert_eq!(source.requests.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_prefix_change_is_rejected() {
        let source = ScriptedSource::new(vec![
            Ok(page_xml("a/", &[("a/1", 1)], &[], Some("a/1"))),
            Ok(page_xml("b/", &[("b/1", 1)], &[], None)),
        ]);

        let failure = fetch_listing(&source, &config("DEFAULT"), &location("a/"), keep_going)
            .await
            .unwrap_err();

        assert_eq!(
            failure.error,
            ListingError::PrefixChanged {
                expected: "a/".to_string(),
                found: "b/".to_string(),
            }
        );
    }
}
