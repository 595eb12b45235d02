//! Aggregated listing and the view handed to the display components.

use super::{Entry, Page};

// =============================================================================
// Aggregation
// =============================================================================

/// Entries of one logical directory view, merged across all fetched pages.
///
/// Lives for a single browse action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    /// Prefix shared by every entry (empty at the bucket root).
    pub prefix: String,
    /// Page arrival order; within a page, files before directories.
    pub entries: Vec<Entry>,
    /// Number of pages merged so far.
    pub pages: usize,
}

impl Listing {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            entries: Vec::new(),
            pages: 0,
        }
    }

    /// Append one page's files followed by its directories.
    pub fn push_page(&mut self, page: Page) {
        self.entries.extend(page.files);
        self.entries.extend(page.directories);
        self.pages += 1;
    }

    pub fn file_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_dir()).count()
    }

    pub fn directory_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_dir()).count()
    }
}

// =============================================================================
// Display Boundary
// =============================================================================

/// What a table row points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    /// The synthesized `../` row.
    Parent,
    Directory,
    File,
}

/// One rendered table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub kind: RowKind,
    /// Key relative to the current prefix.
    pub text: String,
    pub href: String,
    pub last_modified: String,
    pub size: String,
}

/// One breadcrumb segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: String,
    /// The segment for the directory being shown.
    pub current: bool,
}

/// Navigation and rows ready for display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingView {
    pub navigation: Vec<Crumb>,
    pub rows: Vec<Row>,
    /// False while more pages are still being fetched.
    pub complete: bool,
}

/// State of the listing region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListingState {
    /// No page has arrived yet.
    #[default]
    Loading,
    /// Rows are available; see [`ListingView::complete`].
    Ready(ListingView),
    /// The browse action failed. Rows published before the failure are kept.
    Failed {
        view: Option<ListingView>,
        error: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_page_keeps_files_before_directories() {
        let mut listing = Listing::new("photos/");
        listing.push_page(Page {
            files: vec![Entry::file("photos/a.jpg", "2024-01-01T00:00:00.000Z", 10)],
            directories: vec![Entry::directory("photos/2023/")],
            next_marker: Some("photos%2Fa.jpg".to_string()),
            prefix: "photos/".to_string(),
        });
        listing.push_page(Page {
            files: vec![Entry::file("photos/b.jpg", "2024-01-02T00:00:00.000Z", 20)],
            directories: vec![],
            next_marker: None,
            prefix: "photos/".to_string(),
        });

        let keys: Vec<&str> = listing.entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["photos/a.jpg", "photos/2023/", "photos/b.jpg"]);
        assert_eq!(listing.pages, 2);
        assert_eq!(listing.file_count(), 2);
        assert_eq!(listing.directory_count(), 1);
    }
}
