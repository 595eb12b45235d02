//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Entry`], [`EntryKind`], [`Page`] - Parsed listing API responses
//! - [`Listing`] - Entries aggregated across pages for one directory view
//! - [`Row`], [`Crumb`], [`ListingView`], [`ListingState`] - Display boundary
//! - [`PageLocation`] - Snapshot of the browser location
//! - [`SortMode`] - Configured ordering of listed entries

mod entry;
mod listing;
mod location;
mod sort;

pub use entry::{Entry, EntryKind, Page};
pub use listing::{Crumb, Listing, ListingState, ListingView, Row, RowKind};
pub use location::PageLocation;
pub use sort::SortMode;
