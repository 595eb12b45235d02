//! UI components built with Leptos.
//!
//! - [`listing`] - Bucket listing: breadcrumbs, table, loading and error states
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod listing;

pub use listing::Listing;
