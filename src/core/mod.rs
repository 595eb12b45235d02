//! Core listing logic.
//!
//! This module provides:
//! - [`query`] - listing API request URLs and prefix resolution
//! - [`parser`] - listing API response parsing
//! - [`paginator`] - the pagination engine
//! - [`sort`] - entry ordering
//! - [`rows`] - table rows and breadcrumbs
//! - [`browse`] and [`BrowseGeneration`] - browse actions that drop stale results

pub mod error;
pub mod paginator;
pub mod parser;
pub mod query;
pub mod rows;
mod session;
pub mod sort;

pub use paginator::ListingSource;
pub use session::{BrowseGeneration, browse};
