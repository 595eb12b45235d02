//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`WebSource`] - Network fetching with timeout
//! - [`format_size`] - Human-readable byte counts
//! - [`encode_component`], [`encode_path`], [`decode`] - URL encoding
//! - [`logging`] - `tracing` output to the browser console

pub mod dom;
mod fetch;
mod format;
pub mod logging;
mod url;

pub use fetch::WebSource;
pub use format::format_size;
pub use url::{decode, encode_component, encode_path};
