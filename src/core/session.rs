//! Browse actions.
//!
//! A browse action fetches one directory and publishes its state to the
//! listing region. Actions are numbered; only the newest one may publish or
//! request further pages, so a slow response for a directory the user already
//! left is dropped instead of overwriting the current listing.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, error};

use crate::config::ListingConfig;
use crate::core::paginator::{ListingSource, fetch_listing};
use crate::core::rows::build_view;
use crate::models::{ListingState, PageLocation};

/// Counter identifying the current browse action.
#[derive(Clone, Debug, Default)]
pub struct BrowseGeneration(Arc<AtomicU64>);

impl BrowseGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new action, superseding all earlier ones.
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.0.load(Ordering::Relaxed) == generation
    }
}

/// Run browse action `generation` to completion.
///
/// Rows are published after every page (marked incomplete until the last
/// one). On failure the rows already fetched stay, followed by the error.
/// Once `generation` is no longer current nothing is published and no further
/// page is requested.
pub async fn browse<S, P>(
    source: &S,
    config: &ListingConfig,
    location: &PageLocation,
    generations: &BrowseGeneration,
    generation: u64,
    mut publish: P,
) where
    S: ListingSource,
    P: FnMut(ListingState),
{
    if !generations.is_current(generation) {
        debug!(generation, "skipping superseded browse action");
        return;
    }

    let result = fetch_listing(source, config, location, |listing| {
        if !generations.is_current(generation) {
            return ControlFlow::Break(());
        }
        publish(ListingState::Ready(build_view(listing, config, location, false)));
        ControlFlow::Continue(())
    })
    .await;

    if !generations.is_current(generation) {
        debug!(generation, "dropping result of superseded browse action");
        return;
    }

    let state = match result {
        Ok(listing) => ListingState::Ready(build_view(&listing, config, location, true)),
        Err(failure) => {
            error!(error = %failure.error, pages = failure.listing.pages, "listing failed");
            ListingState::Failed {
                view: (failure.listing.pages > 0)
                    .then(|| build_view(&failure.listing, config, location, false)),
                error: failure.error.to_string(),
            }
        }
    };
    publish(state);
}
