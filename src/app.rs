//! Root application module.
//!
//! Contains the main App component and AppContext definition, and starts
//! browse actions following Leptos conventions.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::debug;

use crate::components::Listing;
use crate::config::{FETCH_TIMEOUT_MS, ListingConfig};
use crate::core::{BrowseGeneration, browse};
use crate::models::{ListingState, PageLocation};
use crate::utils::WebSource;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Configuration**: resolved once at startup, never mutated
/// - **Listing state**: the only state the listing region renders
/// - **Generation**: identifies the browse action allowed to publish
#[derive(Clone)]
pub struct AppContext {
    /// Listing settings for this page load.
    pub config: Arc<ListingConfig>,

    /// State of the listing region.
    pub listing: RwSignal<ListingState>,

    generations: BrowseGeneration,
}

impl AppContext {
    pub fn new(config: ListingConfig) -> Self {
        Self {
            config: Arc::new(config),
            listing: RwSignal::new(ListingState::Loading),
            generations: BrowseGeneration::new(),
        }
    }

    /// Start listing the directory selected by the current location.
    ///
    /// Supersedes any browse action still in flight.
    pub fn browse(&self) {
        let generation = self.generations.begin();
        let location = PageLocation::current();
        debug!(generation, path = %location.pathname, search = %location.search, "browse");

        self.listing.set(ListingState::Loading);

        let config = Arc::clone(&self.config);
        let generations = self.generations.clone();
        let listing = self.listing;

        spawn_local(async move {
            let source = WebSource::new(FETCH_TIMEOUT_MS);
            browse(
                &source,
                &config,
                &location,
                &generations,
                generation,
                |state| listing.set(state),
            )
            .await;
        });
    }
}

/// Root application component.
///
/// This component:
/// - Creates and provides the AppContext
/// - Starts the first browse action and another one on every `popstate`
/// - Renders the listing region
#[component]
pub fn App(config: ListingConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    provide_context(ctx.clone());

    // History navigation within the same document (back/forward)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;

        let ctx = ctx.clone();
        let closure = Closure::wrap(Box::new(move || {
            ctx.browse();
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    ctx.browse();

    view! { <Listing /> }
}
