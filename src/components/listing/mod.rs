//! Bucket listing UI components.
//!
//! Components:
//! - [`Listing`] - Listing region bound to the application's listing state
//! - [`Navigation`] - Breadcrumb trail for the current prefix
//! - [`ListingTable`] - Name / Last modified / Size table

mod navigation;
mod table;

use leptos::prelude::*;
use leptos_icons::Icon;

pub use navigation::Navigation;
pub use table::ListingTable;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{ListingState, ListingView};

stylance::import_crate_style!(css, "src/components/listing/listing.module.css");

/// Listing region: loading placeholder, rows, or error banner.
///
/// Rows stay on screen when a later page fails; the error is shown below
/// them.
#[component]
pub fn Listing() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = ctx.listing;

    view! {
        <div class=css::listing>
            {move || match state.get() {
                ListingState::Loading => {
                    view! { <p class=css::loading>"loading..."</p> }.into_any()
                }
                ListingState::Ready(listing) => view! { <ListingBody listing=listing /> }.into_any(),
                ListingState::Failed { view: partial, error } => {
                    view! {
                        {partial.map(|listing| view! { <ListingBody listing=listing /> })}
                        <p class=css::error role="alert">
                            <span class=css::errorIcon aria-hidden="true"><Icon icon=ic::ERROR /></span>
                            {format!("Error: {error}")}
                        </p>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

/// Breadcrumbs and table for one published view.
#[component]
fn ListingBody(listing: ListingView) -> impl IntoView {
    let more = !listing.complete;

    view! {
        <Navigation crumbs=listing.navigation />
        <ListingTable rows=listing.rows />
        {more.then(|| view! { <p class=css::loading>"loading more..."</p> })}
    }
}
