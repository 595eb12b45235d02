mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use config::{LISTING_ELEMENT_ID, ListingConfig, RawConfig};
use leptos::prelude::*;
use models::PageLocation;
use tracing::info;

fn main() {
    console_error_panic_hook::set_once();

    let raw = RawConfig::from_page();
    utils::logging::init(raw.log_level());

    let config = ListingConfig::resolve(raw, &PageLocation::current());
    info!(
        bucket = %config.bucket_url,
        root = %config.root_dir,
        ignore_path = config.ignore_path,
        sort = %config.sort,
        "starting bucket listing"
    );

    match utils::dom::element_by_id(LISTING_ELEMENT_ID) {
        Some(root) => mount_to(root, move || view! { <App config=config /> }).forget(),
        None => mount_to_body(move || view! { <App config=config /> }),
    }
}
