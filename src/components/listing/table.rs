//! Listing table.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::{Row, RowKind};

stylance::import_crate_style!(css, "src/components/listing/table.module.css");

fn get_icon(kind: RowKind) -> IconData {
    match kind {
        RowKind::Parent => ic::PARENT,
        RowKind::Directory => ic::FOLDER,
        RowKind::File => ic::FILE,
    }
}

/// Header row followed by one row per entry, parent row first.
#[component]
pub fn ListingTable(rows: Vec<Row>) -> impl IntoView {
    view! {
        <table class=css::table>
            <tbody>
                <tr class=css::header>
                    <th class=css::name>"Name"</th>
                    <th class=css::modified>"Last modified"</th>
                    <th class=css::size>"Size"</th>
                </tr>
                {rows
                    .into_iter()
                    .map(|row| view! { <ListingRow row=row /> })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn ListingRow(row: Row) -> impl IntoView {
    let icon = get_icon(row.kind);
    let name_class = match row.kind {
        RowKind::File => css::name.to_string(),
        RowKind::Parent | RowKind::Directory => format!("{} {}", css::name, css::nameDir),
    };

    view! {
        <tr class=css::row>
            <td class=name_class>
                <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
                <a href=row.href>{row.text}</a>
            </td>
            <td class=css::modified>{row.last_modified}</td>
            <td class=css::size>{row.size}</td>
        </tr>
    }
}
