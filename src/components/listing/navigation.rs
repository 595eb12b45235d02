//! Breadcrumb navigation for the current prefix.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::Crumb;

stylance::import_crate_style!(css, "src/components/listing/navigation.module.css");

/// Breadcrumb trail: bucket root, then one link per directory segment.
///
/// The crumb for the directory being shown is not a link.
#[component]
pub fn Navigation(crumbs: Vec<Crumb>) -> impl IntoView {
    let segments = crumbs
        .into_iter()
        .enumerate()
        .map(|(idx, crumb)| {
            let icon = if idx == 0 { ic::BUCKET } else { ic::FOLDER };
            let show_separator = idx > 0;

            view! {
                <>
                    {show_separator.then(|| view! {
                        <span class=css::separator aria-hidden="true">
                            <Icon icon=ic::CHEVRON_RIGHT />
                        </span>
                    })}
                    {if crumb.current {
                        view! {
                            <span class=format!("{} {}", css::segment, css::segmentCurrent) aria-current="page">
                                <span class=css::icon><Icon icon=icon /></span>
                                <span class=css::label>{crumb.label}</span>
                            </span>
                        }.into_any()
                    } else {
                        view! {
                            <a class=css::segment href=crumb.href>
                                <span class=css::icon><Icon icon=icon /></span>
                                <span class=css::label>{crumb.label}</span>
                            </a>
                        }.into_any()
                    }}
                </>
            }
        })
        .collect_view();

    view! {
        <nav class=css::navigation aria-label="Breadcrumb">
            {segments}
        </nav>
    }
}
