//! Path bar component.
//!
//! Displays the current path as `~/` plus clickable breadcrumb segments.
//! Every segment but the last navigates to its prefix of the path.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::{AppContext, NavOrigin};
use crate::components::icons as ic;
use crate::core::path;

stylance::import_crate_style!(css, "src/components/explorer/pathbar.module.css");

/// Segment data for path bar rendering.
#[derive(Clone)]
struct Crumb {
    /// Display label
    label: String,
    /// Target path for navigation (None = current/disabled)
    target: Option<String>,
}

/// Breadcrumb path bar for the current folder.
#[component]
pub fn PathBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <nav class=css::pathbar aria-label="Current path">
            {move || {
                let current = ctx.drive.with(|d| d.current_path().to_string());
                let segments = path::segments(&current);

                let mut crumbs = Vec::with_capacity(segments.len() + 1);
                crumbs.push(Crumb {
                    label: "~".to_string(),
                    target: (!segments.is_empty()).then(String::new),
                });
                let mut prefix = String::new();
                for (idx, segment) in segments.iter().enumerate() {
                    prefix = path::join(&prefix, segment);
                    let is_last = idx == segments.len() - 1;
                    crumbs.push(Crumb {
                        label: (*segment).to_string(),
                        target: (!is_last).then(|| prefix.clone()),
                    });
                }

                crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(idx, crumb)| {
                        let icon = if idx == 0 { Some(ic::HOME) } else { None };
                        view! {
                            {(idx > 0)
                                .then(|| {
                                    view! {
                                        <span class=css::separator aria-hidden="true">
                                            <Icon icon=ic::CHEVRON_RIGHT />
                                        </span>
                                    }
                                })}
                            <Segment crumb=crumb icon=icon />
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

/// A single path segment, clickable when it has a navigation target.
#[component]
fn Segment(crumb: Crumb, icon: Option<icondata::Icon>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let Crumb { label, target } = crumb;
    let is_current = target.is_none();
    let class = if is_current {
        format!("{} {}", css::segment, css::segmentCurrent)
    } else {
        css::segment.to_string()
    };

    view! {
        <button
            class=class
            disabled=is_current
            on:click=move |_| {
                if let Some(target) = &target {
                    ctx.navigate_to(target, NavOrigin::User);
                }
            }
        >
            {icon.map(|icon| view! { <span class=css::icon><Icon icon=icon /></span> })}
            <span class=css::label>{label}</span>
        </button>
    }
}
