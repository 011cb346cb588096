//! Main explorer component.
//!
//! The drive browser view with header, folder/file grids, path bar, and the
//! preview modal. Also owns the two pieces of history wiring: the initial
//! load from the current location and the `popstate` listener that re-drives
//! the directory store on back/forward navigation.

use leptos::prelude::*;

use super::{FileList, PathBar, PreviewModal};
use crate::app::{AppContext, NavOrigin};
use crate::config::APP_NAME;
use crate::models::DriveRoute;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Drive explorer view component.
#[component]
pub fn Explorer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Initial load from the current location; no history entry is pushed
    // for the entry the browser already sits on.
    ctx.navigate_to(DriveRoute::current().path(), NavOrigin::History);

    // Back/forward notifications decode the path from the new location and
    // re-drive the store, again without pushing (runs once on mount).
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;

        let closure = Closure::wrap(Box::new(move || {
            let route = DriveRoute::current();
            let differs = ctx
                .drive
                .with_untracked(|d| d.current_path() != route.path());
            if differs {
                ctx.navigate_to(route.path(), NavOrigin::History);
            }
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let loading = Signal::derive(move || {
        ctx.drive.with(|d| d.is_loading()) || ctx.preview.with(|p| p.is_loading())
    });
    let error = Signal::derive(move || ctx.drive.with(|d| d.error().map(|e| e.to_string())));
    let preview_open = Signal::derive(move || ctx.preview.with(|p| p.is_open()));

    view! {
        <div class=css::explorer>
            <header class=css::header>
                <span class=css::title>{APP_NAME}</span>
                <PathBar />
            </header>

            <Show when=move || loading.get()>
                <div class=css::loading role="status">"Now Loading..."</div>
            </Show>

            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <div class=css::error role="alert">
                                <p>"Error loading directory."</p>
                                <p class=css::errorDetail>{message}</p>
                            </div>
                        }
                    })
            }}

            <FileList />

            <Show when=move || preview_open.get()>
                <PreviewModal />
            </Show>
        </div>
    }
}
