//! Preview modal component.
//!
//! Shows the open preview over the file grids. The modal owns the keyboard
//! wiring for the preview session: ArrowRight/ArrowLeft step through the
//! current file list, Escape closes. Clicking the backdrop (but not the
//! modal content) also closes.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::{MediaKind, RenderedContent};
use crate::models::Entry;
use crate::utils::fetch::download_url;

stylance::import_crate_style!(css, "src/components/explorer/preview.module.css");

/// Modal file preview with next/previous stepping.
#[component]
pub fn PreviewModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // The previewed entry is resolved through the store: the session only
    // holds a position into the store's current file list.
    let file = Signal::derive(move || {
        ctx.preview
            .with(|p| p.file_index())
            .and_then(|i| ctx.drive.with(|d| d.file_at(i).cloned()))
    });
    let file_name = Signal::derive(move || file.get().map(|f| f.name).unwrap_or_default());
    let download_href =
        Signal::derive(move || file.get().map(|f| download_url(&f.path)).unwrap_or_default());
    let position = Signal::derive(move || {
        let total = ctx.drive.with(|d| d.files().len());
        ctx.preview
            .with(|p| p.file_index())
            .map(|i| format!("{} / {}", i + 1, total))
    });
    let loading = Signal::derive(move || ctx.preview.with(|p| p.is_loading()));
    let content = Signal::derive(move || ctx.preview.with(|p| p.content().cloned()));

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Escape" | "q" => {
            ev.prevent_default();
            ctx.close_preview();
        }
        "ArrowRight" | "ArrowDown" => {
            ev.prevent_default();
            ctx.step_preview(1);
        }
        "ArrowLeft" | "ArrowUp" => {
            ev.prevent_default();
            ctx.step_preview(-1);
        }
        _ => {}
    };

    // Focus the backdrop on mount so key presses land here.
    let backdrop_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        if let Some(el) = backdrop_ref.get() {
            let _ = el.focus();
        }
    });

    view! {
        <div
            node_ref=backdrop_ref
            class=css::backdrop
            tabindex="-1"
            role="dialog"
            aria-modal="true"
            on:keydown=handle_keydown
            on:click=move |_| ctx.close_preview()
        >
            <div class=css::modal on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <header class=css::header>
                    <span class=css::filename title=move || file_name.get()>
                        {move || file_name.get()}
                    </span>
                    {move || {
                        position.get().map(|p| view! { <span class=css::position>{p}</span> })
                    }}
                    <div class=css::actions>
                        <a
                            class=css::action
                            href=move || download_href.get()
                            download=move || file_name.get()
                            title="Download"
                            aria-label="Download file"
                        >
                            <Icon icon=ic::DOWNLOAD />
                        </a>
                        <button
                            class=css::action
                            on:click=move |_| ctx.close_preview()
                            title="Close (Esc)"
                            aria-label="Close preview"
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                </header>

                <div class=css::body>
                    <PreviewArea
                        loading=loading
                        content=content
                        file=file
                        download_href=download_href
                    />
                </div>

                <footer class=css::footer>
                    <button
                        class=css::step
                        on:click=move |_| ctx.step_preview(-1)
                        title="Previous file (Left arrow)"
                        aria-label="Previous file"
                    >
                        <Icon icon=ic::CHEVRON_LEFT />
                    </button>
                    <button
                        class=css::step
                        on:click=move |_| ctx.step_preview(1)
                        title="Next file (Right arrow)"
                        aria-label="Next file"
                    >
                        <Icon icon=ic::CHEVRON_RIGHT />
                    </button>
                </footer>
            </div>
        </div>
    }
}

/// Rendered content area of the modal.
///
/// While a step is resolving the previous content stays visible; the loading
/// state only fills the area when nothing has arrived yet.
#[component]
fn PreviewArea(
    loading: Signal<bool>,
    content: Signal<Option<RenderedContent>>,
    file: Signal<Option<Entry>>,
    download_href: Signal<String>,
) -> impl IntoView {
    view! {
        {move || {
            let name = file.get().map(|f| f.name).unwrap_or_default();
            match content.get() {
                None => {
                    view! {
                        <div class=css::placeholder>
                            {if loading.get() { "Loading preview..." } else { "" }}
                        </div>
                    }
                        .into_any()
                }
                Some(RenderedContent::Text(text)) => {
                    // Inserted as a text node; markup in file contents stays inert.
                    view! { <pre class=css::text>{text}</pre> }.into_any()
                }
                Some(RenderedContent::Media { object_url, kind, .. }) => {
                    match kind {
                        MediaKind::Image => {
                            view! { <img class=css::media src=object_url alt=name /> }.into_any()
                        }
                        MediaKind::Video => {
                            view! { <video class=css::media src=object_url controls=true></video> }
                                .into_any()
                        }
                        MediaKind::Audio => {
                            view! { <audio class=css::audio src=object_url controls=true></audio> }
                                .into_any()
                        }
                    }
                }
                Some(RenderedContent::Unavailable) => {
                    view! {
                        <div class=css::placeholder>
                            <p>"Preview not available."</p>
                            <a class=css::downloadLink href=move || download_href.get()>
                                "Download"
                            </a>
                        </div>
                    }
                        .into_any()
                }
            }
        }}
    }
}
