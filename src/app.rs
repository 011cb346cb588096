//! Root application module.
//!
//! Contains the main App component, the [`AppContext`] that owns all
//! navigation state, and the controller methods that sequence remote calls
//! against that state.
//!
//! # Architecture
//!
//! [`DirectoryStore`] and [`PreviewSession`] are plain state machines that
//! know nothing about the network or the DOM. The context wraps each in a
//! signal and drives them: it issues a ticket, awaits the fetch on the local
//! task queue, and applies the outcome through the ticket so that a result
//! arriving after a newer request was issued is dropped. Components only
//! read the signals and call the controller methods.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::Explorer;
use crate::core::{
    DirectoryStore, MediaKind, PresentOutcome, PreviewSession, RenderedContent, path,
};
use crate::models::{DirectoryListing, DriveRoute, Entry, PreviewProbe};
use crate::utils::fetch::{
    download_url, fetch_json, fetch_object_url, fetch_text, list_url, probe_url, revoke_object_url,
};

// ============================================================================
// AppContext
// ============================================================================

/// What triggered a navigation.
///
/// Decides whether the navigation writes a history entry: user interaction
/// pushes exactly one entry when the listing applies; back/forward
/// notifications and the initial load leave the history stack alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOrigin {
    /// Folder click, ".." click, breadcrumb click.
    User,
    /// Back/forward notification or initial page load.
    History,
}

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Directory listing state for the displayed folder.
    pub drive: RwSignal<DirectoryStore>,
    /// State of the open file preview, if any.
    pub preview: RwSignal<PreviewSession>,
}

impl AppContext {
    /// Creates a new application context with empty state.
    pub fn new() -> Self {
        Self {
            drive: RwSignal::new(DirectoryStore::new()),
            preview: RwSignal::new(PreviewSession::new()),
        }
    }

    /// Navigate the explorer to `path`.
    ///
    /// Closes any open preview (its file index belongs to the outgoing
    /// listing), issues the listing fetch, and on success replaces the
    /// directory state. User-originated navigations push one history entry
    /// as part of the successful completion, so a superseded or failed
    /// request never lands on the history stack.
    pub fn navigate_to(&self, target: &str, origin: NavOrigin) {
        self.close_preview();

        let Some(ticket) = self.drive.try_update(|d| d.begin(target)) else {
            return;
        };
        let drive = self.drive;
        spawn_local(async move {
            match fetch_json::<DirectoryListing>(&list_url(ticket.path())).await {
                Ok(listing) => {
                    let applied = drive
                        .try_update(|d| d.complete(&ticket, listing))
                        .unwrap_or(false);
                    if applied && origin == NavOrigin::User {
                        DriveRoute::new(ticket.path()).push();
                    }
                }
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("failed to load directory {:?}: {}", ticket.path(), err).into(),
                    );
                    drive.try_update(|d| d.fail(&ticket, err));
                }
            }
        });
    }

    /// Navigate one level up from the current folder.
    pub fn navigate_to_parent(&self) {
        let parent = self
            .drive
            .with_untracked(|d| path::parent_of(d.current_path()));
        self.navigate_to(&parent, NavOrigin::User);
    }

    /// Open the preview for the file at `index` in the current file list.
    ///
    /// Resolution is two-step: probe the MIME type, then fetch the content
    /// in the representation that type calls for. Whatever fails along the
    /// way degrades to the download-only placeholder.
    pub fn open_preview(&self, index: usize) {
        let Some(file) = self.drive.with_untracked(|d| d.file_at(index).cloned()) else {
            return;
        };
        let Some(ticket) = self.preview.try_update(|p| p.begin(index)) else {
            return;
        };
        let preview = self.preview;
        spawn_local(async move {
            let content = resolve_content(&file).await;
            let outcome = preview.try_update(|p| p.present(&ticket, content));
            if let Some(url) = outcome.and_then(PresentOutcome::url_to_revoke) {
                revoke_object_url(&url);
            }
        });
    }

    /// Step the open preview to a neighboring file.
    ///
    /// No-op when no preview is open or the step would leave the file list.
    pub fn step_preview(&self, delta: isize) {
        let len = self.drive.with_untracked(|d| d.files().len());
        let Some(next) = self.preview.with_untracked(|p| p.step_target(delta, len)) else {
            return;
        };
        self.open_preview(next);
    }

    /// Close the preview and release its object URL, if it held one.
    pub fn close_preview(&self) {
        if let Some(url) = self.preview.try_update(|p| p.close()).flatten() {
            revoke_object_url(&url);
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a file into renderable preview content.
async fn resolve_content(file: &Entry) -> RenderedContent {
    let mime = match fetch_json::<PreviewProbe>(&probe_url(&file.path)).await {
        Ok(probe) => probe.mime,
        Err(err) => {
            web_sys::console::warn_1(
                &format!("preview probe failed for {:?}, download only: {}", file.path, err).into(),
            );
            return RenderedContent::Unavailable;
        }
    };

    if mime.starts_with("text/") {
        match fetch_text(&download_url(&file.path)).await {
            Ok(text) => RenderedContent::Text(text),
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("preview content failed for {:?}: {}", file.path, err).into(),
                );
                RenderedContent::Unavailable
            }
        }
    } else if let Some(kind) = MediaKind::from_mime(&mime) {
        match fetch_object_url(&download_url(&file.path), &mime).await {
            Ok(object_url) => RenderedContent::Media {
                mime,
                object_url,
                kind,
            },
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("preview content failed for {:?}: {}", file.path, err).into(),
                );
                RenderedContent::Unavailable
            }
        }
    } else {
        RenderedContent::Unavailable
    }
}

// ============================================================================
// App component
// ============================================================================

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <div class="app-error">
                    <h1>"Something went wrong"</h1>
                    <ul>
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>
            }
        }>
            <Explorer />
        </ErrorBoundary>
    }
}
