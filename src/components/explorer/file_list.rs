//! Folder and file grids for the explorer view.
//!
//! Folders render above files, each group already sorted by the store.
//! Clicking a folder navigates into it; clicking a file opens its preview.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::{AppContext, NavOrigin};
use crate::components::icons as ic;
use crate::config::NAME_DISPLAY_LEN;
use crate::models::{Entry, FileType};
use crate::utils::format::truncate_name;

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let at_root = Signal::derive(move || ctx.drive.with(|d| d.current_path().is_empty()));
    let folders = Signal::derive(move || ctx.drive.with(|d| d.folders().to_vec()));
    // Pair each file with its position so a click can address the preview
    // session by index into the sorted list.
    let files = Signal::derive(move || {
        ctx.drive.with(|d| {
            d.files()
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class=css::grids>
            <div class=css::grid role="grid" aria-label="Folders">
                <Show when=move || !at_root.get()>
                    <ParentItem />
                </Show>
                <For
                    each=move || folders.get()
                    key=|entry| entry.path.clone()
                    children=move |entry| view! { <FolderItem entry=entry /> }
                />
            </div>

            <div class=css::grid role="grid" aria-label="Files">
                <For
                    each=move || files.get()
                    key=|(_, entry)| entry.path.clone()
                    children=move |(index, entry)| view! { <FileItem index=index entry=entry /> }
                />
            </div>
        </div>
    }
}

/// ".." item navigating one level up.
#[component]
fn ParentItem() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <button
            class=format!("{} {}", css::item, css::parent)
            on:click=move |_| ctx.navigate_to_parent()
            aria-label="Parent folder"
        >
            <span class=css::icon aria-hidden="true"><Icon icon=ic::FOLDER_OPEN /></span>
            <span class=css::name>".."</span>
        </button>
    }
}

#[component]
fn FolderItem(entry: Entry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let display_name = truncate_name(&entry.name, NAME_DISPLAY_LEN);
    let full_name = entry.name.clone();
    let target = entry.path.clone();

    view! {
        <button
            class=css::item
            on:click=move |_| ctx.navigate_to(&target, NavOrigin::User)
            aria-label=format!("Folder: {}", full_name.clone())
        >
            <span class=css::icon aria-hidden="true"><Icon icon=ic::FOLDER /></span>
            <span class=css::name title=full_name.clone()>{display_name}</span>
        </button>
    }
}

#[component]
fn FileItem(index: usize, entry: Entry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = ic::file_icon(FileType::from_name(&entry.name));
    let display_name = truncate_name(&entry.name, NAME_DISPLAY_LEN);
    let full_name = entry.name.clone();

    view! {
        <button
            class=css::item
            on:click=move |_| ctx.open_preview(index)
            aria-label=format!("File: {}", full_name.clone())
        >
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=css::name title=full_name.clone()>{display_name}</span>
        </button>
    }
}
