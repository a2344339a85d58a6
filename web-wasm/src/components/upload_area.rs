//! Image drop-zone component
//!
//! Collects JPEG/PNG files via drag & drop or the file picker and hands them
//! to the wizard as `ImageEntry` values. No file contents are read; extraction
//! downstream is simulated.

use leptos::prelude::*;
use notes_qa_common::ImageEntry;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileList};

/// MIME types the wizard's image path accepts
const ACCEPTED_MIME_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

pub(crate) fn is_accepted_image(mime_type: &str) -> bool {
    ACCEPTED_MIME_TYPES.contains(&mime_type)
}

fn entry_from_file(file: &File) -> ImageEntry {
    ImageEntry {
        file_name: file.name(),
        mime_type: file.type_(),
        size_bytes: file.size() as u64,
    }
}

/// Keep only accepted image types; dropped files outside the filter are
/// discarded silently, like the picker's accept attribute would
fn collect_accepted(files: FileList) -> Vec<ImageEntry> {
    let mut entries = Vec::new();
    for i in 0..files.length() {
        if let Some(file) = files.get(i) {
            if is_accepted_image(&file.type_()) {
                entries.push(entry_from_file(&file));
            }
        }
    }
    entries
}

#[component]
pub fn UploadArea<F>(on_images_selected: F) -> impl IntoView
where
    F: Fn(Vec<ImageEntry>) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let handle_files = {
        let on_images_selected = on_images_selected.clone();
        move |files: FileList| {
            on_images_selected(collect_accepted(files));
        }
    };

    let on_drop = {
        let handle_files = handle_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    handle_files(files);
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let handle_files = handle_files.clone();
        move |_| {
            // open the file-picker dialog
            let document = web_sys::window().unwrap().document().unwrap();
            let input: web_sys::HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept("image/jpeg,image/png");
            input.set_multiple(true);

            let handle_files = handle_files.clone();
            let picker = input.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(files) = picker.files() {
                    handle_files(files);
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <div
            class="upload-area"
            class:dragover=move || is_dragover.get()
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"🖼"</div>
            <p>"Drag & drop images here, or click to select files"</p>
            <p class="text-muted">"Supported formats: JPEG, PNG"</p>
        </div>
    }
}
