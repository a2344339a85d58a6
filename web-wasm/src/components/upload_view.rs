//! Upload wizard view
//!
//! Strictly linear: choose the input kind, collect images (or raw text),
//! review the extracted texts, then review and submit the chunks. All state
//! lives in one `UploadWizard` signal and is discarded on final submission.

use crate::components::step_indicator::StepIndicator;
use crate::components::upload_area::UploadArea;
use crate::submission::chunks_to_json;
use gloo::console;
use gloo::dialogs::alert;
use leptos::prelude::*;
use notes_qa_common::{ImageEntry, TextChunk, UploadKind, UploadWizard, WizardStep};

#[component]
pub fn UploadView() -> impl IntoView {
    let wizard = RwSignal::new(UploadWizard::new());

    let step = Memo::new(move |_| wizard.with(|w| w.step));
    let kind = Memo::new(move |_| wizard.with(|w| w.kind));
    let image_count = Memo::new(move |_| wizard.with(|w| w.images.len()));

    let on_images_selected = move |entries: Vec<ImageEntry>| {
        wizard.update(|w| w.set_images(entries));
    };

    let on_process_images = move |_| {
        wizard.update(|w| {
            if let Err(e) = w.extract_texts() {
                console::warn!(e.to_string());
            }
        });
    };

    let on_confirm_texts = move |_| {
        wizard.update(|w| {
            if let Err(e) = w.confirm_texts() {
                console::warn!(e.to_string());
            }
        });
    };

    let on_process_text = move |_| {
        wizard.update(|w| {
            if let Err(e) = w.process_text() {
                console::warn!(e.to_string());
            }
        });
    };

    let on_submit_all = move |_| {
        let chunks = wizard.try_update(|w| w.submit()).unwrap_or_default();
        match chunks_to_json(&chunks) {
            Ok(json) => console::log!("upload payload:", json),
            Err(e) => console::warn!(e.to_string()),
        }
        alert("Notes uploaded successfully!");
    };

    view! {
        <section class="upload-view">
            <h2>"Upload Your Notes"</h2>
            <StepIndicator step=step />

            <Show when=move || kind.get().is_none()>
                <div class="kind-chooser">
                    <button
                        class="kind-card"
                        on:click=move |_| wizard.update(|w| w.select_kind(UploadKind::Image))
                    >
                        <div class="kind-icon">"🖼"</div>
                        <h3>"Upload Images"</h3>
                    </button>
                    <button
                        class="kind-card"
                        on:click=move |_| wizard.update(|w| w.select_kind(UploadKind::Text))
                    >
                        <div class="kind-icon">"📝"</div>
                        <h3>"Upload Text"</h3>
                    </button>
                </div>
            </Show>

            <Show when=move || {
                kind.get() == Some(UploadKind::Image) && step.get() == WizardStep::Intake
            }>
                <div class="panel">
                    <UploadArea on_images_selected=on_images_selected />
                    <Show when=move || { image_count.get() > 0 }>
                        <ul class="file-list">
                            {move || {
                                wizard.with(|w| {
                                    w.images
                                        .iter()
                                        .map(|entry| {
                                            view! { <li>{entry.file_name.clone()}</li> }
                                        })
                                        .collect_view()
                                })
                            }}
                        </ul>
                        <button class="btn btn-primary" on:click=on_process_images>
                            {move || format!("Process {} images", image_count.get())}
                        </button>
                    </Show>
                </div>
            </Show>

            <Show when=move || {
                kind.get() == Some(UploadKind::Image) && step.get() == WizardStep::ReviewText
            }>
                <div class="panel">
                    <h3>"Confirm Extracted Text"</h3>
                    <For
                        each=move || {
                            (0..wizard.with(|w| w.extracted_texts.len())).collect::<Vec<_>>()
                        }
                        key=|index| *index
                        children=move |index: usize| {
                            let label = wizard.with_untracked(|w| {
                                w.images
                                    .get(index)
                                    .map(|entry| entry.file_name.clone())
                                    .unwrap_or_default()
                            });
                            view! {
                                <div class="review-item">
                                    <label>{label}</label>
                                    <textarea
                                        rows="4"
                                        prop:value=move || {
                                            wizard.with(|w| {
                                                w.extracted_texts
                                                    .get(index)
                                                    .cloned()
                                                    .unwrap_or_default()
                                            })
                                        }
                                        on:input=move |ev| {
                                            wizard.update(|w| {
                                                let _ = w
                                                    .edit_extracted(index, event_target_value(&ev));
                                            });
                                        }
                                    />
                                </div>
                            }
                        }
                    />
                    <button class="btn btn-primary" on:click=on_confirm_texts>
                        "Confirm Texts"
                    </button>
                </div>
            </Show>

            <Show when=move || {
                kind.get() == Some(UploadKind::Text) && step.get() == WizardStep::Intake
            }>
                <div class="panel">
                    <textarea
                        rows="8"
                        placeholder="Enter your text here..."
                        prop:value=move || wizard.with(|w| w.text_input.clone())
                        on:input=move |ev| {
                            wizard.update(|w| w.text_input = event_target_value(&ev));
                        }
                    />
                    <button class="btn btn-primary" on:click=on_process_text>
                        "Process Text"
                    </button>
                </div>
            </Show>

            <Show when=move || step.get() == WizardStep::ReviewChunks>
                <div class="panel">
                    <h3>"Confirm Final Chunks"</h3>
                    <For
                        each=move || wizard.with(|w| w.chunks.clone())
                        key=|chunk| chunk.id.clone()
                        children=move |chunk: TextChunk| {
                            let id = chunk.id.clone();
                            let edit_id = chunk.id.clone();
                            view! {
                                <div class="chunk-card">
                                    <textarea
                                        rows="4"
                                        prop:value=move || {
                                            wizard.with(|w| {
                                                w.chunks
                                                    .iter()
                                                    .find(|c| c.id == id)
                                                    .map(|c| c.content.clone())
                                                    .unwrap_or_default()
                                            })
                                        }
                                        on:input=move |ev| {
                                            wizard.update(|w| {
                                                let _ = w
                                                    .edit_chunk(&edit_id, event_target_value(&ev));
                                            });
                                        }
                                    />
                                </div>
                            }
                        }
                    />
                    <button class="btn btn-primary" on:click=on_submit_all>
                        "Submit All"
                    </button>
                </div>
            </Show>
        </section>
    }
}
