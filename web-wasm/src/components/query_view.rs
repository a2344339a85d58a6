//! Question view component
//!
//! Accepts a free-text question, simulates the answer round trip with a
//! fixed-delay timer, then renders the answer plus its cited sources.

use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use notes_qa_common::{answer_question, QueryResult, ANSWER_DELAY_MS};
use wasm_bindgen_futures::spawn_local;
use web_sys::SubmitEvent;

#[component]
pub fn QueryView() -> impl IntoView {
    let (question, set_question) = signal(String::new());
    let (result, set_result) = signal(None::<QueryResult>);
    let (is_loading, set_is_loading) = signal(false);

    let can_submit = move || !question.get().trim().is_empty() && !is_loading.get();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !can_submit() {
            return;
        }

        set_is_loading.set(true);
        set_result.set(None);

        let asked = question.get_untracked();
        spawn_local(async move {
            TimeoutFuture::new(ANSWER_DELAY_MS).await;
            // the view may already be gone when the timer fires
            set_result.try_set(answer_question(&asked));
            set_is_loading.try_set(false);
        });
    };

    view! {
        <section class="query-view">
            <div class="query-intro">
                <h2>"Ask Me Anything"</h2>
                <p class="text-muted">"What would you like to know?"</p>
            </div>

            <form class="query-form" on:submit=on_submit>
                <textarea
                    placeholder="Type your question here..."
                    prop:value=move || question.get()
                    on:input=move |ev| set_question.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || !can_submit()
                >
                    {move || if is_loading.get() { "Thinking..." } else { "Submit" }}
                </button>
            </form>

            {move || {
                result.get().map(|res| {
                    let sources = res.sources.clone();
                    view! {
                        <div class="answer-card">
                            <h3>"Answer"</h3>
                            <p>{res.response.clone()}</p>
                        </div>
                        {(!sources.is_empty())
                            .then(|| {
                                view! {
                                    <div class="sources-card">
                                        <h3>"Sources"</h3>
                                        {sources
                                            .iter()
                                            .enumerate()
                                            .map(|(index, source)| {
                                                view! {
                                                    <div class="source-item">
                                                        <p>{source.excerpt.clone()}</p>
                                                        <img
                                                            src=source.image_ref.clone()
                                                            alt=format!("Source {}", index + 1)
                                                        />
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                            })}
                    }
                })
            }}
        </section>
    }
}
