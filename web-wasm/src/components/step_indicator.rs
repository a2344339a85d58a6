//! Step indicator component

use leptos::prelude::*;
use notes_qa_common::WizardStep;

/// Five positions; only 1, 3 and 5 ever activate
#[component]
pub fn StepIndicator(step: Memo<WizardStep>) -> impl IntoView {
    view! {
        <div class="step-indicator">
            {(1u8..=5)
                .map(|position| {
                    view! {
                        <span
                            class="step-dot"
                            class:active=move || step.get().number() == position
                        >
                            {position.to_string()}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
