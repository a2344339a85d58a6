//! Header component

use crate::app::Screen;
use leptos::prelude::*;

#[component]
pub fn Header(screen: ReadSignal<Screen>, set_screen: WriteSignal<Screen>) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Notes QA"</h1>
            <nav class="nav">
                <button
                    class="btn btn-secondary"
                    class:active=move || screen.get() == Screen::Query
                    on:click=move |_| set_screen.set(Screen::Query)
                >
                    "Ask"
                </button>
                <button
                    class="btn btn-secondary"
                    class:active=move || screen.get() == Screen::Upload
                    on:click=move |_| set_screen.set(Screen::Upload)
                >
                    "Upload"
                </button>
            </nav>
        </header>
    }
}
