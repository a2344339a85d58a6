//! Root application component

use crate::components::{header::Header, query_view::QueryView, upload_view::UploadView};
use leptos::prelude::*;

/// Screen on display
#[derive(Clone, Copy, PartialEq)]
pub enum Screen {
    Query,
    Upload,
}

/// Root component: header plus the active screen
///
/// Switching screens drops the previous screen's component tree, so all of
/// its view state is discarded.
#[component]
pub fn App() -> impl IntoView {
    let (screen, set_screen) = signal(Screen::Query);

    view! {
        <div class="container">
            <Header screen=screen set_screen=set_screen />
            {move || match screen.get() {
                Screen::Query => view! { <QueryView /> }.into_any(),
                Screen::Upload => view! { <UploadView /> }.into_any(),
            }}
        </div>
    }
}
