//! Guestbook Frontend App
//!
//! Page shell around a single guestbook view.

use leptos::prelude::*;

use crate::components::GuestbookView;
use crate::config::ApiConfig;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::default();
    log::info!("[APP] Guestbook API at {}", config.base_url);

    view! {
        <main class="app-layout">
            <GuestbookView config=config />
        </main>
    }
}
