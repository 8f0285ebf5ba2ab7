//! Guestbook View Component
//!
//! Owns one guestbook's state: form on top, then the loading / error /
//! entry-list view. The collection is fetched once when mounted.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::GuestbookApi;
use crate::components::{EntryForm, EntryList};
use crate::config::ApiConfig;
use crate::context::GuestbookContext;
use crate::store::{GuestbookState, GuestbookStateStoreFields, ViewMode};

#[component]
pub fn GuestbookView(config: ApiConfig) -> impl IntoView {
    let store = Store::new(GuestbookState::new());
    let ctx = GuestbookContext::new(store, GuestbookApi::new(&config));
    provide_context(store);
    provide_context(ctx);

    // Initial load
    Effect::new(move |_| ctx.reload());

    let mode = Memo::new(move |_| store.with(|state| state.view_mode()));

    view! {
        <div class="guestbook">
            <h2>"Guestbook"</h2>

            <EntryForm />

            <hr />

            {move || match mode.get() {
                ViewMode::Loading => view! {
                    <div class="loader">
                        <p>"☕ Waking up the server... This may take 30 seconds on the first load."</p>
                    </div>
                }.into_any(),
                ViewMode::Error => view! {
                    <div class="load-error">
                        <p class="error-message">{move || store.error().get().unwrap_or_default()}</p>
                        <button type="button" on:click=move |_| ctx.reload()>"Retry"</button>
                    </div>
                }.into_any(),
                ViewMode::Ready => view! { <EntryList /> }.into_any(),
            }}
        </div>
    }
}
