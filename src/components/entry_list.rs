//! Entry List Component
//!
//! Entries in server order, or a placeholder when there are none.

use leptos::prelude::*;

use crate::components::EntryCard;
use crate::store::{use_guestbook_store, GuestbookStateStoreFields};

#[component]
pub fn EntryList() -> impl IntoView {
    let store = use_guestbook_store();
    let is_empty = Memo::new(move |_| store.entries().with(|entries| entries.is_empty()));

    view! {
        <div class="entries">
            <Show when=move || is_empty.get()>
                <p class="entries-empty">"No entries yet. Be the first!"</p>
            </Show>
            // Keyed by the whole entry so an edited row is rebuilt after reload
            <For
                each=move || store.entries().get()
                key=|entry| entry.clone()
                children=move |entry| view! { <EntryCard entry=entry /> }
            />
        </div>
    }
}
