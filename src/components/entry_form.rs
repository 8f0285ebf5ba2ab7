//! Entry Form Component
//!
//! Name + message form. Creates a new entry, or updates the one being edited.

use leptos::prelude::*;

use crate::context::use_guestbook;
use crate::store::GuestbookStateStoreFields;

#[component]
pub fn EntryForm() -> impl IntoView {
    let ctx = use_guestbook();
    let store = ctx.store;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form class="entry-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Your Name"
                required=true
                prop:value=move || store.form().get().name
                on:input=move |ev| ctx.set_name(event_target_value(&ev))
            />
            <textarea
                placeholder="Leave a message..."
                required=true
                prop:value=move || store.form().get().message
                on:input=move |ev| ctx.set_message(event_target_value(&ev))
            />
            <button type="submit">
                {move || store.with(|state| state.submit_label())}
            </button>
            <Show when=move || store.editing_id().with(|id| id.is_some())>
                <button type="button" class="cancel-btn" on:click=move |_| ctx.cancel_edit()>
                    "Cancel"
                </button>
            </Show>
        </form>
    }
}
