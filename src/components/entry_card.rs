//! Entry Card Component
//!
//! One guestbook entry with its Edit and Delete controls.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_guestbook;
use crate::models::Entry;

#[component]
pub fn EntryCard(entry: Entry) -> impl IntoView {
    let ctx = use_guestbook();
    let id = entry.id.clone();
    let edit_target = entry.clone();

    view! {
        <div class="entry-card">
            <strong class="entry-name">{entry.name}</strong>
            {entry.created_at.map(|at| view! { <span class="entry-date">{at}</span> })}
            <p class="entry-message">{entry.message}</p>
            <div class="entry-actions">
                <button type="button" class="edit-btn" on:click=move |_| ctx.start_edit(&edit_target)>
                    "Edit"
                </button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    on_confirm=Callback::new(move |_| ctx.delete(id.clone()))
                />
            </div>
        </div>
    }
}
