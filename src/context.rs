//! Guestbook Context
//!
//! Controller shared via the Leptos Context API. Owns the store and the REST
//! client, spawns the network actions and alerts on write failures.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::commands::GuestbookApi;
use crate::dialog;
use crate::models::{Entry, EntryId};
use crate::store::GuestbookStore;

pub const SAVE_FAILED_MESSAGE: &str = "Failed to save entry.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete.";

/// Actions available to every guestbook component
#[derive(Clone, Copy)]
pub struct GuestbookContext {
    /// State record - read by components, written only through these actions
    pub store: GuestbookStore,
    api: StoredValue<GuestbookApi>,
}

impl GuestbookContext {
    pub fn new(store: GuestbookStore, api: GuestbookApi) -> Self {
        Self {
            store,
            api: StoredValue::new(api),
        }
    }

    /// Fetch the whole collection and replace the displayed entries
    pub fn reload(&self) {
        let store = self.store;
        let Some(api) = self.api.try_get_value() else {
            return;
        };
        spawn_local(async move {
            actions::reload(&api, &store).await;
        });
    }

    /// Create or update from the current form, then reload
    pub fn submit(&self) {
        let store = self.store;
        let Some(api) = self.api.try_get_value() else {
            return;
        };
        spawn_local(async move {
            if let Err(err) = actions::submit(&api, &store).await {
                log::error!("[GUESTBOOK] Failed to save entry: {}", err);
                dialog::alert(SAVE_FAILED_MESSAGE);
            }
        });
    }

    /// Delete one entry, then reload. Confirmation happens in the caller.
    pub fn delete(&self, id: EntryId) {
        let store = self.store;
        let Some(api) = self.api.try_get_value() else {
            return;
        };
        spawn_local(async move {
            if let Err(err) = actions::delete(&api, &store, &id).await {
                log::error!("[GUESTBOOK] Failed to delete entry {}: {}", id, err);
                dialog::alert(DELETE_FAILED_MESSAGE);
            }
        });
    }

    pub fn start_edit(&self, entry: &Entry) {
        self.store.update(|state| state.start_edit(entry));
    }

    pub fn cancel_edit(&self) {
        self.store.update(|state| state.cancel_edit());
    }

    pub fn set_name(&self, name: String) {
        self.store.update(|state| state.set_name(name));
    }

    pub fn set_message(&self, message: String) {
        self.store.update(|state| state.set_message(message));
    }
}

/// Get the guestbook context
pub fn use_guestbook() -> GuestbookContext {
    expect_context::<GuestbookContext>()
}
