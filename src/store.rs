//! Guestbook State Store
//!
//! The whole component state as one serializable record, wrapped in a
//! Leptos `reactive_stores::Store` for field-level reactivity. Transitions
//! are plain methods so they can be exercised without a browser.

use leptos::prelude::*;
use reactive_stores::Store;
use serde::{Deserialize, Serialize};

use crate::models::{Entry, EntryDraft, EntryId};

/// Inline message shown when the collection cannot be read
pub const LOAD_ERROR_MESSAGE: &str = "The server is waking up... please wait a moment.";

/// Local state of one guestbook view
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Store)]
pub struct GuestbookState {
    /// Entries exactly as last returned by the server
    pub entries: Vec<Entry>,
    /// Current form contents
    pub form: EntryDraft,
    /// A read is in flight
    pub loading: bool,
    /// Last read failure, cleared by the next successful read
    pub error: Option<String>,
    /// Entry being edited (None = creating)
    pub editing_id: Option<EntryId>,
    /// Sequence number of the most recently issued read
    pub latest_load: u64,
}

impl Default for GuestbookState {
    fn default() -> Self {
        Self::new()
    }
}

/// Which of the mutually exclusive views to render
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Loading,
    Error,
    Ready,
}

/// Write request captured from the form at submit time
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    Create(EntryDraft),
    Update(EntryId, EntryDraft),
}

impl GuestbookState {
    /// Fresh state: nothing loaded yet, first read pending
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            form: EntryDraft::default(),
            loading: true,
            error: None,
            editing_id: None,
            latest_load: 0,
        }
    }

    /// Mark a read as issued and return its sequence number
    pub fn begin_load(&mut self) -> u64 {
        self.latest_load += 1;
        self.loading = true;
        self.latest_load
    }

    /// Apply a read completion. Returns false if a newer read superseded it.
    pub fn finish_load<E>(&mut self, seq: u64, result: Result<Vec<Entry>, E>) -> bool {
        if seq != self.latest_load {
            return false;
        }
        match result {
            Ok(entries) => {
                self.entries = entries;
                self.error = None;
            }
            Err(_) => {
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        self.loading = false;
        true
    }

    /// Snapshot the form as a create or update, or None if a field is empty
    pub fn submission(&self) -> Option<Submission> {
        if !self.form.is_complete() {
            return None;
        }
        let draft = self.form.clone();
        Some(match &self.editing_id {
            Some(id) => Submission::Update(id.clone(), draft),
            None => Submission::Create(draft),
        })
    }

    /// Leave edit mode and clear the form after a successful write
    pub fn submit_succeeded(&mut self) {
        self.editing_id = None;
        self.form = EntryDraft::default();
    }

    pub fn start_edit(&mut self, entry: &Entry) {
        self.form = EntryDraft::from_entry(entry);
        self.editing_id = Some(entry.id.clone());
    }

    /// Back to create mode; typed fields are kept
    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
    }

    pub fn set_name(&mut self, name: String) {
        self.form.name = name;
    }

    pub fn set_message(&mut self, message: String) {
        self.form.message = message;
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn view_mode(&self) -> ViewMode {
        if self.loading {
            ViewMode::Loading
        } else if self.error.is_some() {
            ViewMode::Error
        } else {
            ViewMode::Ready
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Entry"
        } else {
            "Sign Guestbook"
        }
    }
}

/// Type alias for the store
pub type GuestbookStore = Store<GuestbookState>;

/// Get the guestbook store from context
pub fn use_guestbook_store() -> GuestbookStore {
    expect_context::<GuestbookStore>()
}
