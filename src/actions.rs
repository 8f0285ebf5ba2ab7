//! Guestbook Actions
//!
//! The network flows behind each user action: call the backend, then fold the
//! outcome into the state record. Generic over where the state lives so the
//! same flows drive the Leptos store and plain test state.

use crate::commands::{self, GuestbookApi};
use crate::error::ApiError;
use crate::models::EntryId;
use crate::store::{GuestbookState, GuestbookStore, Submission};
use leptos::prelude::*;

/// Somewhere a `GuestbookState` can be read and written.
///
/// Both methods return None once the state is gone (view unmounted).
pub trait StateCell {
    fn apply_state<R>(&self, f: impl FnOnce(&mut GuestbookState) -> R) -> Option<R>;
    fn read_state<R>(&self, f: impl FnOnce(&GuestbookState) -> R) -> Option<R>;
}

impl StateCell for GuestbookStore {
    fn apply_state<R>(&self, f: impl FnOnce(&mut GuestbookState) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn read_state<R>(&self, f: impl FnOnce(&GuestbookState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

/// Read the whole collection. Stale completions are dropped by the state.
pub async fn reload<S: StateCell>(api: &GuestbookApi, state: &S) {
    let Some(seq) = state.apply_state(|s| s.begin_load()) else {
        return;
    };
    log::debug!("[GUESTBOOK] Loading entries, request #{}", seq);

    let result = commands::list_entries(api).await;
    match &result {
        Ok(entries) => log::debug!("[GUESTBOOK] Loaded {} entries", entries.len()),
        Err(err) => log::error!("[GUESTBOOK] Failed to load entries: {}", err),
    }
    if state.apply_state(|s| s.finish_load(seq, result)) == Some(false) {
        log::debug!("[GUESTBOOK] Discarded stale response #{}", seq);
    }
}

/// Create or update from the form, then reload.
///
/// On error nothing is applied; the caller notifies the user.
pub async fn submit<S: StateCell>(api: &GuestbookApi, state: &S) -> Result<(), ApiError> {
    let Some(submission) = state.read_state(|s| s.submission()).flatten() else {
        return Ok(());
    };

    match &submission {
        Submission::Create(draft) => {
            log::debug!("[GUESTBOOK] Creating entry for {}", draft.name);
            commands::create_entry(api, draft).await?;
        }
        Submission::Update(id, draft) => {
            log::debug!("[GUESTBOOK] Updating entry {}", id);
            commands::update_entry(api, id, draft).await?;
        }
    }

    state.apply_state(|s| s.submit_succeeded());
    reload(api, state).await;
    Ok(())
}

/// Delete one entry, then reload. Confirmation happens before this is called.
pub async fn delete<S: StateCell>(
    api: &GuestbookApi,
    state: &S,
    id: &EntryId,
) -> Result<(), ApiError> {
    log::debug!("[GUESTBOOK] Deleting entry {}", id);
    commands::delete_entry(api, id).await?;
    reload(api, state).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use mockito::Matcher;
    use serde_json::json;

    use super::*;
    use crate::config::ApiConfig;
    use crate::models::{Entry, EntryDraft};
    use crate::store::{ViewMode, LOAD_ERROR_MESSAGE};

    impl StateCell for RefCell<GuestbookState> {
        fn apply_state<R>(&self, f: impl FnOnce(&mut GuestbookState) -> R) -> Option<R> {
            Some(f(&mut self.borrow_mut()))
        }

        fn read_state<R>(&self, f: impl FnOnce(&GuestbookState) -> R) -> Option<R> {
            Some(f(&self.borrow()))
        }
    }

    const TWO_ENTRIES: &str = r#"[
        {"id": 1, "name": "A", "message": "hi"},
        {"id": 2, "name": "B", "message": "yo"}
    ]"#;

    fn api_for(server: &mockito::Server) -> GuestbookApi {
        GuestbookApi::new(&ApiConfig::new(&format!("{}/guestbook", server.url())))
    }

    fn make_entry(id: i64, name: &str, message: &str) -> Entry {
        Entry {
            id: EntryId::from(id),
            name: name.to_string(),
            message: message.to_string(),
            created_at: None,
        }
    }

    fn loaded_state() -> RefCell<GuestbookState> {
        let mut state = GuestbookState::new();
        let seq = state.begin_load();
        state.finish_load::<()>(seq, Ok(vec![make_entry(1, "A", "hi"), make_entry(2, "B", "yo")]));
        RefCell::new(state)
    }

    #[tokio::test]
    async fn test_mount_load_issues_one_read_in_server_order() {
        let mut server = mockito::Server::new_async().await;
        let list = server
            .mock("GET", "/guestbook")
            .with_header("content-type", "application/json")
            .with_body(TWO_ENTRIES)
            .expect(1)
            .create_async()
            .await;

        let state = RefCell::new(GuestbookState::new());
        reload(&api_for(&server), &state).await;
        list.assert_async().await;

        let state = state.into_inner();
        assert_eq!(state.view_mode(), ViewMode::Ready);
        let names: Vec<&str> = state.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_failed_read_keeps_previous_entries() {
        let mut server = mockito::Server::new_async().await;
        let list = server
            .mock("GET", "/guestbook")
            .with_status(503)
            .expect(1)
            .create_async()
            .await;

        let state = loaded_state();
        reload(&api_for(&server), &state).await;
        list.assert_async().await;

        let state = state.into_inner();
        assert_eq!(state.view_mode(), ViewMode::Error);
        assert_eq!(state.error.as_deref(), Some(LOAD_ERROR_MESSAGE));
        assert_eq!(state.entries.len(), 2);
    }

    #[tokio::test]
    async fn test_create_posts_form_then_reads_once() {
        let mut server = mockito::Server::new_async().await;
        let create = server
            .mock("POST", "/guestbook")
            .match_body(Matcher::Json(json!({"name": "Carol", "message": "Nice site"})))
            .with_status(201)
            .expect(1)
            .create_async()
            .await;
        let list = server
            .mock("GET", "/guestbook")
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id": 3, "name": "Carol", "message": "Nice site"}]"#)
            .expect(1)
            .create_async()
            .await;

        let state = RefCell::new(GuestbookState::new());
        state.borrow_mut().set_name("Carol".to_string());
        state.borrow_mut().set_message("Nice site".to_string());

        submit(&api_for(&server), &state).await.unwrap();
        create.assert_async().await;
        list.assert_async().await;

        let state = state.into_inner();
        assert_eq!(state.form, EntryDraft::default());
        assert_eq!(state.entries.len(), 1);
    }

    #[tokio::test]
    async fn test_update_puts_to_edit_target_then_reads_once() {
        let mut server = mockito::Server::new_async().await;
        let update = server
            .mock("PUT", "/guestbook/2")
            .match_body(Matcher::Json(json!({"name": "B", "message": "yo yo"})))
            .expect(1)
            .create_async()
            .await;
        let list = server
            .mock("GET", "/guestbook")
            .with_header("content-type", "application/json")
            .with_body(TWO_ENTRIES)
            .expect(1)
            .create_async()
            .await;

        let state = loaded_state();
        let target = state.borrow().entries[1].clone();
        state.borrow_mut().start_edit(&target);
        state.borrow_mut().set_message("yo yo".to_string());

        submit(&api_for(&server), &state).await.unwrap();
        update.assert_async().await;
        list.assert_async().await;

        let state = state.into_inner();
        assert_eq!(state.editing_id, None);
        assert_eq!(state.form, EntryDraft::default());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_form_and_edit_target() {
        let mut server = mockito::Server::new_async().await;
        let update = server
            .mock("PUT", "/guestbook/1")
            .with_status(500)
            .expect(1)
            .create_async()
            .await;
        let list = server.mock("GET", "/guestbook").expect(0).create_async().await;

        let state = loaded_state();
        let target = state.borrow().entries[0].clone();
        state.borrow_mut().start_edit(&target);
        state.borrow_mut().set_name("Changed".to_string());
        let before = state.borrow().clone();

        let result = submit(&api_for(&server), &state).await;
        update.assert_async().await;
        list.assert_async().await;

        assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));
        let after = state.into_inner();
        assert_eq!(after, before);
        assert_eq!(after.editing_id, Some(EntryId::from(1)));
        assert_eq!(after.form.name, "Changed");
    }

    #[tokio::test]
    async fn test_incomplete_form_sends_nothing() {
        let mut server = mockito::Server::new_async().await;
        let create = server.mock("POST", "/guestbook").expect(0).create_async().await;
        let list = server.mock("GET", "/guestbook").expect(0).create_async().await;

        let state = loaded_state();
        state.borrow_mut().set_name("Only a name".to_string());

        submit(&api_for(&server), &state).await.unwrap();
        create.assert_async().await;
        list.assert_async().await;
        assert_eq!(state.borrow().form.name, "Only a name");
    }

    #[tokio::test]
    async fn test_delete_issues_one_delete_then_one_read() {
        let mut server = mockito::Server::new_async().await;
        let remove = server
            .mock("DELETE", "/guestbook/1")
            .expect(1)
            .create_async()
            .await;
        let list = server
            .mock("GET", "/guestbook")
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id": 2, "name": "B", "message": "yo"}]"#)
            .expect(1)
            .create_async()
            .await;

        let state = loaded_state();
        delete(&api_for(&server), &state, &EntryId::from(1)).await.unwrap();
        remove.assert_async().await;
        list.assert_async().await;

        let state = state.into_inner();
        assert_eq!(state.entries, vec![make_entry(2, "B", "yo")]);
    }

    #[tokio::test]
    async fn test_failed_delete_skips_reload() {
        let mut server = mockito::Server::new_async().await;
        let remove = server
            .mock("DELETE", "/guestbook/2")
            .with_status(404)
            .expect(1)
            .create_async()
            .await;
        let list = server.mock("GET", "/guestbook").expect(0).create_async().await;

        let state = loaded_state();
        let result = delete(&api_for(&server), &state, &EntryId::from(2)).await;
        remove.assert_async().await;
        list.assert_async().await;

        assert!(matches!(result, Err(ApiError::Status { status: 404, .. })));
        assert_eq!(state.borrow().entries.len(), 2);
    }
}
