//! Entry Commands
//!
//! One function per REST call on the guestbook collection.

use crate::error::ApiError;
use crate::models::{Entry, EntryDraft, EntryId};
use super::GuestbookApi;

/// GET the full collection, in server order
pub async fn list_entries(api: &GuestbookApi) -> Result<Vec<Entry>, ApiError> {
    let response = api
        .client
        .get(api.collection_url())
        .send()
        .await?
        .error_for_status()?;
    let entries = response.json::<Vec<Entry>>().await?;
    Ok(entries)
}

/// POST a new entry. The created record is not used; callers reload.
pub async fn create_entry(api: &GuestbookApi, draft: &EntryDraft) -> Result<(), ApiError> {
    api.client
        .post(api.collection_url())
        .json(draft)
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

/// PUT new field values onto an existing entry
pub async fn update_entry(
    api: &GuestbookApi,
    id: &EntryId,
    draft: &EntryDraft,
) -> Result<(), ApiError> {
    api.client
        .put(api.entry_url(id))
        .json(draft)
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

pub async fn delete_entry(api: &GuestbookApi, id: &EntryId) -> Result<(), ApiError> {
    api.client
        .delete(api.entry_url(id))
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}
