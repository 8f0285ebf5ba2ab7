//! Guestbook REST Bindings
//!
//! Frontend bindings to the guestbook backend, organized by resource.

mod entry;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Client;

use crate::config::ApiConfig;
use crate::models::EntryId;

// Re-export all public items
pub use entry::*;

/// Characters escaped when an id is written as a single path segment
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}');

/// HTTP client bound to one guestbook collection URL
#[derive(Debug, Clone)]
pub struct GuestbookApi {
    client: Client,
    base_url: String,
}

impl GuestbookApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    /// URL of the whole collection (GET, POST)
    pub fn collection_url(&self) -> &str {
        &self.base_url
    }

    /// URL of one entry (PUT, DELETE)
    pub fn entry_url(&self, id: &EntryId) -> String {
        let segment = id.to_string();
        format!(
            "{}/{}",
            self.base_url,
            utf8_percent_encode(&segment, PATH_SEGMENT_ENCODE_SET)
        )
    }
}
