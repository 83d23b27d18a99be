//! Request bodies for the wiki resource endpoint

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body for `POST /wikis` and `PATCH /wikis`.
///
/// Serializes to exactly the keys `username`, `content`, `password`, with
/// field values passed through verbatim (no trimming or transformation).
#[derive(Clone, Serialize, Deserialize)]
pub struct SaveWikiRequest {
    pub username: String,
    pub content: String,
    pub password: String,
}

// Keep credentials out of logs.
impl fmt::Debug for SaveWikiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaveWikiRequest")
            .field("username", &self.username)
            .field("content", &self.content)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body for `DELETE /wikis`.
#[derive(Clone, Serialize, Deserialize)]
pub struct DeleteWikiRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for DeleteWikiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeleteWikiRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
