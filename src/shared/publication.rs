//! Publication Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::{require_field, SharedError};
use crate::shared::user::UserId;

/// Identifier of a publication
pub type PublicationId = u64;

/// A post, joined with its author's nick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: PublicationId,
    pub title: String,
    pub content: String,
    /// Set once from the authenticated identity at creation, never reassigned
    pub author_id: UserId,
    pub author_nick: String,
    pub likes: u64,
    pub created_at: DateTime<Utc>,
}

/// Create/update payload. The author always comes from the token.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PublicationDraft {
    pub title: String,
    pub content: String,
}

impl PublicationDraft {
    pub fn prepare(&mut self) -> Result<(), SharedError> {
        require_field("title", "Title", &mut self.title)?;
        require_field("content", "Content", &mut self.content)?;
        Ok(())
    }
}
