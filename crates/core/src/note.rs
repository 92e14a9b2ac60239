//! The note entity and its validated draft form.

use chrono::{DateTime, Utc};
use notes_types::NonEmptyText;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored note.
///
/// JSON field names use camelCase (`createdAt` / `updatedAt`) to match the
/// persisted file format and the wire format exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Positive, unique, monotonically assigned identifier.
    pub id: u64,
    /// Trimmed, never empty.
    pub title: String,
    /// Trimmed, never empty.
    pub content: String,
    /// Trimmed tags in the order they were submitted; may be empty.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Set once at creation, never modified afterwards.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful update.
    pub updated_at: DateTime<Utc>,
}

/// A validated create/update payload.
///
/// Construction goes through [`crate::validation::parse_note_payload`], so a
/// draft always carries trimmed, non-empty title and content and
/// string-only tags.
#[derive(Debug, Clone)]
pub struct NoteDraft {
    pub title: NonEmptyText,
    pub content: NonEmptyText,
    pub tags: Vec<String>,
}
