//! Payload-shape validation.
//!
//! Create and update share one payload shape and one validator. Validation
//! works on untyped JSON rather than a typed serde struct so that every
//! rejection carries a message naming the offending field, and so that shape
//! errors surface as `InvalidInput` (HTTP 400) instead of a generic
//! deserialization rejection. Invalid payloads are rejected before any store
//! access.

use notes_types::NonEmptyText;
use serde_json::{Map, Value};

use crate::error::{NotesError, NotesResult};
use crate::note::NoteDraft;

/// Validates a create/update request body and converts it into a
/// [`NoteDraft`].
///
/// Rules:
/// - the body must be a JSON object;
/// - `title` and `content` are required strings, non-empty after trimming;
/// - `tags` is optional; when present it must be an array whose every
///   element is a string. Elements are trimmed and their order preserved.
///
/// # Errors
///
/// Returns `NotesError::InvalidInput` with a field-specific message on any
/// violation.
pub fn parse_note_payload(payload: &Value) -> NotesResult<NoteDraft> {
    let obj = payload
        .as_object()
        .ok_or_else(|| NotesError::InvalidInput("request body must be a JSON object".into()))?;

    let title = text_field(obj, "title")?;
    let content = text_field(obj, "content")?;
    let tags = tags_field(obj)?;

    Ok(NoteDraft {
        title,
        content,
        tags,
    })
}

fn text_field(obj: &Map<String, Value>, field: &str) -> NotesResult<NonEmptyText> {
    let value = obj
        .get(field)
        .ok_or_else(|| NotesError::InvalidInput(format!("{field} is required")))?;
    let raw = value
        .as_str()
        .ok_or_else(|| NotesError::InvalidInput(format!("{field} must be a string")))?;
    NonEmptyText::new(raw)
        .map_err(|_| NotesError::InvalidInput(format!("{field} must not be empty")))
}

fn tags_field(obj: &Map<String, Value>) -> NotesResult<Vec<String>> {
    // Absent tags default to an empty list; a present non-array value
    // (including null) is a shape violation.
    let Some(value) = obj.get("tags") else {
        return Ok(Vec::new());
    };
    let items = value
        .as_array()
        .ok_or_else(|| NotesError::InvalidInput("tags must be an array".into()))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(|s| s.trim().to_owned())
                .ok_or_else(|| NotesError::InvalidInput("tags must contain only strings".into()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(payload: Value) -> String {
        match parse_note_payload(&payload) {
            Err(NotesError::InvalidInput(msg)) => msg,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn accepts_a_minimal_payload() {
        let draft = parse_note_payload(&json!({"title": " A ", "content": "B"})).unwrap();
        assert_eq!(draft.title.as_str(), "A");
        assert_eq!(draft.content.as_str(), "B");
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn trims_tags_and_preserves_order() {
        let draft = parse_note_payload(&json!({
            "title": "A",
            "content": "B",
            "tags": [" work ", "urgent", ""]
        }))
        .unwrap();
        assert_eq!(draft.tags, vec!["work", "urgent", ""]);
    }

    #[test]
    fn rejects_non_object_bodies() {
        assert_eq!(message(json!([1, 2])), "request body must be a JSON object");
    }

    #[test]
    fn rejects_missing_or_malformed_title() {
        assert_eq!(message(json!({"content": "B"})), "title is required");
        assert_eq!(
            message(json!({"title": 5, "content": "B"})),
            "title must be a string"
        );
        assert_eq!(
            message(json!({"title": "   ", "content": "B"})),
            "title must not be empty"
        );
    }

    #[test]
    fn rejects_missing_or_malformed_content() {
        assert_eq!(message(json!({"title": "A"})), "content is required");
        assert_eq!(
            message(json!({"title": "A", "content": null})),
            "content must be a string"
        );
        assert_eq!(
            message(json!({"title": "A", "content": ""})),
            "content must not be empty"
        );
    }

    #[test]
    fn rejects_malformed_tags() {
        assert_eq!(
            message(json!({"title": "A", "content": "B", "tags": "x"})),
            "tags must be an array"
        );
        assert_eq!(
            message(json!({"title": "A", "content": "B", "tags": null})),
            "tags must be an array"
        );
        assert_eq!(
            message(json!({"title": "A", "content": "B", "tags": ["ok", 3]})),
            "tags must contain only strings"
        );
    }
}
