//! In-memory note collection.
//!
//! `NoteStore` owns the authoritative collection and the id counter. It
//! contains **only** data operations, no HTTP or persistence concerns; the
//! persist-after-mutation policy lives in [`crate::service::NotesService`].
//!
//! The id counter is computed as max-plus-one when a collection is adopted
//! from disk and is a pure in-memory increment afterwards. It is never
//! recomputed after deletions, so within one process lifetime an id is never
//! reused even when the highest-id note is deleted.

use chrono::Utc;

use crate::error::{NotesError, NotesResult};
use crate::note::{Note, NoteDraft};

/// Optional listing filters. Absent fields are no-ops; present fields must
/// all match (intersection).
#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    /// Case-insensitive substring match against any tag of a note.
    pub tag: Option<String>,
    /// Case-insensitive substring match against title or content.
    pub q: Option<String>,
}

impl NoteFilter {
    /// A filter that matches every note.
    pub fn none() -> Self {
        Self::default()
    }

    fn matches(&self, note: &Note) -> bool {
        if let Some(tag) = &self.tag {
            let needle = tag.to_lowercase();
            let hit = note
                .tags
                .iter()
                .any(|t| t.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        if let Some(q) = &self.q {
            let needle = q.to_lowercase();
            let hit = note.title.to_lowercase().contains(&needle)
                || note.content.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        true
    }
}

/// The in-memory note collection and id counter.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
    next_id: u64,
}

impl NoteStore {
    /// Creates an empty store; the first assigned id will be 1.
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            next_id: 1,
        }
    }

    /// Adopts a previously persisted collection.
    ///
    /// The id counter is recomputed as the highest existing id plus one
    /// (1 for an empty collection).
    pub fn from_notes(notes: Vec<Note>) -> Self {
        let next_id = notes.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        Self { notes, next_id }
    }

    /// Creates a note from a validated draft and appends it to the
    /// collection. Append order is insertion order is default listing order.
    ///
    /// Both timestamps are set from a single clock reading so a freshly
    /// created note has `created_at == updated_at`.
    pub fn create(&mut self, draft: NoteDraft) -> Note {
        let now = Utc::now();
        let note = Note {
            id: self.next_id,
            title: draft.title.into_string(),
            content: draft.content.into_string(),
            tags: draft.tags,
            created_at: now,
            updated_at: now,
        };
        self.next_id += 1;
        self.notes.push(note.clone());
        note
    }

    /// Returns the notes matching all provided filters, in collection order.
    ///
    /// Always returns owned clones so callers cannot mutate the internal
    /// collection.
    pub fn list(&self, filter: &NoteFilter) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|n| filter.matches(n))
            .cloned()
            .collect()
    }

    /// Looks up a note by exact id.
    pub fn get(&self, id: u64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Replaces title, content and tags of the note with the given id.
    ///
    /// `id` and `created_at` are preserved; `updated_at` is refreshed.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::NotFound` if no note has the given id.
    pub fn update(&mut self, id: u64, draft: NoteDraft) -> NotesResult<Note> {
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(NotesError::NotFound(id))?;
        note.title = draft.title.into_string();
        note.content = draft.content.into_string();
        note.tags = draft.tags;
        note.updated_at = Utc::now();
        Ok(note.clone())
    }

    /// Removes the note with the given id.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::NotFound` if no note has the given id.
    pub fn delete(&mut self, id: u64) -> NotesResult<()> {
        let idx = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(NotesError::NotFound(id))?;
        self.notes.remove(idx);
        Ok(())
    }

    /// The full collection, for persistence.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }
}
