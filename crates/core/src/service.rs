//! The notes service: store plus persistence, one mutation policy.
//!
//! Every successful create/update/delete is followed by a synchronous
//! whole-file save. A failed save is logged and the mutation is still
//! reported as success; the service keeps operating purely in memory until
//! the next successful write. This inconsistency window is a deliberate
//! trade-off carried over from the original design, not an oversight.
//!
//! The service itself has no interior locking. Callers running on a
//! multi-threaded runtime must serialize access through a single mutex so
//! concurrent mutations stay linearizable (the HTTP layer wraps the whole
//! service in one `Mutex`).

use std::sync::Arc;

use crate::config::CoreConfig;
use crate::error::{NotesError, NotesResult};
use crate::note::{Note, NoteDraft};
use crate::persistence::NotesFile;
use crate::store::{NoteFilter, NoteStore};

/// Service owning the authoritative note collection and its persisted
/// mirror.
#[derive(Debug)]
pub struct NotesService {
    store: NoteStore,
    file: NotesFile,
}

impl NotesService {
    /// Opens the service: loads the persisted collection (missing or broken
    /// files fall back to empty, see [`NotesFile::load`]) and recomputes the
    /// id counter.
    pub fn open(cfg: Arc<CoreConfig>) -> Self {
        let file = NotesFile::new(cfg.data_file());
        let store = NoteStore::from_notes(file.load());
        Self { store, file }
    }

    /// Creates a note and persists the collection.
    pub fn create(&mut self, draft: NoteDraft) -> Note {
        let note = self.store.create(draft);
        self.persist();
        note
    }

    /// Lists notes matching the filter, in collection order.
    pub fn list(&self, filter: &NoteFilter) -> Vec<Note> {
        self.store.list(filter)
    }

    /// Fetches a note by id.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::NotFound` if no note has the given id.
    pub fn get(&self, id: u64) -> NotesResult<Note> {
        self.store.get(id).cloned().ok_or(NotesError::NotFound(id))
    }

    /// Updates a note and persists the collection.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::NotFound` if no note has the given id; nothing
    /// is persisted in that case.
    pub fn update(&mut self, id: u64, draft: NoteDraft) -> NotesResult<Note> {
        let note = self.store.update(id, draft)?;
        self.persist();
        Ok(note)
    }

    /// Deletes a note and persists the collection.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::NotFound` if no note has the given id; nothing
    /// is persisted in that case.
    pub fn delete(&mut self, id: u64) -> NotesResult<()> {
        self.store.delete(id)?;
        self.persist();
        Ok(())
    }

    /// Best-effort save of the current collection. The in-memory mutation
    /// has already happened, so a failure is logged rather than surfaced.
    fn persist(&self) {
        if let Err(e) = self.file.save(self.store.notes()) {
            tracing::warn!(
                path = %self.file.path().display(),
                error = %e,
                "failed to persist notes, continuing in memory"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvMode;
    use crate::error::NotesError;
    use notes_types::NonEmptyText;
    use tempfile::TempDir;

    fn draft(title: &str, content: &str) -> NoteDraft {
        NoteDraft {
            title: NonEmptyText::new(title).unwrap(),
            content: NonEmptyText::new(content).unwrap(),
            tags: vec![],
        }
    }

    fn service_in(temp: &TempDir) -> NotesService {
        let cfg = Arc::new(CoreConfig::new(
            temp.path().join("notes.json"),
            EnvMode::Development,
        ));
        NotesService::open(cfg)
    }

    #[test]
    fn create_persists_and_survives_a_reopen() {
        let temp = TempDir::new().unwrap();

        let created = {
            let mut service = service_in(&temp);
            service.create(draft("A", "B"))
        };

        let reopened = service_in(&temp);
        assert_eq!(reopened.get(created.id).unwrap(), created);
    }

    #[test]
    fn delete_is_persisted() {
        let temp = TempDir::new().unwrap();

        {
            let mut service = service_in(&temp);
            service.create(draft("A", "B"));
            service.create(draft("C", "D"));
            service.delete(1).unwrap();
        }

        let reopened = service_in(&temp);
        assert!(matches!(reopened.get(1), Err(NotesError::NotFound(1))));
        assert_eq!(reopened.list(&NoteFilter::none()).len(), 1);
    }

    #[test]
    fn failed_not_found_update_does_not_persist() {
        let temp = TempDir::new().unwrap();
        let mut service = service_in(&temp);

        assert!(service.update(42, draft("A", "B")).is_err());
        assert!(!temp.path().join("notes.json").exists());
    }

    // The mutation must succeed even when the disk write cannot.
    #[test]
    fn create_succeeds_when_save_fails() {
        let temp = TempDir::new().unwrap();
        let cfg = Arc::new(CoreConfig::new(
            temp.path().join("missing-dir").join("notes.json"),
            EnvMode::Development,
        ));
        let mut service = NotesService::open(cfg);

        let note = service.create(draft("A", "B"));
        assert_eq!(note.id, 1);
        assert_eq!(service.get(1).unwrap(), note);
    }
}
