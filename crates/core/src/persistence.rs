//! File-backed persistence for the note collection.
//!
//! The persisted format is a single pretty-printed JSON array of notes with
//! camelCase field names. The whole file is overwritten after every
//! mutation; there is no temp-file-and-rename step, so a crash mid-write can
//! corrupt the file. That weakness is accepted and documented rather than
//! hardened away, to keep write behaviour identical to the original design.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{NotesError, NotesResult};
use crate::note::Note;

/// Adapter around the persisted notes file.
#[derive(Debug, Clone)]
pub struct NotesFile {
    path: PathBuf,
}

impl NotesFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted collection.
    ///
    /// A missing, unreadable or unparseable file is not fatal: it is logged
    /// and treated as an empty collection, and the service starts fresh.
    pub fn load(&self) -> Vec<Note> {
        match self.try_load() {
            Ok(Some(notes)) => {
                tracing::info!(
                    path = %self.path.display(),
                    count = notes.len(),
                    "loaded persisted notes"
                );
                notes
            }
            Ok(None) => {
                tracing::info!(
                    path = %self.path.display(),
                    "no persisted notes file, starting with an empty collection"
                );
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "could not load persisted notes, starting with an empty collection"
                );
                Vec::new()
            }
        }
    }

    /// Loads the file, distinguishing "absent" (`Ok(None)`) from failures.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::FileRead` if the file exists but cannot be read,
    /// or `NotesError::Deserialization` if its contents are not a valid
    /// note array.
    pub fn try_load(&self) -> NotesResult<Option<Vec<Note>>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(NotesError::FileRead(e)),
        };
        let notes = serde_json::from_str(&raw).map_err(NotesError::Deserialization)?;
        Ok(Some(notes))
    }

    /// Serializes the full collection as pretty-printed JSON and overwrites
    /// the persisted file.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::Serialization` if encoding fails, or
    /// `NotesError::FileWrite` if the file cannot be written.
    pub fn save(&self, notes: &[Note]) -> NotesResult<()> {
        let raw = serde_json::to_string_pretty(notes).map_err(NotesError::Serialization)?;
        fs::write(&self.path, raw).map_err(NotesError::FileWrite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{NoteFilter, NoteStore};
    use notes_types::NonEmptyText;
    use tempfile::TempDir;

    fn draft(title: &str, content: &str) -> crate::note::NoteDraft {
        crate::note::NoteDraft {
            title: NonEmptyText::new(title).unwrap(),
            content: NonEmptyText::new(content).unwrap(),
            tags: vec!["keep".into()],
        }
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let temp = TempDir::new().unwrap();
        let file = NotesFile::new(temp.path().join("notes.json"));
        assert!(file.load().is_empty());
        assert!(matches!(file.try_load(), Ok(None)));
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.json");
        fs::write(&path, "{not json").unwrap();

        let file = NotesFile::new(&path);
        assert!(file.load().is_empty());
        assert!(matches!(
            file.try_load(),
            Err(NotesError::Deserialization(_))
        ));
    }

    #[test]
    fn save_then_load_round_trips_all_fields() {
        let temp = TempDir::new().unwrap();
        let file = NotesFile::new(temp.path().join("notes.json"));

        let mut store = NoteStore::new();
        let created = store.create(draft("A", "B"));
        file.save(store.notes()).unwrap();

        let reloaded = file.load();
        assert_eq!(reloaded, vec![created]);
    }

    #[test]
    fn persisted_file_is_pretty_printed_camel_case() {
        let temp = TempDir::new().unwrap();
        let file = NotesFile::new(temp.path().join("notes.json"));

        let mut store = NoteStore::new();
        store.create(draft("A", "B"));
        file.save(store.notes()).unwrap();

        let raw = fs::read_to_string(file.path()).unwrap();
        assert!(raw.contains('\n'));
        assert!(raw.contains("\"createdAt\""));
        assert!(raw.contains("\"updatedAt\""));
    }

    // Documented edge case: deleting the highest-id note before shutdown
    // means a later load recomputes next id as max-plus-one and can reissue
    // the deleted id.
    #[test]
    fn reload_after_deleting_highest_id_reissues_it() {
        let temp = TempDir::new().unwrap();
        let file = NotesFile::new(temp.path().join("notes.json"));

        let mut store = NoteStore::new();
        store.create(draft("A", "B"));
        store.create(draft("C", "D"));
        store.delete(2).unwrap();
        file.save(store.notes()).unwrap();

        let mut reloaded = NoteStore::from_notes(file.load());
        let note = reloaded.create(draft("E", "F"));
        assert_eq!(note.id, 2);
        assert_eq!(reloaded.list(&NoteFilter::none()).len(), 2);
    }
}
