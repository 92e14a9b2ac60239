//! # Notes Core
//!
//! Core business logic for the notes service.
//!
//! This crate contains pure data operations and file persistence:
//! - The `Note` entity and its in-memory collection with monotonic ids
//! - Tag / free-text filtering (linear scans, case-insensitive substrings)
//! - Whole-file JSON persistence, overwritten after every mutation
//! - Payload-shape validation shared by create and update
//!
//! **No API concerns**: HTTP routing, status codes and response shaping
//! belong in `api-rest`.

pub mod config;
pub mod error;
pub mod note;
pub mod persistence;
pub mod service;
pub mod store;
pub mod validation;

pub use config::{CoreConfig, EnvMode, DEFAULT_DATA_FILE, DEFAULT_PORT};
pub use error::{NotesError, NotesResult};
pub use note::{Note, NoteDraft};
pub use notes_types::NonEmptyText;
pub use persistence::NotesFile;
pub use service::NotesService;
pub use store::{NoteFilter, NoteStore};
