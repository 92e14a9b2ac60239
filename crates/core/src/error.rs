#[derive(Debug, thiserror::Error)]
pub enum NotesError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("Note {0} not found")]
    NotFound(u64),
    #[error("failed to read notes file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write notes file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to serialize notes: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize notes: {0}")]
    Deserialization(serde_json::Error),
}

pub type NotesResult<T> = std::result::Result<T, NotesError>;
