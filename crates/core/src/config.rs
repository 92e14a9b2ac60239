//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! core services. Reading process-wide environment variables during request
//! handling leads to inconsistent behaviour in multi-threaded runtimes and
//! test harnesses, so request handlers only ever see a `CoreConfig`.

use std::path::{Path, PathBuf};

use crate::error::{NotesError, NotesResult};

/// Default path of the persisted notes file, relative to the working
/// directory.
pub const DEFAULT_DATA_FILE: &str = "notes.json";

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Environment mode of the process.
///
/// Production mode redacts unexpected-error messages in HTTP responses;
/// development mode exposes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvMode {
    Development,
    Production,
}

impl EnvMode {
    pub fn is_production(self) -> bool {
        self == EnvMode::Production
    }
}

/// Parse an `EnvMode` from an environment-variable value.
///
/// `None` (variable unset) defaults to development.
///
/// # Errors
///
/// Returns `NotesError::InvalidInput` for values other than
/// `development` or `production`.
pub fn env_mode_from_env_value(value: Option<String>) -> NotesResult<EnvMode> {
    match value.as_deref() {
        None | Some("development") => Ok(EnvMode::Development),
        Some("production") => Ok(EnvMode::Production),
        Some(other) => Err(NotesError::InvalidInput(format!(
            "unknown environment mode {other:?} (expected \"development\" or \"production\")"
        ))),
    }
}

/// Parse the listen port from an environment-variable value.
///
/// `None` (variable unset) defaults to [`DEFAULT_PORT`].
///
/// # Errors
///
/// Returns `NotesError::InvalidInput` when the value is not a valid port
/// number.
pub fn port_from_env_value(value: Option<String>) -> NotesResult<u16> {
    match value {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw.parse().map_err(|_| {
            NotesError::InvalidInput(format!("invalid port number {raw:?}"))
        }),
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_file: PathBuf,
    env_mode: EnvMode,
}

impl CoreConfig {
    pub fn new(data_file: PathBuf, env_mode: EnvMode) -> Self {
        Self {
            data_file,
            env_mode,
        }
    }

    /// Path of the persisted notes file.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn env_mode(&self) -> EnvMode {
        self.env_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_mode_defaults_to_development() {
        assert_eq!(
            env_mode_from_env_value(None).unwrap(),
            EnvMode::Development
        );
    }

    #[test]
    fn env_mode_accepts_production() {
        assert_eq!(
            env_mode_from_env_value(Some("production".into())).unwrap(),
            EnvMode::Production
        );
        assert!(EnvMode::Production.is_production());
    }

    #[test]
    fn env_mode_rejects_unknown_values() {
        assert!(matches!(
            env_mode_from_env_value(Some("staging".into())),
            Err(NotesError::InvalidInput(_))
        ));
    }

    #[test]
    fn port_defaults_and_parses() {
        assert_eq!(port_from_env_value(None).unwrap(), 3000);
        assert_eq!(port_from_env_value(Some("8080".into())).unwrap(), 8080);
        assert!(matches!(
            port_from_env_value(Some("not-a-port".into())),
            Err(NotesError::InvalidInput(_))
        ));
    }
}
