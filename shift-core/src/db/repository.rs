use async_trait::async_trait;
use thiserror::Error;

use crate::models::{DayRecord, NewDayRecord, SettingsPatch, UserSettings};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Storage for saved days and user settings. The core treats every method
/// as opaque and potentially slow; sequencing (compute, then save) is the
/// caller's job.
#[async_trait]
pub trait DayRepository: Send + Sync {
    /// Persists a finished day and returns it with the creation timestamp
    /// stamped by the store.
    async fn save_day(&self, day: NewDayRecord) -> Result<DayRecord, RepositoryError>;

    async fn get_day(&self, id: &str) -> Result<DayRecord, RepositoryError>;

    async fn delete_day(&self, id: &str) -> Result<(), RepositoryError>;

    /// All saved days, newest first (creation time descending).
    async fn list_days(&self) -> Result<Vec<DayRecord>, RepositoryError>;

    async fn save_settings(&self, settings: &UserSettings) -> Result<(), RepositoryError>;

    /// Whatever subset of settings was stored, or `None` on first run.
    /// Absent fields fall back to defaults when the patch is merged by
    /// [`crate::settings::SettingsStore`].
    async fn load_settings(&self) -> Result<Option<SettingsPatch>, RepositoryError>;
}
