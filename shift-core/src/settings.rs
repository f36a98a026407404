//! Explicit owner of the effective user settings.
//!
//! Instead of process-wide mutable state, callers hold a [`SettingsStore`]
//! and pass it (or a snapshot from it) to whatever needs configuration.
//! Every mutation goes through [`SettingsStore::update`], which persists the
//! change and hands back a fresh immutable snapshot.

use std::sync::Arc;

use tracing::info;

use crate::db::repository::{DayRepository, RepositoryError};
use crate::models::{SettingsPatch, UserSettings};

pub struct SettingsStore {
    repo: Arc<dyn DayRepository>,
    current: UserSettings,
}

impl SettingsStore {
    /// Loads settings from the repository, merging whatever was stored over
    /// the hard-coded defaults.
    ///
    /// When the stored copy predates the default tariff fields, the merged
    /// result is written back immediately so later loads see a complete row.
    pub async fn load(repo: Arc<dyn DayRepository>) -> Result<Self, RepositoryError> {
        let current = match repo.load_settings().await? {
            Some(stored) => {
                let merged = UserSettings::default().with_patch(&stored);
                if stored.default_rent_percent.is_none() {
                    repo.save_settings(&merged).await?;
                    info!("migrated stored settings with current default tariffs");
                }
                merged
            }
            None => UserSettings::default(),
        };

        Ok(Self { repo, current })
    }

    /// The current effective settings snapshot.
    pub fn settings(&self) -> &UserSettings {
        &self.current
    }

    /// Applies a partial update, persists the result and returns the new
    /// snapshot. The previous snapshot is replaced only after the save
    /// succeeds.
    pub async fn update(
        &mut self,
        patch: &SettingsPatch,
    ) -> Result<UserSettings, RepositoryError> {
        let updated = self.current.with_patch(patch);
        self.repo.save_settings(&updated).await?;
        self.current = updated.clone();
        Ok(updated)
    }
}
