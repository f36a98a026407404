use async_trait::async_trait;
use shift_core::db::repository::{DayRepository, RepositoryError};
use shift_core::db::{DbConfig, RepositoryFactory};

use crate::repository::SqliteRepository;

/// [`RepositoryFactory`] for SQLite.
///
/// Register this with a [`shift_core::db::RepositoryRegistry`] to make the
/// `"sqlite"` backend available:
///
/// ```rust,no_run
/// use shift_core::db::RepositoryRegistry;
/// use shift_db_sqlite::SqliteRepositoryFactory;
///
/// let mut registry = RepositoryRegistry::new();
/// registry.register(Box::new(SqliteRepositoryFactory));
/// ```
pub struct SqliteRepositoryFactory;

#[async_trait]
impl RepositoryFactory for SqliteRepositoryFactory {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    /// Opens the database described by `config.connection_string` and runs
    /// migrations.
    ///
    /// Accepted connection-string values are sqlx sqlite URLs:
    /// * `sqlite:shift.db?mode=rwc` — a file, created when missing.
    /// * `sqlite::memory:` — an ephemeral in-memory database (tests).
    async fn create(&self, config: &DbConfig) -> Result<Box<dyn DayRepository>, RepositoryError> {
        let repo = SqliteRepository::new(&config.connection_string).await?;
        repo.run_migrations().await?;
        Ok(Box::new(repo))
    }
}
