pub mod calculations;
pub mod db;
pub mod format;
pub mod models;
pub mod settings;

pub use db::repository::{DayRepository, RepositoryError};
pub use models::*;
