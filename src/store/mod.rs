//! Award record loading and storage

pub mod loader;
pub mod sqlite;

pub use loader::{load_dataset, LoadReport};
pub use sqlite::{AwardRepository, SqliteAwardStore};
