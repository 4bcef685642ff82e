//! Error type for `reel-store-sqlite`.

use reel_core::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

impl StoreError for Error {
  /// A UNIQUE violation on a folded `*_key` column: the name or title was
  /// claimed by a concurrent write after the catalog checked it.
  fn is_conflict(&self) -> bool {
    match self {
      Error::Database(tokio_rusqlite::Error::Rusqlite(
        rusqlite::Error::SqliteFailure(e, _),
      )) => e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE,
      _ => false,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
