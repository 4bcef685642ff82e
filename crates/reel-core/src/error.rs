//! Error types for `reel-core`.

use thiserror::Error;

use crate::store::StoreError;

/// The failure taxonomy surfaced by every catalog operation.
#[derive(Debug, Error)]
pub enum Error {
  /// Malformed or missing input, e.g. an empty genre name.
  #[error("validation error: {0}")]
  Validation(String),

  /// A case-insensitive uniqueness rule would be violated.
  #[error("conflict: {0}")]
  Conflict(String),

  #[error("not found: {0}")]
  NotFound(String),

  /// Anything the storage backend reported. Never shown to callers verbatim.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub(crate) fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }

  /// Map a failed write, turning a uniqueness refusal into
  /// [`Error::Conflict`] with the message built by `conflict`.
  pub(crate) fn write<E>(e: E, conflict: impl FnOnce() -> String) -> Self
  where
    E: StoreError,
  {
    if e.is_conflict() {
      Self::Conflict(conflict())
    } else {
      Self::store(e)
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
