//! Entity types — the records held by a catalog store.
//!
//! Identifiers are assigned by the store, increase monotonically, and are
//! never reused. Names and titles keep the caller's casing; uniqueness is
//! judged on their case-folded form (see [`crate::guard`]).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Reference data ──────────────────────────────────────────────────────────

/// A movie genre. Names are unique under case-insensitive comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
  pub id:   i64,
  pub name: String,
}

/// A spoken language. Read-only once seeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
  pub id:   i64,
  pub name: String,
}

// ─── Movie ───────────────────────────────────────────────────────────────────

/// A persisted movie row, with its relations as bare foreign keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
  pub id:           i64,
  pub title:        String,
  pub genre_id:     i64,
  pub language_id:  i64,
  pub oscar_count:  u32,
  pub release_date: Option<NaiveDate>,
  /// Running time in minutes.
  pub duration:     Option<u32>,
}

/// A movie with its genre and language eagerly joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetails {
  #[serde(flatten)]
  pub movie:    Movie,
  pub genre:    Genre,
  pub language: Language,
}

/// Input to [`crate::store::CatalogStore::create_movie`]; already validated.
/// The identifier is always assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
  pub title:        String,
  pub genre_id:     i64,
  pub language_id:  i64,
  pub oscar_count:  u32,
  pub release_date: Option<NaiveDate>,
  pub duration:     Option<u32>,
}

impl NewMovie {
  /// Convenience constructor with all optional fields set to their defaults.
  pub fn new(title: impl Into<String>, genre_id: i64, language_id: i64) -> Self {
    Self {
      title: title.into(),
      genre_id,
      language_id,
      oscar_count: 0,
      release_date: None,
      duration: None,
    }
  }
}
