//! Translation of listing request parameters into a [`MovieQuery`].

use serde::Deserialize;
use strum::{AsRefStr, EnumString};

use crate::{guard::fold_case, store::MovieQuery};

/// The column a movie listing is ordered by.
///
/// Parsed by exact, case-sensitive match on the snake_case name; anything
/// else falls back to [`SortKey::Id`].
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum SortKey {
  #[default]
  Id,
  Title,
  ReleaseDate,
  OscarCount,
  Duration,
}

impl SortKey {
  /// Resolve a raw `sort` parameter, defaulting on absence or unknown values.
  pub fn resolve(raw: Option<&str>) -> Self {
    raw.and_then(|s| s.parse().ok()).unwrap_or_default()
  }
}

/// Query parameters accepted by the movie listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
  /// One of `title`, `release_date`, `oscar_count`, `duration`.
  pub sort:     Option<String>,
  /// Language name; matched case-insensitively.
  pub language: Option<String>,
}

impl ListParams {
  /// Build the store query for the full movie listing.
  pub fn to_query(&self) -> MovieQuery {
    MovieQuery {
      language_key: self
        .language
        .as_deref()
        .filter(|l| !l.is_empty())
        .map(fold_case),
      genre_key:    None,
      sort:         SortKey::resolve(self.sort.as_deref()),
    }
  }
}

/// Build the store query for listing every movie of one genre.
pub fn by_genre(genre_name: &str) -> MovieQuery {
  MovieQuery {
    genre_key: Some(fold_case(genre_name)),
    ..Default::default()
  }
}
