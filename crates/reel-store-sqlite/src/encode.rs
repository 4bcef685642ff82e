//! Mapping between SQLite rows and `reel-core` entity types.
//!
//! Dates are stored as `YYYY-MM-DD` text via rusqlite's `chrono` support.
//! Counts and durations are stored as plain integers; values outside `u32`
//! fail the row conversion rather than wrapping.

use reel_core::{
  entity::{Genre, Language, Movie, MovieDetails},
  query::SortKey,
};
use rusqlite::Row;

// ─── Column lists ────────────────────────────────────────────────────────────

pub const MOVIE_COLUMNS: &str = "m.id, m.title, m.genre_id, m.language_id, \
                                 m.oscar_count, m.release_date, m.duration";

pub const DETAIL_COLUMNS: &str = "m.id, m.title, m.genre_id, m.language_id, \
                                  m.oscar_count, m.release_date, m.duration, \
                                  g.id, g.name, l.id, l.name";

// ─── Ordering ────────────────────────────────────────────────────────────────

/// `ORDER BY` clause for a movie listing; ties always fall back to the id.
/// Titles order by their folded key, so case never decides the position.
pub fn order_by(sort: SortKey) -> &'static str {
  match sort {
    SortKey::Id => "m.id ASC",
    SortKey::Title => "m.title_key ASC, m.id ASC",
    SortKey::ReleaseDate => "m.release_date ASC, m.id ASC",
    SortKey::OscarCount => "m.oscar_count ASC, m.id ASC",
    SortKey::Duration => "m.duration ASC, m.id ASC",
  }
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Read a [`Movie`] from the first seven columns of `row`
/// (see [`MOVIE_COLUMNS`]).
pub fn movie_from_row(row: &Row<'_>) -> rusqlite::Result<Movie> {
  Ok(Movie {
    id:           row.get(0)?,
    title:        row.get(1)?,
    genre_id:     row.get(2)?,
    language_id:  row.get(3)?,
    oscar_count:  row.get(4)?,
    release_date: row.get(5)?,
    duration:     row.get(6)?,
  })
}

/// Read a [`MovieDetails`] from a row selected with [`DETAIL_COLUMNS`].
pub fn details_from_row(row: &Row<'_>) -> rusqlite::Result<MovieDetails> {
  Ok(MovieDetails {
    movie:    movie_from_row(row)?,
    genre:    Genre {
      id:   row.get(7)?,
      name: row.get(8)?,
    },
    language: Language {
      id:   row.get(9)?,
      name: row.get(10)?,
    },
  })
}

pub fn genre_from_row(row: &Row<'_>) -> rusqlite::Result<Genre> {
  Ok(Genre {
    id:   row.get(0)?,
    name: row.get(1)?,
  })
}

pub fn language_from_row(row: &Row<'_>) -> rusqlite::Result<Language> {
  Ok(Language {
    id:   row.get(0)?,
    name: row.get(1)?,
  })
}
