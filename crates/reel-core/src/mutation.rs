//! Validation of create/update payloads and partial-update merging.
//!
//! Request bodies arrive as drafts (`MovieDraft`, `MovieChanges`, …) whose
//! fields are all optional, so a missing field, a negative count or an
//! unparsable date surfaces as [`Error::Validation`]. Validation turns them
//! into the typed inputs the store accepts.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use crate::{
  Error, Result,
  entity::{Genre, Movie, NewMovie},
};

// ─── Field helpers ───────────────────────────────────────────────────────────

/// Distinguish an absent key (`None`) from an explicit `null`
/// (`Some(None)`).
fn present<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  Option::<T>::deserialize(de).map(Some)
}

/// Parse an ISO-8601-like date. Accepts `YYYY-MM-DD`, an RFC 3339 timestamp,
/// or a naive `YYYY-MM-DDTHH:MM:SS` timestamp; only the date part is kept.
///
/// Blank input yields `Ok(None)`.
pub fn parse_release_date(raw: &str) -> Result<Option<NaiveDate>> {
  let raw = raw.trim();
  if raw.is_empty() {
    return Ok(None);
  }

  if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
    return Ok(Some(date));
  }
  if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
    return Ok(Some(dt.date_naive()));
  }
  if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
    return Ok(Some(dt.date()));
  }

  Err(Error::Validation(format!("invalid release_date: {raw:?}")))
}

fn required_text(field: &str, value: Option<String>) -> Result<String> {
  match value.as_deref().map(str::trim) {
    Some(v) if !v.is_empty() => Ok(v.to_owned()),
    _ => Err(Error::Validation(format!("{field} is required"))),
  }
}

fn non_negative(field: &str, value: i64) -> Result<u32> {
  u32::try_from(value).map_err(|_| {
    Error::Validation(format!("{field} must be a non-negative integer"))
  })
}

// ─── Movies ──────────────────────────────────────────────────────────────────

/// Body of a movie creation request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieDraft {
  pub title:        Option<String>,
  pub genre_id:     Option<i64>,
  pub language_id:  Option<i64>,
  pub oscar_count:  Option<i64>,
  pub release_date: Option<String>,
  pub duration:     Option<i64>,
}

impl MovieDraft {
  pub fn validate(self) -> Result<NewMovie> {
    let title = required_text("title", self.title)?;
    let genre_id = self
      .genre_id
      .ok_or_else(|| Error::Validation("genre_id is required".into()))?;
    let language_id = self
      .language_id
      .ok_or_else(|| Error::Validation("language_id is required".into()))?;

    let oscar_count = self
      .oscar_count
      .map(|n| non_negative("oscar_count", n))
      .transpose()?
      .unwrap_or(0);
    let duration = self
      .duration
      .map(|n| non_negative("duration", n))
      .transpose()?;
    let release_date = match self.release_date.as_deref() {
      Some(raw) => parse_release_date(raw)?,
      None => None,
    };

    Ok(NewMovie {
      title,
      genre_id,
      language_id,
      oscar_count,
      release_date,
      duration,
    })
  }
}

/// Body of a movie update request. Every key is optional; only supplied keys
/// are applied.
///
/// `release_date` and `duration` also accept an explicit `null` (and, for
/// `release_date`, an empty string) meaning "clear the stored value".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieChanges {
  pub title:        Option<String>,
  pub genre_id:     Option<i64>,
  pub language_id:  Option<i64>,
  pub oscar_count:  Option<i64>,
  #[serde(default, deserialize_with = "present")]
  pub release_date: Option<Option<String>>,
  #[serde(default, deserialize_with = "present")]
  pub duration:     Option<Option<i64>>,
}

impl MovieChanges {
  pub fn validate(self) -> Result<MoviePatch> {
    let title = self
      .title
      .map(|t| required_text("title", Some(t)))
      .transpose()?;
    let oscar_count = self
      .oscar_count
      .map(|n| non_negative("oscar_count", n))
      .transpose()?;
    let duration = match self.duration {
      Some(Some(n)) => Some(Some(non_negative("duration", n)?)),
      Some(None) => Some(None),
      None => None,
    };
    let release_date = match self.release_date {
      Some(Some(raw)) => Some(parse_release_date(&raw)?),
      Some(None) => Some(None),
      None => None,
    };

    Ok(MoviePatch {
      title,
      genre_id: self.genre_id,
      language_id: self.language_id,
      oscar_count,
      release_date,
      duration,
    })
  }
}

/// A validated partial update for a [`Movie`].
///
/// The outer `Option` of `release_date` and `duration` says whether the field
/// is being changed; the inner one is the new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoviePatch {
  pub title:        Option<String>,
  pub genre_id:     Option<i64>,
  pub language_id:  Option<i64>,
  pub oscar_count:  Option<u32>,
  pub release_date: Option<Option<NaiveDate>>,
  pub duration:     Option<Option<u32>>,
}

impl MoviePatch {
  /// Merge the supplied fields into `movie`, leaving the rest untouched.
  pub fn apply(self, movie: &mut Movie) {
    if let Some(title) = self.title {
      movie.title = title;
    }
    if let Some(genre_id) = self.genre_id {
      movie.genre_id = genre_id;
    }
    if let Some(language_id) = self.language_id {
      movie.language_id = language_id;
    }
    if let Some(oscar_count) = self.oscar_count {
      movie.oscar_count = oscar_count;
    }
    if let Some(release_date) = self.release_date {
      movie.release_date = release_date;
    }
    if let Some(duration) = self.duration {
      movie.duration = duration;
    }
  }
}

// ─── Genres ──────────────────────────────────────────────────────────────────

/// Body of a genre creation request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenreDraft {
  pub name: Option<String>,
}

impl GenreDraft {
  /// Returns the trimmed, non-empty genre name.
  pub fn validate(self) -> Result<String> { required_text("name", self.name) }
}

/// Body of a genre update request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenreChanges {
  pub name: Option<String>,
}

impl GenreChanges {
  pub fn validate(self) -> Result<GenrePatch> {
    let name = self
      .name
      .map(|n| required_text("name", Some(n)))
      .transpose()?;
    Ok(GenrePatch { name })
  }
}

/// A validated partial update for a [`Genre`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenrePatch {
  pub name: Option<String>,
}

impl GenrePatch {
  pub fn apply(self, genre: &mut Genre) {
    if let Some(name) = self.name {
      genre.name = name;
    }
  }
}
