//! Case-insensitive uniqueness checks for genre names and movie titles.

use tracing::debug;

use crate::{Error, Result, store::CatalogStore};

/// Locale-naive case folding used for every uniqueness and filter
/// comparison. Accents are preserved.
pub fn fold_case(s: &str) -> String { s.to_lowercase() }

pub(crate) fn genre_name_taken(name: &str) -> String {
  format!("genre {name:?} already exists")
}

pub(crate) fn title_taken(title: &str) -> String {
  format!("a movie titled {title:?} already exists")
}

/// Fail with [`Error::Conflict`] if another genre already uses `name`.
///
/// `exclude` is the id of the genre being renamed, if any, so that keeping a
/// genre's own name never conflicts with itself.
pub async fn ensure_genre_name_free<S>(
  store: &S,
  name: &str,
  exclude: Option<i64>,
) -> Result<()>
where
  S: CatalogStore,
{
  let existing = store
    .find_genre_by_name_key(fold_case(name), exclude)
    .await
    .map_err(Error::store)?;

  match existing {
    Some(genre) => {
      debug!(name, existing_id = genre.id, "genre name already taken");
      Err(Error::Conflict(genre_name_taken(&genre.name)))
    }
    None => Ok(()),
  }
}

/// Fail with [`Error::Conflict`] if another movie already uses `title`.
pub async fn ensure_title_free<S>(
  store: &S,
  title: &str,
  exclude: Option<i64>,
) -> Result<()>
where
  S: CatalogStore,
{
  let existing = store
    .find_movie_by_title_key(fold_case(title), exclude)
    .await
    .map_err(Error::store)?;

  match existing {
    Some(movie) => {
      debug!(title, existing_id = movie.id, "movie title already taken");
      Err(Error::Conflict(title_taken(&movie.title)))
    }
    None => Ok(()),
  }
}

#[cfg(test)]
mod tests {
  use super::fold_case;

  #[test]
  fn folding_ignores_case_but_keeps_accents() {
    assert_eq!(fold_case("Ação"), fold_case("AÇÃO"));
    assert_ne!(fold_case("Acao"), fold_case("Ação"));
    assert_eq!(fold_case("Drama"), "drama");
  }
}
