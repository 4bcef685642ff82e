//! [`Catalog`] — the operations exposed to the HTTP layer.
//!
//! Each operation validates its input, consults the uniqueness guard for
//! writes, runs against the injected store, and post-processes listings.
//! `NotFound` and `Conflict` are always detected before anything is written;
//! a key claimed by a concurrent writer after the check still comes back as
//! `Conflict`, from the store's own refusal.

use std::sync::Arc;

use tracing::debug;

use crate::{
  Error, Result,
  aggregate::MovieListing,
  entity::{Genre, Language, Movie, MovieDetails},
  guard::{
    ensure_genre_name_free, ensure_title_free, genre_name_taken, title_taken,
  },
  mutation::{GenreChanges, GenreDraft, MovieChanges, MovieDraft},
  query::{self, ListParams},
  store::CatalogStore,
};

/// The catalog service, generic over its store backend.
///
/// Cloning is cheap — the store handle is reference-counted.
pub struct Catalog<S> {
  store: Arc<S>,
}

impl<S> Clone for Catalog<S> {
  fn clone(&self) -> Self {
    Self {
      store: Arc::clone(&self.store),
    }
  }
}

fn movie_not_found(id: i64) -> Error {
  debug!(id, "movie not found");
  Error::NotFound(format!("movie {id} not found"))
}

fn genre_not_found(id: i64) -> Error {
  debug!(id, "genre not found");
  Error::NotFound(format!("genre {id} not found"))
}

impl<S> Catalog<S>
where
  S: CatalogStore,
{
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  /// The underlying store handle.
  pub fn store(&self) -> &Arc<S> { &self.store }

  // ── Reads ─────────────────────────────────────────────────────────────

  /// All movies, optionally filtered by language and sorted, with the
  /// duration summary attached.
  pub async fn list_movies(&self, params: &ListParams) -> Result<MovieListing> {
    let movies = self
      .store
      .list_movies(params.to_query())
      .await
      .map_err(Error::store)?;
    Ok(MovieListing::new(movies))
  }

  /// Every movie whose genre name matches `genre_name` case-insensitively.
  /// Fails with `NotFound` if there are none.
  pub async fn movies_by_genre(
    &self,
    genre_name: &str,
  ) -> Result<Vec<MovieDetails>> {
    let movies = self
      .store
      .list_movies(query::by_genre(genre_name))
      .await
      .map_err(Error::store)?;

    if movies.is_empty() {
      debug!(genre_name, "no movies for genre");
      return Err(Error::NotFound(format!(
        "no movies found for genre {genre_name:?}"
      )));
    }
    Ok(movies)
  }

  pub async fn list_genres(&self) -> Result<Vec<Genre>> {
    self.store.list_genres().await.map_err(Error::store)
  }

  pub async fn list_languages(&self) -> Result<Vec<Language>> {
    self.store.list_languages().await.map_err(Error::store)
  }

  // ── Movies ────────────────────────────────────────────────────────────

  pub async fn create_movie(&self, draft: MovieDraft) -> Result<Movie> {
    let input = draft.validate()?;
    ensure_title_free(&*self.store, &input.title, None).await?;

    let title = input.title.clone();
    let movie = self
      .store
      .create_movie(input)
      .await
      .map_err(|e| Error::write(e, || title_taken(&title)))?;
    debug!(id = movie.id, title = %movie.title, "movie created");
    Ok(movie)
  }

  /// Apply a partial update. Unsupplied fields keep their stored values.
  pub async fn update_movie(
    &self,
    id: i64,
    changes: MovieChanges,
  ) -> Result<Movie> {
    self
      .store
      .get_movie(id)
      .await
      .map_err(Error::store)?
      .ok_or_else(|| movie_not_found(id))?;

    let patch = changes.validate()?;
    if let Some(title) = &patch.title {
      ensure_title_free(&*self.store, title, Some(id)).await?;
    }

    let title = patch.title.clone().unwrap_or_default();
    self
      .store
      .update_movie(id, patch)
      .await
      .map_err(|e| Error::write(e, || title_taken(&title)))?
      .ok_or_else(|| movie_not_found(id))
  }

  pub async fn delete_movie(&self, id: i64) -> Result<()> {
    self
      .store
      .get_movie(id)
      .await
      .map_err(Error::store)?
      .ok_or_else(|| movie_not_found(id))?;

    if !self.store.delete_movie(id).await.map_err(Error::store)? {
      return Err(movie_not_found(id));
    }
    debug!(id, "movie deleted");
    Ok(())
  }

  // ── Genres ────────────────────────────────────────────────────────────

  pub async fn create_genre(&self, draft: GenreDraft) -> Result<Genre> {
    let name = draft.validate()?;
    ensure_genre_name_free(&*self.store, &name, None).await?;

    let genre = self
      .store
      .create_genre(name.clone())
      .await
      .map_err(|e| Error::write(e, || genre_name_taken(&name)))?;
    debug!(id = genre.id, name = %genre.name, "genre created");
    Ok(genre)
  }

  /// Rename a genre. Keeping its own name (in any casing) is not a conflict.
  pub async fn update_genre(
    &self,
    id: i64,
    changes: GenreChanges,
  ) -> Result<Genre> {
    self
      .store
      .get_genre(id)
      .await
      .map_err(Error::store)?
      .ok_or_else(|| genre_not_found(id))?;

    let patch = changes.validate()?;
    if let Some(name) = &patch.name {
      ensure_genre_name_free(&*self.store, name, Some(id)).await?;
    }

    let name = patch.name.clone().unwrap_or_default();
    self
      .store
      .update_genre(id, patch)
      .await
      .map_err(|e| Error::write(e, || genre_name_taken(&name)))?
      .ok_or_else(|| genre_not_found(id))
  }

  pub async fn delete_genre(&self, id: i64) -> Result<()> {
    self
      .store
      .get_genre(id)
      .await
      .map_err(Error::store)?
      .ok_or_else(|| genre_not_found(id))?;

    if !self.store.delete_genre(id).await.map_err(Error::store)? {
      return Err(genre_not_found(id));
    }
    debug!(id, "genre deleted");
    Ok(())
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
