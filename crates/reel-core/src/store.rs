//! The `CatalogStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `reel-store-sqlite`).
//! [`crate::Catalog`] depends on this abstraction, not on any concrete
//! backend, so the catalog logic can be exercised against a substitute store.

use std::future::Future;

use crate::{
  entity::{Genre, Language, Movie, MovieDetails, NewMovie},
  mutation::{GenrePatch, MoviePatch},
  query::SortKey,
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`CatalogStore::list_movies`].
///
/// Filter keys are already case-folded with [`crate::guard::fold_case`]; the
/// store compares them for equality against its own folded columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieQuery {
  /// Restrict to movies whose language name folds to this key.
  pub language_key: Option<String>,
  /// Restrict to movies whose genre name folds to this key.
  pub genre_key:    Option<String>,
  /// Primary ordering. Ties are always broken by identifier ascending.
  pub sort:         SortKey,
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// The error type of a [`CatalogStore`] backend.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  /// Whether the backend refused a write because a folded name or title is
  /// already taken. Such failures surface as [`crate::Error::Conflict`].
  fn is_conflict(&self) -> bool { false }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a catalog store backend.
///
/// Updates and deletes are conditional: they report absence (`None` /
/// `false`) instead of failing when the target row does not exist, so a
/// record deleted between a caller's existence check and its write is never
/// resurrected.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait CatalogStore: Send + Sync {
  type Error: StoreError;

  // ── Movies ────────────────────────────────────────────────────────────

  /// List movies matching `query`, with genre and language joined.
  fn list_movies(
    &self,
    query: MovieQuery,
  ) -> impl Future<Output = Result<Vec<MovieDetails>, Self::Error>> + Send + '_;

  /// Retrieve a movie by id. Returns `None` if not found.
  fn get_movie(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Movie>, Self::Error>> + Send + '_;

  /// Find a movie whose folded title equals `title_key`, ignoring the movie
  /// with id `exclude` if given.
  fn find_movie_by_title_key(
    &self,
    title_key: String,
    exclude: Option<i64>,
  ) -> impl Future<Output = Result<Option<Movie>, Self::Error>> + Send + '_;

  /// Persist a new movie and return it with its assigned id.
  fn create_movie(
    &self,
    input: NewMovie,
  ) -> impl Future<Output = Result<Movie, Self::Error>> + Send + '_;

  /// Merge `patch` into the stored movie atomically. Returns `None` if the
  /// movie does not exist.
  fn update_movie(
    &self,
    id: i64,
    patch: MoviePatch,
  ) -> impl Future<Output = Result<Option<Movie>, Self::Error>> + Send + '_;

  /// Remove a movie. Returns `false` if it did not exist.
  fn delete_movie(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Genres ────────────────────────────────────────────────────────────

  /// List all genres ordered by id.
  fn list_genres(
    &self,
  ) -> impl Future<Output = Result<Vec<Genre>, Self::Error>> + Send + '_;

  fn get_genre(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Genre>, Self::Error>> + Send + '_;

  /// Find a genre whose folded name equals `name_key`, ignoring the genre
  /// with id `exclude` if given.
  fn find_genre_by_name_key(
    &self,
    name_key: String,
    exclude: Option<i64>,
  ) -> impl Future<Output = Result<Option<Genre>, Self::Error>> + Send + '_;

  fn create_genre(
    &self,
    name: String,
  ) -> impl Future<Output = Result<Genre, Self::Error>> + Send + '_;

  /// Merge `patch` into the stored genre atomically. Returns `None` if the
  /// genre does not exist.
  fn update_genre(
    &self,
    id: i64,
    patch: GenrePatch,
  ) -> impl Future<Output = Result<Option<Genre>, Self::Error>> + Send + '_;

  /// Remove a genre. Returns `false` if it did not exist.
  fn delete_genre(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Languages ─────────────────────────────────────────────────────────

  /// List all languages ordered by id.
  fn list_languages(
    &self,
  ) -> impl Future<Output = Result<Vec<Language>, Self::Error>> + Send + '_;
}
