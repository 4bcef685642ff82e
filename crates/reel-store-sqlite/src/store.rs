//! [`SqliteStore`] — the SQLite implementation of [`CatalogStore`].

use std::path::Path;

use reel_core::{
  entity::{Genre, Language, Movie, MovieDetails, NewMovie},
  guard::fold_case,
  mutation::{GenrePatch, MoviePatch},
  store::{CatalogStore, MovieQuery},
};
use rusqlite::OptionalExtension as _;
use tracing::debug;

use crate::{
  Result,
  encode::{
    DETAIL_COLUMNS, MOVIE_COLUMNS, details_from_row, genre_from_row,
    language_from_row, movie_from_row, order_by,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A movie catalog backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert each language that is not already present (compared
  /// case-insensitively). Returns the number of rows added.
  ///
  /// Languages are reference data; this is the only way they are written.
  pub async fn seed_languages<I, N>(&self, names: I) -> Result<usize>
  where
    I: IntoIterator<Item = N>,
    N: Into<String>,
  {
    let rows: Vec<(String, String)> = names
      .into_iter()
      .map(|name| {
        let name: String = name.into();
        let key = fold_case(&name);
        (name, key)
      })
      .collect();

    let added = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let mut added = 0;
        {
          let mut stmt = tx.prepare(
            "INSERT OR IGNORE INTO languages (name, name_key) VALUES (?1, ?2)",
          )?;
          for (name, key) in &rows {
            added += stmt.execute(rusqlite::params![name, key])?;
          }
        }
        tx.commit()?;
        Ok(added)
      })
      .await?;

    debug!(added, "languages seeded");
    Ok(added)
  }
}

// ─── CatalogStore impl ───────────────────────────────────────────────────────

impl CatalogStore for SqliteStore {
  type Error = crate::Error;

  // ── Movies ────────────────────────────────────────────────────────────────

  async fn list_movies(&self, query: MovieQuery) -> Result<Vec<MovieDetails>> {
    let sql = format!(
      "SELECT {DETAIL_COLUMNS}
       FROM movies m
       JOIN genres    g ON g.id = m.genre_id
       JOIN languages l ON l.id = m.language_id
       WHERE (?1 IS NULL OR l.name_key = ?1)
         AND (?2 IS NULL OR g.name_key = ?2)
       ORDER BY {}",
      order_by(query.sort)
    );

    let movies = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(
            rusqlite::params![query.language_key, query.genre_key],
            details_from_row,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(movies)
  }

  async fn get_movie(&self, id: i64) -> Result<Option<Movie>> {
    let movie = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {MOVIE_COLUMNS} FROM movies m WHERE m.id = ?1"),
              rusqlite::params![id],
              movie_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    Ok(movie)
  }

  async fn find_movie_by_title_key(
    &self,
    title_key: String,
    exclude:   Option<i64>,
  ) -> Result<Option<Movie>> {
    let movie = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {MOVIE_COLUMNS} FROM movies m
                 WHERE m.title_key = ?1 AND (?2 IS NULL OR m.id != ?2)"
              ),
              rusqlite::params![title_key, exclude],
              movie_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    Ok(movie)
  }

  async fn create_movie(&self, input: NewMovie) -> Result<Movie> {
    let title_key = fold_case(&input.title);

    let movie = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO movies (
             title, title_key, genre_id, language_id,
             oscar_count, release_date, duration
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            input.title,
            title_key,
            input.genre_id,
            input.language_id,
            input.oscar_count,
            input.release_date,
            input.duration,
          ],
        )?;

        Ok(Movie {
          id:           conn.last_insert_rowid(),
          title:        input.title,
          genre_id:     input.genre_id,
          language_id:  input.language_id,
          oscar_count:  input.oscar_count,
          release_date: input.release_date,
          duration:     input.duration,
        })
      })
      .await?;

    Ok(movie)
  }

  async fn update_movie(
    &self,
    id:    i64,
    patch: MoviePatch,
  ) -> Result<Option<Movie>> {
    // Read, merge and write inside one transaction so the row cannot vanish
    // between the read and the write.
    let movie = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let current = tx
          .query_row(
            &format!("SELECT {MOVIE_COLUMNS} FROM movies m WHERE m.id = ?1"),
            rusqlite::params![id],
            movie_from_row,
          )
          .optional()?;

        let Some(mut movie) = current else {
          return Ok(None);
        };
        patch.apply(&mut movie);

        tx.execute(
          "UPDATE movies SET
             title = ?2, title_key = ?3, genre_id = ?4, language_id = ?5,
             oscar_count = ?6, release_date = ?7, duration = ?8
           WHERE id = ?1",
          rusqlite::params![
            movie.id,
            movie.title,
            fold_case(&movie.title),
            movie.genre_id,
            movie.language_id,
            movie.oscar_count,
            movie.release_date,
            movie.duration,
          ],
        )?;
        tx.commit()?;

        Ok(Some(movie))
      })
      .await?;

    Ok(movie)
  }

  async fn delete_movie(&self, id: i64) -> Result<bool> {
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM movies WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;

    Ok(removed > 0)
  }

  // ── Genres ────────────────────────────────────────────────────────────────

  async fn list_genres(&self) -> Result<Vec<Genre>> {
    let genres = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare("SELECT id, name FROM genres ORDER BY id ASC")?;
        let rows = stmt
          .query_map([], genre_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(genres)
  }

  async fn get_genre(&self, id: i64) -> Result<Option<Genre>> {
    let genre = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, name FROM genres WHERE id = ?1",
              rusqlite::params![id],
              genre_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    Ok(genre)
  }

  async fn find_genre_by_name_key(
    &self,
    name_key: String,
    exclude:  Option<i64>,
  ) -> Result<Option<Genre>> {
    let genre = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, name FROM genres
               WHERE name_key = ?1 AND (?2 IS NULL OR id != ?2)",
              rusqlite::params![name_key, exclude],
              genre_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    Ok(genre)
  }

  async fn create_genre(&self, name: String) -> Result<Genre> {
    let name_key = fold_case(&name);

    let genre = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO genres (name, name_key) VALUES (?1, ?2)",
          rusqlite::params![name, name_key],
        )?;
        Ok(Genre {
          id: conn.last_insert_rowid(),
          name,
        })
      })
      .await?;

    Ok(genre)
  }

  async fn update_genre(
    &self,
    id:    i64,
    patch: GenrePatch,
  ) -> Result<Option<Genre>> {
    let genre = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let current = tx
          .query_row(
            "SELECT id, name FROM genres WHERE id = ?1",
            rusqlite::params![id],
            genre_from_row,
          )
          .optional()?;

        let Some(mut genre) = current else {
          return Ok(None);
        };
        patch.apply(&mut genre);

        tx.execute(
          "UPDATE genres SET name = ?2, name_key = ?3 WHERE id = ?1",
          rusqlite::params![genre.id, genre.name, fold_case(&genre.name)],
        )?;
        tx.commit()?;

        Ok(Some(genre))
      })
      .await?;

    Ok(genre)
  }

  async fn delete_genre(&self, id: i64) -> Result<bool> {
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM genres WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;

    Ok(removed > 0)
  }

  // ── Languages ─────────────────────────────────────────────────────────────

  async fn list_languages(&self) -> Result<Vec<Language>> {
    let languages = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT id, name FROM languages ORDER BY id ASC")?;
        let rows = stmt
          .query_map([], language_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(languages)
  }
}
