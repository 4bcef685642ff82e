//! Handlers for `/movies` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/movies` | Optional `?sort=title\|release_date\|oscar_count\|duration` and `?language=` |
//! | `GET`    | `/movies/:genre` | Movies of one genre; 404 if there are none |
//! | `POST`   | `/movies` | Body: [`MovieDraft`]; 201, no body |
//! | `PUT`    | `/movies/:id` | Body: [`MovieChanges`]; 204 |
//! | `DELETE` | `/movies/:id` | 204 |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
};
use reel_core::{
  Catalog,
  aggregate::MovieListing,
  entity::MovieDetails,
  mutation::{MovieChanges, MovieDraft},
  query::ListParams,
  store::CatalogStore,
};

use crate::{error::ApiError, extract::JsonBody};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /movies[?sort=...][&language=...]`
pub async fn list<S>(
  State(catalog): State<Catalog<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<MovieListing>, ApiError>
where
  S: CatalogStore + 'static,
{
  let listing = catalog.list_movies(&params).await?;
  Ok(Json(listing))
}

/// `GET /movies/:genre`
pub async fn by_genre<S>(
  State(catalog): State<Catalog<S>>,
  Path(genre): Path<String>,
) -> Result<Json<Vec<MovieDetails>>, ApiError>
where
  S: CatalogStore + 'static,
{
  let movies = catalog.movies_by_genre(&genre).await?;
  Ok(Json(movies))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /movies`
pub async fn create<S>(
  State(catalog): State<Catalog<S>>,
  JsonBody(body): JsonBody<MovieDraft>,
) -> Result<StatusCode, ApiError>
where
  S: CatalogStore + 'static,
{
  catalog.create_movie(body).await?;
  Ok(StatusCode::CREATED)
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /movies/:id` — only the supplied fields change.
pub async fn update<S>(
  State(catalog): State<Catalog<S>>,
  Path(id): Path<i64>,
  JsonBody(body): JsonBody<MovieChanges>,
) -> Result<StatusCode, ApiError>
where
  S: CatalogStore + 'static,
{
  catalog.update_movie(id, body).await?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /movies/:id`
pub async fn delete<S>(
  State(catalog): State<Catalog<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: CatalogStore + 'static,
{
  catalog.delete_movie(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
