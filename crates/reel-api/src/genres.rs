//! Handlers for `/genres` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/genres` | Ordered by id |
//! | `POST`   | `/genres` | Body: `{"name":"..."}`; 201 |
//! | `PUT`    | `/genres/:id` | Body: `{"name":"..."}` |
//! | `DELETE` | `/genres/:id` | |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use reel_core::{
  Catalog,
  entity::Genre,
  mutation::{GenreChanges, GenreDraft},
  store::CatalogStore,
};
use serde::Serialize;

use crate::{error::ApiError, extract::JsonBody};

/// Confirmation body returned by genre writes.
#[derive(Debug, Serialize)]
pub struct GenreMessage {
  pub message: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub genre:   Option<Genre>,
}

/// `GET /genres`
pub async fn list<S>(
  State(catalog): State<Catalog<S>>,
) -> Result<Json<Vec<Genre>>, ApiError>
where
  S: CatalogStore + 'static,
{
  let genres = catalog.list_genres().await?;
  Ok(Json(genres))
}

/// `POST /genres` — returns 201 + the stored genre.
pub async fn create<S>(
  State(catalog): State<Catalog<S>>,
  JsonBody(body): JsonBody<GenreDraft>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CatalogStore + 'static,
{
  let genre = catalog.create_genre(body).await?;
  Ok((
    StatusCode::CREATED,
    Json(GenreMessage {
      message: "genre created",
      genre:   Some(genre),
    }),
  ))
}

/// `PUT /genres/:id`
pub async fn update<S>(
  State(catalog): State<Catalog<S>>,
  Path(id): Path<i64>,
  JsonBody(body): JsonBody<GenreChanges>,
) -> Result<Json<GenreMessage>, ApiError>
where
  S: CatalogStore + 'static,
{
  let genre = catalog.update_genre(id, body).await?;
  Ok(Json(GenreMessage {
    message: "genre updated",
    genre:   Some(genre),
  }))
}

/// `DELETE /genres/:id`
pub async fn delete<S>(
  State(catalog): State<Catalog<S>>,
  Path(id): Path<i64>,
) -> Result<Json<GenreMessage>, ApiError>
where
  S: CatalogStore + 'static,
{
  catalog.delete_genre(id).await?;
  Ok(Json(GenreMessage {
    message: "genre deleted",
    genre:   None,
  }))
}
