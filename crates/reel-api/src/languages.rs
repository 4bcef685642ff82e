//! Handler for `GET /languages`.

use axum::{Json, extract::State};
use reel_core::{Catalog, entity::Language, store::CatalogStore};

use crate::error::ApiError;

/// `GET /languages` — reference data, ordered by id.
pub async fn list<S>(
  State(catalog): State<Catalog<S>>,
) -> Result<Json<Vec<Language>>, ApiError>
where
  S: CatalogStore + 'static,
{
  let languages = catalog.list_languages().await?;
  Ok(Json(languages))
}
