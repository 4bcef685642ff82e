//! JSON REST API for Reel.
//!
//! Exposes an axum [`Router`] backed by a [`reel_core::Catalog`] over any
//! [`CatalogStore`]. TLS, tracing layers and transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .merge(reel_api::api_router(catalog.clone()))
//! ```

pub mod error;
pub mod extract;
pub mod genres;
pub mod languages;
pub mod movies;

use axum::{Router, routing::get};
use reel_core::{Catalog, store::CatalogStore};

pub use error::ApiError;

/// Build a fully-materialised API router for `catalog`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(catalog: Catalog<S>) -> Router<()>
where
  S: CatalogStore + 'static,
{
  Router::new()
    // Movies. `GET /movies/{key}` reads the segment as a genre name, while
    // `PUT`/`DELETE` read it as a movie id.
    .route("/movies", get(movies::list::<S>).post(movies::create::<S>))
    .route(
      "/movies/{key}",
      get(movies::by_genre::<S>)
        .put(movies::update::<S>)
        .delete(movies::delete::<S>),
    )
    // Genres
    .route("/genres", get(genres::list::<S>).post(genres::create::<S>))
    .route(
      "/genres/{id}",
      axum::routing::put(genres::update::<S>).delete(genres::delete::<S>),
    )
    // Languages
    .route("/languages", get(languages::list::<S>))
    .with_state(catalog)
}

// ─── Integration tests ────────────────────────────────────────────────────────
