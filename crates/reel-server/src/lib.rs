//! HTTP server wiring for Reel: configuration and the top-level router.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::{Router, routing::get};
use reel_core::{Catalog, store::CatalogStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `REEL_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
  /// Reference languages inserted at startup if missing.
  #[serde(default = "default_languages")]
  pub languages:  Vec<String>,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 3000 }

fn default_store_path() -> PathBuf { PathBuf::from("reel.db") }

fn default_languages() -> Vec<String> {
  ["Português", "English", "Español", "Français", "Deutsch", "Italiano", "日本語"]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router: the catalog API, a liveness probe,
/// and per-request tracing.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: CatalogStore + 'static,
{
  Router::new()
    .route("/health", get(|| async { "ok" }))
    .merge(reel_api::api_router(Catalog::new(store)))
    .layer(TraceLayer::new_for_http())
}
