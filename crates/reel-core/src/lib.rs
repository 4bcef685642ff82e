//! Core types and catalog logic for the Reel movie catalog.
//!
//! This crate is deliberately free of HTTP and database dependencies. Storage
//! backends implement [`store::CatalogStore`]; the HTTP layer drives a
//! [`catalog::Catalog`] built around one.

pub mod aggregate;
pub mod catalog;
pub mod entity;
pub mod error;
pub mod guard;
pub mod mutation;
pub mod query;
pub mod store;

pub use catalog::Catalog;
pub use error::{Error, Result};
