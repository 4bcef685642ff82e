//! Request body extraction.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// A JSON request body. Wrong field types and malformed JSON are answered
/// with a 400 [`ApiError`] instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
