//! Request body extraction.

use axum::extract::FromRequest;

use super::error::ApiError;

/// JSON body parsed against a schema type.
///
/// Any rejection (malformed JSON, missing `Content-Type`, missing required
/// field, wrong type, unknown enum value) becomes [`ApiError::Validation`],
/// so the handler body, and therefore storage, never runs.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ValidatedJson<T>(pub T);
