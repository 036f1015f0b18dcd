//! Body and query extractors that reject with the uniform error body.
//!
//! Rejection details from serde stay in the debug log; clients only see a
//! generic `VALIDATION_ERROR`.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON request body. A missing or blank body yields `T::default()`, and the
/// `Content-Type` header is not checked.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Unreadable request body");
            AppError::Validation("Request body is unreadable or too large".to_string())
        })?;

        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(Self(T::default()));
        }

        serde_json::from_slice(&bytes).map(Self).map_err(|e| {
            tracing::debug!(error = %e, "Malformed JSON request body");
            AppError::Validation("Request body must be a JSON object".to_string())
        })
    }
}

/// Query string parameters.
#[derive(Debug, Clone, Default)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "Malformed query string");
                AppError::Validation("Query string is malformed".to_string())
            })?;
        Ok(Self(value))
    }
}
