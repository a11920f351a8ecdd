//! Request body extractor with the API's own rejection shape.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Like `axum::Json`, but ignores `Content-Type`, treats an empty body as `{}`
/// and rejects undecodable bodies with `400 { "error": "Invalid JSON" }`.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let raw: &[u8] = if body.is_empty() { b"{}" } else { &body };

        serde_json::from_slice(raw)
            .map(JsonBody)
            .map_err(|e| AppError::InvalidJson(e).into_response())
    }
}
