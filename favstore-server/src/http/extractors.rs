//! Custom Axum extractors
//!
//! Both reject with `ApiError::BadInput` so every client error is JSON.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{FavoriteId, NewFavorite, ValidationError};

/// Extract and validate a numeric favorite id from path
pub struct ValidFavoriteId(pub FavoriteId);

impl<S> FromRequestParts<S> for ValidFavoriteId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadInput(ValidationError::MalformedPath(e.body_text())))?;

        Ok(Self(FavoriteId::parse(&id)?))
    }
}

/// Decode a full favorite field set from the request body.
///
/// Unlike `axum::Json` this ignores the `Content-Type` header and maps
/// every decoding failure to 400.
pub struct FavoriteJson(pub NewFavorite);

impl<S> FromRequest<S> for FavoriteJson
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadInput(ValidationError::MalformedBody(e.body_text())))?;

        Ok(Self(NewFavorite::from_json(&bytes)?))
    }
}
