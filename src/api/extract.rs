//! Extractors whose rejections render as the standard error body

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, OriginalUri, Path, Request},
    http::{request::Parts, Uri},
    Json,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// `Path` that rejects with an [`ApiError`]
pub struct ApiPath<T>(pub T);

/// `Json` body that rejects with an [`ApiError`]
pub struct ApiJson<T>(pub T);

// Nested routers strip their prefix from `uri`, the original keeps it
fn request_uri(original: Option<&OriginalUri>, uri: &Uri) -> Uri {
    original.map(|o| o.0.clone()).unwrap_or_else(|| uri.clone())
}

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let uri = request_uri(parts.extensions.get::<OriginalUri>(), &parts.uri);
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::rejected(
                &uri,
                rejection.status(),
                rejection.body_text(),
            )),
        }
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let uri = request_uri(req.extensions().get::<OriginalUri>(), req.uri());
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::rejected(
                &uri,
                rejection.status(),
                rejection.body_text(),
            )),
        }
    }
}
