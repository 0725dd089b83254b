use axum::body::{Body, Bytes};
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// `Json` extractor whose rejection goes through [`ApiError`].
///
/// A request without a body or without a `Content-Type` reads as `{}`, so
/// handlers report the missing fields instead of rejecting the request.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let headers = req.headers().clone();
        let bytes = Bytes::from_request(req, state).await?;

        if bytes.is_empty() || !headers.contains_key(CONTENT_TYPE) {
            let Json(value) = Json::<T>::from_bytes(b"{}")?;
            return Ok(Self(value));
        }

        let mut req = Request::new(Body::from(bytes));
        *req.headers_mut() = headers;
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
