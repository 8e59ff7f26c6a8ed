//! JSON body extractor - deserialization with application error mapping.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor whose rejection is an [`AppError::BadRequest`].
///
/// Only decodes the body. Field rules are checked by the service that
/// consumes the payload.
///
/// # Example
///
/// ```rust,ignore
/// use storefront_api::api::extractors::JsonBody;
/// use storefront_api::domain::LoginRequest;
///
/// async fn login(JsonBody(payload): JsonBody<LoginRequest>) {
///     // payload is well-formed JSON of the right shape
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(JsonBody(value))
    }
}
