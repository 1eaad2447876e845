//! JSON body extractor that runs `validator` rules before the handler

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// Body rejected as `INVALID_BODY` when it does not decode, or
/// `VALIDATION_ERROR` with per-field details when a rule fails
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // An unknown subject_type fails here, before validation
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| ApiError::InvalidBody(e.body_text()))?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
