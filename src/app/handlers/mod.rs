//! Thin axum handlers: pick the input out of the query string or JSON body,
//! call the service, and map the outcome onto a response.

mod directory;
mod health;
mod motor_vehicle;
mod person;

pub use directory::{search_organization, search_person};
pub use health::health;
pub use motor_vehicle::search_motor_vehicle;
pub use person::search_legacy_person;

use crate::utils::error::{GatewayError, Result};
use axum::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

/// Query string extractor whose rejection is the usual JSON error body.
pub struct SearchQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for SearchQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!("invalid query string: {}", e);
                GatewayError::InvalidPayload
            })?;
        Ok(Self(value))
    }
}

/// An absent body reads as "no fields given"; anything else must be valid JSON.
pub(crate) fn decode_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("invalid request payload: {}", e);
        GatewayError::InvalidPayload
    })
}
