//! Axum extractor for the caller's Moodle session token

use crate::ApiError;

use mb_core::{BridgeError, SessionToken};

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

const BEARER_PREFIX: &str = "Bearer ";

/// Session token taken from the `Authorization` header.
///
/// Accepts `Bearer <token>` as well as the bare token. A missing or blank
/// header is rejected with `MISSING_CREDENTIAL`.
pub struct AuthToken(pub SessionToken);

impl AuthToken {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl<S> FromRequestParts<S> for AuthToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let raw = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .trim();

            let token = raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw).trim();
            if token.is_empty() {
                log::debug!("Request without session token");
                return Err(BridgeError::missing_credential().into());
            }

            Ok(AuthToken(SessionToken::new(token)))
        }
    }
}
