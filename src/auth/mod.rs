//! Request authentication context.
//!
//! There is no identity provider in this deployment: every request runs as a
//! fixed demo account. The `RequireAuth` extractor keeps the handler
//! signatures a real auth layer would use, so swapping in a verifier later
//! only touches this module.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;
use uuid::Uuid;

/// Authenticated user context attached to each request.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
}

impl AuthContext {
    /// The stand-in account all requests run as.
    pub fn mock() -> Self {
        Self {
            // Stable id so repository ownership fields stay consistent
            // across requests.
            user_id: Uuid::from_u128(0x6d6f636b_7573_6572_0000_000000000001),
            name: "Abdullah Al-Omran".to_string(),
            email: "abdullah@binaa.example".to_string(),
        }
    }
}

/// Extractor used by route handlers that act on behalf of a user.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthContext);

impl std::ops::Deref for RequireAuth {
    type Target = AuthContext;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(AuthContext::mock()))
    }
}
