//! Request identity
//!
//! The platform sits behind a gateway that authenticates callers and
//! forwards identity claims as headers. Extraction never rejects: missing
//! or malformed claims produce an anonymous identity, and endpoints that
//! need a concrete user call [`CurrentUser::require_id`].

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::error::AppError;

const USER_ID_HEADER: &str = "x-user-id";
const USER_NAME_HEADER: &str = "x-user-name";
const USER_ROLE_HEADER: &str = "x-user-role";

/// Identity of the caller, as asserted by the gateway
#[derive(Debug, Clone, Default)]
pub struct CurrentUser {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub role: Option<String>,
}

impl CurrentUser {
    /// The caller's id, or `Unauthorized` when the request is anonymous
    pub fn require_id(&self) -> Result<Uuid, AppError> {
        self.id
            .ok_or_else(|| AppError::Unauthorized("user identity claim is missing".to_string()))
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };

        Ok(Self {
            id: header(USER_ID_HEADER).and_then(|raw| raw.parse().ok()),
            name: header(USER_NAME_HEADER),
            role: header(USER_ROLE_HEADER),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> CurrentUser {
        let (mut parts, _) = request.into_parts();
        CurrentUser::from_request_parts(&mut parts, &())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_claims_are_read_from_headers() {
        let id = Uuid::new_v4();
        let request = Request::builder()
            .header("x-user-id", id.to_string())
            .header("x-user-name", "amal")
            .header("x-user-role", "admin")
            .body(())
            .unwrap();

        let user = extract(request).await;
        assert_eq!(user.id, Some(id));
        assert_eq!(user.name.as_deref(), Some("amal"));
        assert_eq!(user.role.as_deref(), Some("admin"));
        assert!(user.require_id().is_ok());
    }

    #[tokio::test]
    async fn test_missing_headers_yield_anonymous_identity() {
        let request = Request::builder().body(()).unwrap();
        let user = extract(request).await;
        assert!(user.id.is_none());
        assert!(user.require_id().is_err());
    }

    #[tokio::test]
    async fn test_malformed_id_is_treated_as_anonymous() {
        let request = Request::builder()
            .header("x-user-id", "not-a-uuid")
            .body(())
            .unwrap();
        let user = extract(request).await;
        assert!(user.id.is_none());
    }
}
