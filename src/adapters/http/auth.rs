//! Request extractor resolving the caller's identity.
//!
//! In production the identity would come from a session or JWT layer in
//! front of this service. Here it is carried by headers, the same shape
//! that layer would resolve:
//!
//! - `X-Member-Account` (required)
//! - `X-Member-Name` (optional, used for coach ownership checks)
//! - `X-Member-Role` (`member` unless `coach`)

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::error::ErrorResponse;
use crate::domain::foundation::{AuthenticatedMember, MemberAccount, MemberRole};

/// Extractor wrapper around the resolved caller identity.
#[derive(Debug, Clone)]
pub struct CurrentMember(pub AuthenticatedMember);

/// Rejection for requests without a resolvable identity.
pub struct AuthenticationRequired;

impl IntoResponse for AuthenticationRequired {
    fn into_response(self) -> axum::response::Response {
        let error = ErrorResponse::new("AUTHENTICATION_REQUIRED", "Authentication is required");
        (StatusCode::UNAUTHORIZED, Json(error)).into_response()
    }
}

fn header<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts.headers.get(name).and_then(|v| v.to_str().ok())
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentMember
where
    S: Send + Sync,
{
    type Rejection = AuthenticationRequired;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let account = header(parts, "X-Member-Account")
            .and_then(|s| MemberAccount::new(s).ok())
            .ok_or(AuthenticationRequired)?;

        let name = header(parts, "X-Member-Name").unwrap_or_default().to_string();

        let role = match header(parts, "X-Member-Role") {
            Some("coach") => MemberRole::Coach,
            _ => MemberRole::Member,
        };

        Ok(CurrentMember(AuthenticatedMember::new(account, name, role)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Result<CurrentMember, AuthenticationRequired> {
        let (mut parts, _) = request.into_parts();
        CurrentMember::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn resolves_member_identity_from_headers() {
        let request = Request::builder()
            .header("X-Member-Account", "Alice@1234ab")
            .header("X-Member-Name", "Alice")
            .body(())
            .unwrap();

        let CurrentMember(member) = extract(request).await.unwrap_or_else(|_| panic!());
        assert_eq!(member.account.as_str(), "Alice@1234ab");
        assert_eq!(member.name, "Alice");
        assert!(!member.is_coach());
    }

    #[tokio::test]
    async fn coach_role_header_resolves_coach() {
        let request = Request::builder()
            .header("X-Member-Account", "Coach!aa2024")
            .header("X-Member-Name", "Lin")
            .header("X-Member-Role", "coach")
            .body(())
            .unwrap();

        let CurrentMember(member) = extract(request).await.unwrap_or_else(|_| panic!());
        assert!(member.is_coach());
    }

    #[tokio::test]
    async fn missing_account_header_is_rejected() {
        let request = Request::builder().body(()).unwrap();
        assert!(extract(request).await.is_err());
    }
}
