//! HTTP Basic authentication for admin routes

use axum::extract::FromRequestParts;
use axum::http::{header::AUTHORIZATION, request::Parts, HeaderMap};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::warn;

use super::error::ApiError;
use super::state::AppState;
use crate::storage::{Outcome, UserRecord};

/// An admin whose Basic credentials checked out against the user table
pub struct AdminUser(pub UserRecord);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let (username, password) =
            basic_credentials(&parts.headers).ok_or(ApiError::Unauthorized)?;

        match state.store().authenticate_user(&username, &password).await {
            Outcome::Found(user) => Ok(Self(user)),
            Outcome::NotFound | Outcome::Failed => {
                warn!(%username, "Rejected admin credentials");
                Err(ApiError::Unauthorized)
            }
        }
    }
}

/// Decode `Authorization: Basic <base64(user:pass)>`.
///
/// The username is trimmed the same way `/login` trims it.
pub fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = String::from_utf8(STANDARD.decode(encoded.trim()).ok()?).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.trim().to_string(), password.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_basic_credentials_decodes() {
        let encoded = STANDARD.encode("admin:hunter22");
        let headers = headers_with(&format!("Basic {encoded}"));
        assert_eq!(
            basic_credentials(&headers),
            Some(("admin".to_string(), "hunter22".to_string()))
        );
    }

    #[test]
    fn test_password_may_contain_colon() {
        let encoded = STANDARD.encode("admin:a:b");
        let headers = headers_with(&format!("basic {encoded}"));
        assert_eq!(
            basic_credentials(&headers),
            Some(("admin".to_string(), "a:b".to_string()))
        );
    }

    #[test]
    fn test_username_trimmed_password_kept() {
        let encoded = STANDARD.encode(" admin : pw ");
        let headers = headers_with(&format!("Basic {encoded}"));
        assert_eq!(
            basic_credentials(&headers),
            Some(("admin".to_string(), " pw ".to_string()))
        );
    }

    #[test]
    fn test_rejects_other_schemes_and_garbage() {
        assert_eq!(basic_credentials(&HeaderMap::new()), None);
        assert_eq!(basic_credentials(&headers_with("Bearer abc")), None);
        assert_eq!(basic_credentials(&headers_with("Basic !!!")), None);

        let no_colon = STANDARD.encode("admin");
        assert_eq!(basic_credentials(&headers_with(&format!("Basic {no_colon}"))), None);
    }
}
