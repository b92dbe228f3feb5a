//! Viewer identity for the tailoring endpoints.
//!
//! A request is authenticated when it carries `Authorization: Bearer <token>`
//! with a token listed in `ACCESS_TOKENS`. Anything else is an anonymous
//! viewer, which is not an error: anonymous viewers get redacted previews.

use std::convert::Infallible;

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header::AUTHORIZATION, request::Parts, HeaderMap};

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Authenticated,
    Anonymous,
}

impl Viewer {
    pub fn from_headers(headers: &HeaderMap, access_tokens: &[String]) -> Self {
        let token = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim);

        match token {
            Some(token) if !token.is_empty() && access_tokens.iter().any(|t| t == token) => {
                Viewer::Authenticated
            }
            _ => Viewer::Anonymous,
        }
    }

    pub fn is_authenticated(self) -> bool {
        self == Viewer::Authenticated
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Viewer {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Viewer::from_headers(&parts.headers, &state.config.access_tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(auth: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(auth).unwrap());
        headers
    }

    fn tokens() -> Vec<String> {
        vec!["secret-1".to_string(), "secret-2".to_string()]
    }

    #[test]
    fn test_known_bearer_token_is_authenticated() {
        let viewer = Viewer::from_headers(&headers("Bearer secret-2"), &tokens());
        assert_eq!(viewer, Viewer::Authenticated);
        assert!(viewer.is_authenticated());
    }

    #[test]
    fn test_unknown_token_is_anonymous() {
        let viewer = Viewer::from_headers(&headers("Bearer nope"), &tokens());
        assert_eq!(viewer, Viewer::Anonymous);
    }

    #[test]
    fn test_missing_header_is_anonymous() {
        assert_eq!(Viewer::from_headers(&HeaderMap::new(), &tokens()), Viewer::Anonymous);
    }

    #[test]
    fn test_non_bearer_scheme_is_anonymous() {
        assert_eq!(
            Viewer::from_headers(&headers("Basic secret-1"), &tokens()),
            Viewer::Anonymous
        );
    }

    #[test]
    fn test_no_configured_tokens_means_everyone_is_anonymous() {
        assert_eq!(
            Viewer::from_headers(&headers("Bearer "), &[]),
            Viewer::Anonymous
        );
    }
}
