use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;

use crate::core::error::Error;
use crate::core::state::AppState;

fn bearer_token(headers: &HeaderMap) -> Result<&str, Error> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or(Error::Unauthenticated)?
        .to_str()
        .map_err(|_| Error::Unauthenticated)?;

    let mut parts = auth_header.split_whitespace();

    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => Err(Error::Unauthenticated),
    }
}

/// Resolves the bearer token to a credential and stores it in the request
/// extensions.
pub(crate) async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Error> {
    let token = bearer_token(request.headers())?;

    let user = state.auth.validate_token(token)?;

    tracing::debug!("Authenticated {} ({})", user.username, user.role);

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token(&headers("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
        assert_eq!(bearer_token(&headers("bearer abc")).unwrap(), "abc");
    }

    #[test]
    fn test_bearer_token_rejects_bad_headers() {
        assert!(matches!(bearer_token(&HeaderMap::new()), Err(Error::Unauthenticated)));

        for value in ["Bearer", "Basic abc", "Bearer a b", "abc"] {
            assert!(
                matches!(bearer_token(&headers(value)), Err(Error::Unauthenticated)),
                "{} was accepted",
                value
            );
        }
    }
}
