use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, Request},
    http::{HeaderMap, HeaderValue, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use base64::{Engine, engine::general_purpose};
use nourish_core::domain::common::context::RequestContext;
use serde::Deserialize;
use tracing::debug;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const SESSION_ID_HEADER: &str = "x-session-id";

#[derive(Debug, Deserialize)]
struct Claims {
    sub: Option<String>,
}

/// Reads the `sub` claim of a JWT without verifying it.
///
/// Identity is established upstream; the subject is only carried for logging.
fn subject_from_token(token: &str) -> Option<String> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let decoded = general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| debug!("Failed to decode JWT payload: {:?}", e))
        .ok()?;

    serde_json::from_slice::<Claims>(&decoded)
        .map_err(|e| debug!("Failed to deserialize JWT claims: {:?}", e))
        .ok()?
        .sub
        .filter(|sub| !sub.is_empty())
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

async fn bearer_subject(parts: &mut Parts) -> Option<String> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .ok()?;

    subject_from_token(bearer.token())
}

async fn context_from_parts(parts: &mut Parts) -> RequestContext {
    let ctx = match header_value(&parts.headers, REQUEST_ID_HEADER) {
        Some(trace_id) => RequestContext::new(trace_id),
        None => RequestContext::generate(),
    };

    ctx.with_session(header_value(&parts.headers, SESSION_ID_HEADER))
        .with_user(bearer_subject(parts).await)
}

/// Builds the [`RequestContext`] for every request and echoes the trace id
/// back in `x-request-id`.
pub async fn request_context(req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();
    let ctx = context_from_parts(&mut parts).await;
    let trace_id = ctx.trace_id.clone();

    parts.extensions.insert(ctx);
    let mut response = next.run(Request::from_parts(parts, body)).await;

    if let Ok(value) = HeaderValue::from_str(&trace_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// Extracts the request context set by [`request_context`], or builds one
/// when the middleware is not installed.
pub struct Ctx(pub RequestContext);

impl<S> FromRequestParts<S> for Ctx
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let ctx = match parts.extensions.get::<RequestContext>() {
            Some(ctx) => ctx.clone(),
            None => context_from_parts(parts).await,
        };

        Ok(Ctx(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;

    fn token(payload: &str) -> String {
        format!(
            "eyJhbGciOiJIUzI1NiJ9.{}.signature",
            general_purpose::URL_SAFE_NO_PAD.encode(payload)
        )
    }

    fn parts(headers: &[(&str, String)]) -> Parts {
        let mut builder = HttpRequest::builder().uri("/api/recommendations");
        for (name, value) in headers {
            builder = builder.header(*name, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_subject_is_read_from_payload() {
        assert_eq!(
            subject_from_token(&token(r#"{"sub":"user-42","exp":0}"#)),
            Some("user-42".to_string())
        );
    }

    #[test]
    fn test_malformed_tokens_have_no_subject() {
        assert_eq!(subject_from_token("not-a-jwt"), None);
        assert_eq!(subject_from_token("a.%%%.c"), None);
        assert_eq!(subject_from_token(&token(r#"{"exp":0}"#)), None);
    }

    #[tokio::test]
    async fn test_context_uses_request_headers() {
        let mut parts = parts(&[
            (REQUEST_ID_HEADER, "trace-1".to_string()),
            (SESSION_ID_HEADER, "session-9".to_string()),
            ("authorization", format!("Bearer {}", token(r#"{"sub":"u1"}"#))),
        ]);

        let ctx = context_from_parts(&mut parts).await;

        assert_eq!(ctx.trace_id, "trace-1");
        assert_eq!(ctx.session_id.as_deref(), Some("session-9"));
        assert_eq!(ctx.user_id.as_deref(), Some("u1"));
    }

    #[tokio::test]
    async fn test_missing_request_id_generates_one() {
        let mut parts = parts(&[]);

        let ctx = context_from_parts(&mut parts).await;

        assert!(!ctx.trace_id.is_empty());
        assert!(ctx.session_id.is_none());
        assert!(ctx.user_id.is_none());
    }
}
