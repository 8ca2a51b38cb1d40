//! Session cookie transport
//!
//! The session token travels exclusively in the `auth_token` cookie.
//! Set-Cookie values are built as plain header strings; reading uses the
//! CookieJar extractor.

use axum_extra::extract::CookieJar;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "auth_token";

/// Cookie lifetime in seconds (24 hours).
///
/// Intentionally longer than the embedded token's 1-hour expiry: the
/// browser keeps presenting the cookie after the token inside it has
/// lapsed. See DESIGN.md.
pub const COOKIE_MAX_AGE_SECS: i64 = 24 * 60 * 60;

/// Build a Set-Cookie value that attaches the session token
pub fn set_cookie(token: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE, token, COOKIE_MAX_AGE_SECS
    )
}

/// Build a Set-Cookie value that clears the session cookie
///
/// Empty value plus an already-past expiry makes clients drop the cookie
/// immediately.
pub fn clear_cookie() -> String {
    format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT",
        SESSION_COOKIE
    )
}

/// Read the session token from the request's cookies
///
/// An absent or empty cookie is a normal "no session" outcome.
pub fn token_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderMap, HeaderValue};

    fn jar_from_cookie(value: &str) -> CookieJar {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        CookieJar::from_headers(&headers)
    }

    #[test]
    fn test_set_cookie_attributes() {
        let value = set_cookie("some-token");
        assert!(value.starts_with("auth_token=some-token"));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("Path=/"));
        assert!(value.contains("Max-Age=86400"));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let value = clear_cookie();
        assert!(value.starts_with("auth_token=;"));
        assert!(value.contains("Max-Age=0"));
        assert!(value.contains("Expires=Thu, 01 Jan 1970"));
    }

    #[test]
    fn test_token_from_jar_present() {
        let jar = jar_from_cookie("auth_token=abc123");
        assert_eq!(token_from_jar(&jar), Some("abc123".to_string()));
    }

    #[test]
    fn test_token_from_jar_absent() {
        let jar = jar_from_cookie("other_cookie=zzz");
        assert_eq!(token_from_jar(&jar), None);
    }

    #[test]
    fn test_token_from_jar_empty_value() {
        let jar = jar_from_cookie("auth_token=");
        assert_eq!(token_from_jar(&jar), None);
    }
}
