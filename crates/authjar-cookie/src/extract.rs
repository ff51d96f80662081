//! Reading the session token out of request headers.

use http::HeaderMap;
use http::header::COOKIE;

use crate::SESSION_COOKIE;

/// Returns the session token carried by the request, if any.
///
/// Walks every `Cookie` header (clients may send one combined header or
/// several), splits the `;`-separated pairs, and returns the value of the
/// first `user` cookie found. An empty value counts as no cookie — an
/// empty token can never resolve to a session, so reporting it as absent
/// keeps every caller on the same path.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            (name.trim() == SESSION_COOKIE).then(|| value.trim())
        })
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Outcome of matching a request's cookie against an expected session.
///
/// `Mismatched` and `Absent` are treated identically by callers — the
/// request is unauthenticated either way — but they are worth telling
/// apart in logs: a mismatch means the browser holds a token for some
/// *other* session (stale after a restart, or forged), which reads very
/// differently in a diagnostic session than "no cookie at all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    /// The cookie is present and carries the expected token.
    Matched,

    /// The cookie is present but carries a different token.
    Mismatched,

    /// No session cookie on the request.
    Absent,
}

impl Validation {
    /// Returns `true` only for [`Validation::Matched`].
    pub fn is_matched(self) -> bool {
        matches!(self, Validation::Matched)
    }
}

/// Matches the request's session cookie against `expected`.
///
/// Note what this does NOT do: it does not prove the request came from
/// the session's owner. Any peer presenting a valid token gets that
/// token's identity — the protocol has no per-client binding. See the
/// protocol crate's security note.
pub fn validate(headers: &HeaderMap, expected: &str) -> Validation {
    match extract_token(headers) {
        None => Validation::Absent,
        Some(token) if token == expected => Validation::Matched,
        Some(_) => {
            tracing::info!("session cookie does not match the expected session");
            Validation::Mismatched
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    // =====================================================================
    // extract_token()
    // =====================================================================

    #[test]
    fn test_extract_token_single_cookie_returns_value() {
        let headers = headers_with_cookie("user=abc123");
        assert_eq!(extract_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_extract_token_no_cookie_header_returns_none() {
        assert_eq!(extract_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_extract_token_other_cookies_only_returns_none() {
        let headers = headers_with_cookie("theme=dark; lang=en");
        assert_eq!(extract_token(&headers), None);
    }

    #[test]
    fn test_extract_token_among_other_cookies_finds_it() {
        // Browsers send every cookie for the path in one header.
        let headers = headers_with_cookie("theme=dark; user=abc123; lang=en");
        assert_eq!(extract_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_extract_token_multiple_cookie_headers_searched() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(COOKIE, HeaderValue::from_static("user=abc123"));
        assert_eq!(extract_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_extract_token_empty_value_counts_as_absent() {
        // `user=` is as good as no cookie: an empty token never resolves.
        let headers = headers_with_cookie("user=");
        assert_eq!(extract_token(&headers), None);
    }

    #[test]
    fn test_extract_token_ignores_name_suffix_matches() {
        // `enduser=x` must not be mistaken for the `user` cookie.
        let headers = headers_with_cookie("enduser=x; useradmin=y");
        assert_eq!(extract_token(&headers), None);
    }

    // =====================================================================
    // validate()
    // =====================================================================

    #[test]
    fn test_validate_matching_token_is_matched() {
        let headers = headers_with_cookie("user=abc123");
        assert_eq!(validate(&headers, "abc123"), Validation::Matched);
        assert!(validate(&headers, "abc123").is_matched());
    }

    #[test]
    fn test_validate_different_token_is_mismatched() {
        // A stale or forged token for some other session.
        let headers = headers_with_cookie("user=stale-token");
        assert_eq!(validate(&headers, "abc123"), Validation::Mismatched);
    }

    #[test]
    fn test_validate_no_cookie_is_absent() {
        assert_eq!(validate(&HeaderMap::new(), "abc123"), Validation::Absent);
    }

    #[test]
    fn test_validate_mismatched_and_absent_both_unauthenticated() {
        // The two outcomes differ for diagnostics only; neither is a match.
        let mismatched = validate(&headers_with_cookie("user=zzz"), "abc");
        let absent = validate(&HeaderMap::new(), "abc");
        assert!(!mismatched.is_matched());
        assert!(!absent.is_matched());
    }
}
