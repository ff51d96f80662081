//! Producing `Set-Cookie` values that issue or expire the session cookie.

use http::HeaderValue;

use crate::{CookieError, SESSION_COOKIE};

/// Builds the `Set-Cookie` value that hands `token` to the browser.
///
/// The cookie is scoped to `Path=/` and carries no expiry — a session
/// cookie, discarded when the browser closes. Write it on the response
/// to a successful login, and only then: a cookie must never be issued
/// for a token the store did not acknowledge binding.
///
/// # Errors
/// [`CookieError::InvalidToken`] if `token` contains characters that
/// cannot travel in a cookie value.
pub fn issue(token: &str) -> Result<HeaderValue, CookieError> {
    check_token(token)?;
    let value = format!("{SESSION_COOKIE}={token}; Path=/");
    // Just validated: the cookie-octet set is a subset of valid header
    // characters, and the rest of the string is fixed ASCII.
    Ok(HeaderValue::from_str(&value).expect("validated cookie value"))
}

/// Builds the `Set-Cookie` value that takes `token` back.
///
/// `Max-Age=0` is the immediate-past lifetime: the browser discards the
/// cookie on receipt. Pair this with releasing the session on the store;
/// the cookie is expired even when the release call fails, since a token
/// the store has forgotten is harmless but a lingering cookie keeps
/// re-asking about it.
///
/// # Errors
/// [`CookieError::InvalidToken`], as for [`issue`].
pub fn expire(token: &str) -> Result<HeaderValue, CookieError> {
    check_token(token)?;
    let value = format!("{SESSION_COOKIE}={token}; Path=/; Max-Age=0");
    Ok(HeaderValue::from_str(&value).expect("validated cookie value"))
}

/// Rejects tokens that cannot be a cookie value.
///
/// RFC 6265 cookie-octet: printable US-ASCII except control characters,
/// whitespace, double quote, comma, semicolon, and backslash. Tokens are
/// caller-supplied opaque strings, so this is enforced rather than
/// assumed — a UUID always passes.
fn check_token(token: &str) -> Result<(), CookieError> {
    let valid = !token.is_empty()
        && token.bytes().all(|b| {
            b.is_ascii_graphic() && !matches!(b, b'"' | b',' | b';' | b'\\')
        });
    if valid {
        Ok(())
    } else {
        Err(CookieError::InvalidToken(token.to_string()))
    }
}

// =========================================================================
// Tests
// =========================================================================
