//! Error types for the cookie layer.

/// Errors that can occur while handling the session cookie.
#[derive(Debug, thiserror::Error)]
pub enum CookieError {
    /// The token contains characters that cannot travel in a cookie
    /// value (control characters, whitespace, `"`, `,`, `;`, `\`) or is
    /// empty. Tokens are opaque strings chosen by the caller's generator,
    /// so a well-behaved generator never trips this.
    #[error("token is not a valid cookie value: {0:?}")]
    InvalidToken(String),
}
