//! The session client: resolve, establish, and release identities.

use std::time::Duration;

use authjar_protocol::{
    READ_PATH, ReadParams, ReadReply, WRITE_PATH, WriteParams,
};

use crate::{ClientError, TokenGenerator, UuidTokenGenerator};

/// Default per-request deadline for store calls.
///
/// The store call sits on the critical path of every page load, so it
/// gets a short leash: past this deadline the call is abandoned and the
/// request proceeds as unauthenticated. 500 ms is generous for a
/// loopback hop and survivable for a rack-local one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(500);

/// Client for the Authjar session store.
///
/// One instance serves a whole front-end process. It is stateless with
/// respect to sessions — the current token travels in each request's
/// cookie, never in shared process state, so concurrent visitors cannot
/// stomp on each other's identity.
///
/// ## Failure policy
///
/// - [`resolve`](Self::resolve) fails OPEN: any transport error, timeout,
///   or out-of-contract reply resolves to "not identified". A dead store
///   degrades the site to logged-out, it never takes the site down.
/// - [`establish`](Self::establish) fails CLOSED: unless the store
///   acknowledged the bind, the caller gets an error and must not issue
///   a cookie.
/// - [`release`](Self::release) is best-effort: the cookie is being
///   expired regardless, so a failed unbind only leaks a harmless entry
///   until the store restarts.
pub struct SessionClient<G: TokenGenerator = UuidTokenGenerator> {
    http: reqwest::Client,
    store_url: String,
    timeout: Duration,
    tokens: G,
}

impl SessionClient<UuidTokenGenerator> {
    /// Creates a client for the store at `store_url` (scheme + authority,
    /// e.g. `http://127.0.0.1:9090`) with the default UUID generator and
    /// [`DEFAULT_TIMEOUT`].
    pub fn new(store_url: impl Into<String>) -> Self {
        Self::with_generator(store_url, UuidTokenGenerator)
    }
}

impl<G: TokenGenerator> SessionClient<G> {
    /// Creates a client with a custom token generator.
    pub fn with_generator(store_url: impl Into<String>, tokens: G) -> Self {
        let mut store_url = store_url.into();
        while store_url.ends_with('/') {
            store_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            store_url,
            timeout: DEFAULT_TIMEOUT,
            tokens,
        }
    }

    /// Overrides the per-request deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolves a token to the name bound to it, or `None` when the
    /// request has no identity.
    ///
    /// An empty token short-circuits to `None` without a network call —
    /// an absent token can never resolve. Otherwise this performs a
    /// protocol read with the bounded deadline; misses, timeouts, and
    /// transport failures all come back as `None`. The failure is logged,
    /// not surfaced: the caller renders the logged-out page either way.
    pub async fn resolve(&self, token: &str) -> Option<String> {
        if token.is_empty() {
            return None;
        }
        match self.read(token).await {
            Ok(reply) => reply.into_name(),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    "session lookup failed; treating as unauthenticated"
                );
                None
            }
        }
    }

    /// Establishes a new session for `name`: mints a token, binds it on
    /// the store, and returns the token for the caller to persist as a
    /// cookie.
    ///
    /// # Errors
    /// Token generation failure and write failure both propagate. In
    /// either case nothing was durably established and the caller must
    /// not issue a cookie — a cookie pointing at an unbound token would
    /// greet the visitor as nobody on every subsequent request.
    pub async fn establish(&self, name: &str) -> Result<String, ClientError> {
        let token = self.tokens.generate()?;
        self.write(&WriteParams::bind(&token, name)).await?;
        tracing::info!("session established");
        Ok(token)
    }

    /// Releases the session for `token` (the logout path).
    ///
    /// Best-effort: a failure is logged at error level and swallowed.
    /// The caller expires the cookie regardless, which is what actually
    /// logs the browser out; the store-side entry is then unreachable
    /// garbage at worst.
    pub async fn release(&self, token: &str) {
        if let Err(e) = self.write(&WriteParams::unbind(token)).await {
            tracing::error!(
                error = %e,
                "session release failed; cookie will be expired regardless"
            );
        }
    }

    /// Performs a protocol read for `token`.
    async fn read(&self, token: &str) -> Result<ReadReply, ClientError> {
        let response = self
            .http
            .get(format!("{}{READ_PATH}", self.store_url))
            .query(&ReadParams::new(token))
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(authjar_protocol::ProtocolError::UnexpectedStatus(
                status.as_u16(),
            )
            .into());
        }

        Ok(ReadReply::decode(&response.text().await?))
    }

    /// Performs a protocol write (bind or unbind, per `params`).
    async fn write(&self, params: &WriteParams) -> Result<(), ClientError> {
        let response = self
            .http
            .post(format!("{}{WRITE_PATH}", self.store_url))
            .query(params)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(authjar_protocol::ProtocolError::UnexpectedStatus(
                status.as_u16(),
            )
            .into());
        }

        // The ack body carries no information beyond the status, but it
        // is handy when tracing a live exchange.
        let body = response.text().await?;
        tracing::trace!(ack = body.trim_end(), "store acknowledged write");
        Ok(())
    }
}
