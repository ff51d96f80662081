//! Integration tests for the front-end side: client resolution and the
//! cookie round trip, against a real store service.

use std::time::Duration;

use authjar::prelude::*;
use http::HeaderMap;
use http::header::COOKIE;

// =========================================================================
// Helpers and mocks
// =========================================================================

/// Starts a store service on a random port and returns its base URL.
async fn start_store() -> String {
    let server = AuthServer::builder()
        .bind("127.0.0.1:0")
        .build()
        .await
        .expect("server should build");

    let addr = server
        .local_addr()
        .expect("should have local addr")
        .to_string();

    tokio::spawn(async move {
        let _ = server.run().await;
    });

    tokio::time::sleep(Duration::from_millis(10)).await;
    format!("http://{addr}")
}

/// A generator whose entropy source is permanently broken.
struct FailingGenerator;

impl TokenGenerator for FailingGenerator {
    fn generate(&self) -> Result<String, ClientError> {
        Err(ClientError::TokenGeneration(
            "entropy source unavailable".into(),
        ))
    }
}

/// Builds the request headers a browser would send after receiving the
/// given `Set-Cookie` value: the name=value pair, without attributes.
fn browser_echo(set_cookie: &http::HeaderValue) -> HeaderMap {
    let pair = set_cookie
        .to_str()
        .expect("cookie value should be ASCII")
        .split(';')
        .next()
        .expect("split always yields at least one piece")
        .to_string();
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, pair.parse().expect("valid header value"));
    headers
}

// =========================================================================
// Session lifecycle
// =========================================================================

#[tokio::test]
async fn test_establish_resolve_release_lifecycle() {
    // The full client-side state machine:
    // UNAUTHENTICATED → establish → AUTHENTICATED → release → UNAUTHENTICATED
    let base = start_store().await;
    let sessions = SessionClient::new(&base);

    // 1. Log in: mint a token, bind it.
    let token = sessions.establish("Ray").await.expect("establish");
    assert!(!token.is_empty());

    // 2. Later requests resolve the token to the name.
    assert_eq!(sessions.resolve(&token).await.as_deref(), Some("Ray"));

    // 3. Log out: the token stops resolving.
    sessions.release(&token).await;
    assert_eq!(sessions.resolve(&token).await, None);
}

#[tokio::test]
async fn test_establish_generates_distinct_tokens_per_session() {
    let base = start_store().await;
    let sessions = SessionClient::new(&base);

    let alice = sessions.establish("Alice").await.expect("establish");
    let bob = sessions.establish("Bob").await.expect("establish");

    assert_ne!(alice, bob, "each login must get its own session");
    assert_eq!(sessions.resolve(&alice).await.as_deref(), Some("Alice"));
    assert_eq!(sessions.resolve(&bob).await.as_deref(), Some("Bob"));
}

#[tokio::test]
async fn test_stale_token_resolves_to_its_own_session() {
    // A request carrying a stale or forged token for a *different*
    // session resolves to THAT session's name — the protocol has no
    // per-client binding, and this documents it. The cookie layer's
    // three-way validation is the front-end's only (diagnostic) defense.
    let base = start_store().await;
    let sessions = SessionClient::new(&base);

    let alice = sessions.establish("Alice").await.expect("establish");
    let bob = sessions.establish("Bob").await.expect("establish");

    // "Bob's" request somehow carries Alice's token: it is Alice now.
    assert_eq!(sessions.resolve(&alice).await.as_deref(), Some("Alice"));

    // The front-end can at least see the mismatch against the session
    // it expected.
    let mut headers = HeaderMap::new();
    headers.insert(
        COOKIE,
        format!("user={alice}").parse().expect("valid header"),
    );
    assert_eq!(validate(&headers, &bob), Validation::Mismatched);
}

// =========================================================================
// Failure policy
// =========================================================================

#[tokio::test]
async fn test_resolve_empty_token_is_none_without_network() {
    // The URL is unroutable on purpose: if resolve tried the network,
    // this test would fail (or hang until the timeout).
    let sessions = SessionClient::new("http://127.0.0.1:1")
        .timeout(Duration::from_millis(50));

    assert_eq!(sessions.resolve("").await, None);
}

#[tokio::test]
async fn test_resolve_unreachable_store_fails_open() {
    // A dead store degrades the visitor to "not identified" — it never
    // surfaces an error to the request path.
    let sessions = SessionClient::new("http://127.0.0.1:1")
        .timeout(Duration::from_millis(100));

    assert_eq!(sessions.resolve("abc").await, None);
}

#[tokio::test]
async fn test_resolve_hung_store_times_out_as_miss() {
    // A listener that accepts and then says nothing, forever. The
    // bounded deadline turns the hang into a miss.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let mut held = Vec::new();
        loop {
            if let Ok((socket, _)) = listener.accept().await {
                held.push(socket); // accept, never answer
            }
        }
    });

    let sessions = SessionClient::new(format!("http://{addr}"))
        .timeout(Duration::from_millis(100));

    let start = std::time::Instant::now();
    assert_eq!(sessions.resolve("abc").await, None);
    assert!(
        start.elapsed() < Duration::from_secs(2),
        "resolve must not hang on a silent store"
    );
}

#[tokio::test]
async fn test_establish_generator_failure_yields_no_token() {
    // Token generation failing must abort the login before the network —
    // the caller gets an error and issues no cookie.
    let base = start_store().await;
    let sessions = SessionClient::with_generator(&base, FailingGenerator);

    let result = sessions.establish("Ray").await;

    assert!(matches!(result, Err(ClientError::TokenGeneration(_))));
}

#[tokio::test]
async fn test_establish_unreachable_store_is_an_error() {
    // Unlike resolve, establish fails CLOSED: no ack, no session.
    let sessions = SessionClient::new("http://127.0.0.1:1")
        .timeout(Duration::from_millis(100));

    let result = sessions.establish("Ray").await;

    assert!(matches!(result, Err(ClientError::Transport(_))));
}

#[tokio::test]
async fn test_release_unreachable_store_is_swallowed() {
    // Best-effort: the cookie gets expired regardless, so a failed
    // unbind is logged and dropped, never panicked on.
    let sessions = SessionClient::new("http://127.0.0.1:1")
        .timeout(Duration::from_millis(100));

    sessions.release("abc").await; // must simply return
}

// =========================================================================
// Cookie round trip
// =========================================================================

#[tokio::test]
async fn test_cookie_carries_session_across_requests() {
    // The full loop a browser participates in: establish → Set-Cookie →
    // echoed Cookie header → extract → resolve.
    let base = start_store().await;
    let sessions = SessionClient::new(&base);

    let token = sessions.establish("Ray").await.expect("establish");
    let set_cookie = issue(&token).expect("uuid tokens are cookie-safe");

    // Next request: the browser sends the cookie back.
    let headers = browser_echo(&set_cookie);
    let carried = extract_token(&headers).expect("cookie should carry token");
    assert_eq!(carried, token);
    assert_eq!(validate(&headers, &token), Validation::Matched);

    assert_eq!(sessions.resolve(&carried).await.as_deref(), Some("Ray"));
}

#[tokio::test]
async fn test_logout_expires_cookie_and_releases_session() {
    let base = start_store().await;
    let sessions = SessionClient::new(&base);
    let token = sessions.establish("Ray").await.expect("establish");

    // Logout: unbind on the store, immediate-past lifetime on the wire.
    sessions.release(&token).await;
    let expired = expire(&token).expect("uuid tokens are cookie-safe");
    assert!(expired.to_str().expect("ascii").contains("Max-Age=0"));

    // Even a client that ignores the expiry and replays the token is
    // unauthenticated now.
    assert_eq!(sessions.resolve(&token).await, None);
}
