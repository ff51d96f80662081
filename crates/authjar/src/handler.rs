//! Request handlers: the HTTP realization of the store protocol.
//!
//! Two routes plus a 404 fallback — the whole network surface of the
//! store. Each handler is a straight mapping from the protocol's
//! request shapes onto a [`SessionStore`] call:
//!
//!   1. Pull the token out of the query parameters (400 on usage error)
//!   2. Touch the map
//!   3. Render the plain-text reply through the protocol codec
//!
//! Handlers never panic and never block on anything but the store's
//! lock, which is held only around the map access.

use std::sync::Arc;

use authjar_protocol::{
    READ_PATH, ReadParams, ReadReply, WRITE_PATH, WriteAction, WriteParams,
    write_ack,
};
use authjar_store::SessionStore;
use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;

/// Builds the store service router.
///
/// Both operations accept GET and POST — the service predates any
/// method discipline and its callers use whichever is convenient.
/// Everything else is a 404.
pub(crate) fn router(store: Arc<SessionStore>) -> Router {
    Router::new()
        .route(READ_PATH, get(read_session).post(read_session))
        .route(WRITE_PATH, get(write_session).post(write_session))
        .fallback(not_found)
        .with_state(store)
}

/// `GET/POST /get?cookie=<token>` — look up the name bound to a token.
///
/// An unknown or unbound token is a normal miss: 200 with the sentinel
/// body. Only a missing/empty `cookie` parameter is an error.
async fn read_session(
    State(store): State<Arc<SessionStore>>,
    Query(params): Query<ReadParams>,
) -> (StatusCode, String) {
    tracing::trace!("read_session()");

    let token = match params.token() {
        Ok(token) => token,
        Err(e) => {
            tracing::error!(error = %e, "rejecting read");
            return (StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    let reply = ReadReply::from(store.lookup(token));
    tracing::trace!(%token, miss = matches!(reply, ReadReply::NoName), "read");
    (StatusCode::OK, reply.encode())
}

/// `GET/POST /set?cookie=<token>&name=<name>` — bind or unbind a token.
///
/// A non-empty `name` binds; an empty or absent `name` unbinds (the
/// logout path). Both acknowledge with the same body — the write never
/// fails once the token parameter is present.
async fn write_session(
    State(store): State<Arc<SessionStore>>,
    Query(params): Query<WriteParams>,
) -> (StatusCode, String) {
    tracing::trace!("write_session()");

    let token = match params.token() {
        Ok(token) => token,
        Err(e) => {
            tracing::error!(error = %e, "rejecting write");
            return (StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    match params.action() {
        WriteAction::Bind { name } => store.bind(token, name),
        WriteAction::Unbind => store.unbind(token),
    }

    (StatusCode::OK, write_ack())
}

/// Anything that isn't `/get` or `/set`.
async fn not_found() -> StatusCode {
    tracing::info!("returning 404");
    StatusCode::NOT_FOUND
}
