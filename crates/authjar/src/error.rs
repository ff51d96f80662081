//! Unified error type for the Authjar subsystem.

use authjar_client::ClientError;
use authjar_cookie::CookieError;
use authjar_protocol::ProtocolError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `authjar` meta-crate, you deal with this single error
/// type instead of importing errors from each sub-crate. The `#[from]`
/// attribute on each variant auto-generates `From` impls, so the `?`
/// operator converts sub-crate errors automatically.
///
/// Nothing in the core is fatal to a process: the only abort-worthy
/// condition is [`Io`](Self::Io) out of [`AuthServer::run`](crate::AuthServer::run)
/// (port already in use and the like), which belongs to bootstrap code.
#[derive(Debug, thiserror::Error)]
pub enum AuthjarError {
    /// A protocol-level error (malformed request, out-of-contract reply).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A client-level error (token generation, transport, store refusal).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// A cookie-level error (token not representable as a cookie value).
    #[error(transparent)]
    Cookie(#[from] CookieError),

    /// Binding or serving the store's listener failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
