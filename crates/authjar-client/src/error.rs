//! Error types for the client layer.

use authjar_protocol::ProtocolError;

/// Errors that can occur while talking to the session store.
///
/// Note that [`SessionClient::resolve`](crate::SessionClient::resolve)
/// never returns these — it logs and fails open. They surface from
/// `establish`, where the caller must know the bind did not happen.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The token generator could not produce a token. Aborts the login
    /// flow before anything touches the network.
    #[error("token generation failed: {0}")]
    TokenGeneration(String),

    /// The store could not be reached, or the call exceeded its
    /// deadline. The timeout case deliberately lands here too: a hung
    /// store call must not hang the front-end request with it.
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store was reached but answered outside the contract.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}
