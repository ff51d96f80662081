//! # Authjar
//!
//! A minimal distributed session-identity subsystem: an in-memory
//! session store exposed over HTTP, plus the client and cookie glue a
//! front-end needs to answer "who is this visitor?" across stateless
//! requests.
//!
//! Authjar is NOT a general-purpose authentication system. There are no
//! passwords, no signed tokens, and no expiry other than explicit
//! logout — it is a key-value mapping from an opaque session token to a
//! display name, reachable over the network.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use authjar::prelude::*;
//!
//! # async fn example() -> Result<(), AuthjarError> {
//! // The store side: one service, usually on a private interface.
//! let server = AuthServer::builder().bind("127.0.0.1:9090").build().await?;
//! tokio::spawn(server.run());
//!
//! // The front-end side: resolve a request's cookie to a name.
//! let sessions = SessionClient::new("http://127.0.0.1:9090");
//! let token = sessions.establish("Ray").await?;
//! assert_eq!(sessions.resolve(&token).await.as_deref(), Some("Ray"));
//! # Ok(())
//! # }
//! ```

mod error;
mod handler;
mod server;

pub use error::AuthjarError;
pub use server::{AuthServer, AuthServerBuilder};

/// One-stop imports for both sides of the subsystem.
pub mod prelude {
    pub use authjar_client::{
        ClientError, DEFAULT_TIMEOUT, SessionClient, TokenGenerator,
        UuidTokenGenerator,
    };
    pub use authjar_cookie::{
        CookieError, SESSION_COOKIE, Validation, expire, extract_token,
        issue, validate,
    };
    pub use authjar_protocol::{
        NO_NAME, ProtocolError, READ_PATH, ReadParams, ReadReply, WRITE_ACK,
        WRITE_PATH, WriteAction, WriteParams, write_ack,
    };
    pub use authjar_store::SessionStore;

    pub use crate::{AuthServer, AuthServerBuilder, AuthjarError};
}
