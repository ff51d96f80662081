//! `AuthServer` builder and server loop.
//!
//! This is the entry point for running a session store service. The
//! store itself is a library type; this module puts it behind the wire
//! protocol on a TCP listener.

use std::sync::Arc;

use authjar_store::SessionStore;
use tokio::net::TcpListener;

use crate::AuthjarError;
use crate::handler::router;

/// Builder for configuring and starting a session store service.
///
/// # Example
///
/// ```rust,no_run
/// use authjar::AuthServer;
///
/// # async fn example() -> Result<(), authjar::AuthjarError> {
/// let server = AuthServer::builder()
///     .bind("127.0.0.1:9090")
///     .build()
///     .await?;
/// server.run().await
/// # }
/// ```
pub struct AuthServerBuilder {
    bind_addr: String,
}

impl AuthServerBuilder {
    /// Creates a new builder with default settings.
    ///
    /// The default bind address is loopback on purpose: the protocol is
    /// unauthenticated, so the store should only be reachable from
    /// parties you already trust (see the protocol crate's docs). Widen
    /// the address deliberately, not by default.
    pub fn new() -> Self {
        Self {
            bind_addr: "127.0.0.1:9090".to_string(),
        }
    }

    /// Sets the address to bind the service to. Use port 0 to let the
    /// OS pick one (handy in tests; read it back via
    /// [`AuthServer::local_addr`]).
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Binds the listener and builds the server with a fresh, empty
    /// [`SessionStore`].
    ///
    /// Every session lives in that store's memory: when this process
    /// goes away, so does every login.
    ///
    /// # Errors
    /// [`AuthjarError::Io`] if the address cannot be bound.
    pub async fn build(self) -> Result<AuthServer, AuthjarError> {
        let listener = TcpListener::bind(&self.bind_addr).await?;
        tracing::info!(addr = %self.bind_addr, "session store listening");
        Ok(AuthServer {
            listener,
            store: Arc::new(SessionStore::new()),
        })
    }
}

impl Default for AuthServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A bound, ready-to-run session store service.
///
/// Call [`run()`](Self::run) to start serving.
pub struct AuthServer {
    listener: TcpListener,
    store: Arc<SessionStore>,
}

impl AuthServer {
    /// Creates a new builder.
    pub fn builder() -> AuthServerBuilder {
        AuthServerBuilder::new()
    }

    /// Returns the local address the service is bound to.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.listener.local_addr()
    }

    /// Returns a handle to the underlying store.
    ///
    /// Useful when the service is embedded in a larger process that
    /// wants direct (same-process) access next to the wire access —
    /// and for asserting on store state in tests.
    pub fn store(&self) -> Arc<SessionStore> {
        Arc::clone(&self.store)
    }

    /// Runs the service until the process is terminated.
    ///
    /// This is the one place in the subsystem where an error is
    /// abort-worthy: if serving fails, the store is unreachable and the
    /// process has nothing left to do. Callers propagate the error to
    /// `main`.
    pub async fn run(self) -> Result<(), AuthjarError> {
        tracing::info!("session store running");
        axum::serve(self.listener, router(self.store)).await?;
        Ok(())
    }
}
