//! Token generation hook.
//!
//! The store never generates tokens — uniqueness is the caller's
//! responsibility. This module defines the [`TokenGenerator`] seam and
//! the default implementation. Swapping the generator is how tests make
//! tokens deterministic and how a deployment could move to a different
//! id scheme without touching the client.

use crate::ClientError;

/// Produces fresh session tokens.
///
/// # Contract
///
/// Values must be unique with overwhelming probability across the
/// process's lifetime — a collision would silently hand one visitor
/// another visitor's identity. Failure is allowed and propagates: when a
/// generator errors, the login flow aborts and no cookie is issued.
///
/// `Send + Sync + 'static` so one generator can serve every concurrent
/// request for as long as the client lives.
pub trait TokenGenerator: Send + Sync + 'static {
    /// Returns a fresh token.
    ///
    /// # Errors
    /// [`ClientError::TokenGeneration`] when no token could be produced.
    fn generate(&self) -> Result<String, ClientError>;
}

/// The default generator: random version-4 UUIDs.
///
/// 122 bits of randomness, which makes a collision (or a successful
/// guess of someone else's token) computationally implausible.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTokenGenerator;

impl TokenGenerator for UuidTokenGenerator {
    fn generate(&self) -> Result<String, ClientError> {
        Ok(uuid::Uuid::new_v4().to_string())
    }
}
