//! Rendering and parsing of the protocol's plain-text bodies.
//!
//! The store answers in plain text, not JSON: a read returns either the
//! bound name or the literal sentinel `No Name!`, and a write returns the
//! literal ack `cookie set`. Both are newline-terminated on the wire.
//! This module is the single place where those literals live — the server
//! renders through it and the client parses through it, so neither side
//! hard-codes magic strings.

/// The sentinel body meaning "no name is bound to that token".
///
/// A miss is a *successful* reply (HTTP 200) carrying this literal. That
/// makes the empty string and this sentinel reserved values: neither can
/// ever be a valid display name.
pub const NO_NAME: &str = "No Name!";

/// The body acknowledging a successful write (bind or unbind alike).
pub const WRITE_ACK: &str = "cookie set";

/// Renders the write acknowledgement, newline-terminated.
pub fn write_ack() -> String {
    format!("{WRITE_ACK}\n")
}

// ---------------------------------------------------------------------------
// ReadReply
// ---------------------------------------------------------------------------

/// The decoded body of a read reply: a name, or "no name".
///
/// Inside the process, presence and absence are an `Option` (see the
/// store crate); this type is the wire-facing twin that knows how the
/// distinction is spelled in a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadReply {
    /// A name is bound to the token.
    Name(String),

    /// The token is unknown, unbound, or empty — a normal miss.
    NoName,
}

impl ReadReply {
    /// Renders the reply as a response body, newline-terminated.
    pub fn encode(&self) -> String {
        match self {
            ReadReply::Name(name) => format!("{name}\n"),
            ReadReply::NoName => format!("{NO_NAME}\n"),
        }
    }

    /// Parses a response body back into a reply.
    ///
    /// Trailing `\r\n`/`\n` are trimmed first. An empty body and the
    /// sentinel both decode to [`ReadReply::NoName`] — the empty string
    /// is reserved for absence everywhere in this protocol.
    pub fn decode(body: &str) -> Self {
        let body = body.trim_end_matches(['\r', '\n']);
        if body.is_empty() || body == NO_NAME {
            ReadReply::NoName
        } else {
            ReadReply::Name(body.to_string())
        }
    }

    /// Converts the reply into the in-process representation.
    pub fn into_name(self) -> Option<String> {
        match self {
            ReadReply::Name(name) => Some(name),
            ReadReply::NoName => None,
        }
    }
}

/// A store lookup result renders directly as a reply. `None` and an
/// empty name both become the sentinel.
impl From<Option<String>> for ReadReply {
    fn from(lookup: Option<String>) -> Self {
        match lookup {
            Some(name) if !name.is_empty() => ReadReply::Name(name),
            _ => ReadReply::NoName,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_name_is_newline_terminated() {
        assert_eq!(ReadReply::Name("Ray".into()).encode(), "Ray\n");
    }

    #[test]
    fn test_encode_no_name_is_sentinel() {
        assert_eq!(ReadReply::NoName.encode(), "No Name!\n");
    }

    #[test]
    fn test_decode_trims_trailing_newlines() {
        // Bodies may arrive with \n or \r\n depending on the peer.
        assert_eq!(
            ReadReply::decode("Ray\r\n"),
            ReadReply::Name("Ray".into())
        );
        assert_eq!(ReadReply::decode("Ray\n"), ReadReply::Name("Ray".into()));
    }

    #[test]
    fn test_decode_sentinel_is_no_name() {
        assert_eq!(ReadReply::decode("No Name!\n"), ReadReply::NoName);
    }

    #[test]
    fn test_decode_empty_body_is_no_name() {
        assert_eq!(ReadReply::decode(""), ReadReply::NoName);
        assert_eq!(ReadReply::decode("\n"), ReadReply::NoName);
    }

    #[test]
    fn test_from_lookup_empty_name_is_no_name() {
        // The reserved-value rule: an empty name can never reach the wire
        // as a real name.
        assert_eq!(ReadReply::from(Some(String::new())), ReadReply::NoName);
        assert_eq!(ReadReply::from(None), ReadReply::NoName);
    }

    #[test]
    fn test_encode_decode_reply_survives() {
        let reply = ReadReply::Name("Ray".into());
        assert_eq!(ReadReply::decode(&reply.encode()), reply);
    }

    #[test]
    fn test_write_ack_matches_literal() {
        assert_eq!(write_ack().trim_end(), WRITE_ACK);
    }
}
