use std::fmt;

/// Text shown in place of a reply when the echo timed out.
pub const NO_RESPONSE: &str = "No response (timeout)";

/// Outcome of one UDP echo round trip.
///
/// A timeout is an ordinary outcome for a best-effort probe, so it is a variant
/// here rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EchoReply {
    /// Decoded payload of the first datagram that arrived.
    Reply(String),
    /// Nothing arrived before the probe timeout.
    NoResponse,
}

impl EchoReply {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            EchoReply::Reply(text) => Some(text),
            EchoReply::NoResponse => None,
        }
    }
}

impl fmt::Display for EchoReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EchoReply::Reply(text) => f.write_str(text),
            EchoReply::NoResponse => f.write_str(NO_RESPONSE),
        }
    }
}
