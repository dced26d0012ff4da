use std::io;
use std::net::SocketAddr;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

/// The ping output did not have the shape the selected parser expects.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("ping output has no packet loss summary")]
    MissingLoss,

    #[error("ping output has no average round trip time")]
    MissingAverage,

    #[error("invalid {field} in ping output: '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

/// Failures of the echo probe and of the ping runner.
///
/// An echo timeout is not in here; it is reported as
/// [`EchoReply::NoResponse`](crate::network::echo::EchoReply::NoResponse).
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("invalid address '{0}'")]
    InvalidAddress(String),

    #[error("could not resolve '{target}'")]
    Resolve {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to bind UDP socket on {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("failed to send datagram to {dst}")]
    Send {
        dst: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("failed to receive datagram")]
    Receive(#[source] io::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("failed to run '{program}'")]
    PingSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("ping failed with {status}: {stderr}")]
    PingExit { status: ExitStatus, stderr: String },

    #[error("ping did not finish within {0:?}")]
    PingTimeout(Duration),

    #[error(transparent)]
    Report(#[from] ReportError),
}
