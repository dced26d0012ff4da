//! A UDP echo probe bound to one local endpoint and aimed at one destination.
//!
//! The probe owns a single socket for its whole life. Construction either
//! yields a fully bound probe or an error with nothing left open, and dropping
//! the probe closes the socket.
//!
//! There is no correlation token in the echo payload: the first datagram that
//! arrives is taken as the reply. Both operations take `&mut self`, so a probe
//! can only run one cycle at a time. Share it behind a mutex or use one probe
//! per caller.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use netdiag_common::error::ProbeError;
use netdiag_common::network::{echo::EchoReply, ping::PingResult};
use netdiag_protocols::ping_report::PingFlavor;
use tokio::net::{UdpSocket, lookup_host};
use tokio::time::timeout;
use tracing::{debug, warn};

mod ping;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);
const RECV_BUFFER_SIZE: usize = 1024;
const PING_INTERVAL: Duration = Duration::from_secs(1);
const PING_DEADLINE_SLACK: Duration = Duration::from_secs(5);

/// Everything needed to bind an [`EchoProbe`].
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub src_addr: String,
    pub src_port: u16,
    pub dst_addr: String,
    pub dst_port: u16,
    /// How long an echo waits for its reply.
    pub timeout: Duration,
    /// Program started for [`EchoProbe::ping`].
    pub ping_program: String,
    pub ping_flavor: PingFlavor,
    /// Hard limit on one ping run. Derived from the packet count when unset.
    pub ping_deadline: Option<Duration>,
}

impl ProbeConfig {
    pub fn new(
        src_addr: impl Into<String>,
        src_port: u16,
        dst_addr: impl Into<String>,
        dst_port: u16,
    ) -> Self {
        Self {
            src_addr: src_addr.into(),
            src_port,
            dst_addr: dst_addr.into(),
            dst_port,
            timeout: DEFAULT_TIMEOUT,
            ping_program: "ping".to_string(),
            ping_flavor: PingFlavor::native(),
            ping_deadline: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_ping_program(mut self, program: impl Into<String>) -> Self {
        self.ping_program = program.into();
        self
    }

    pub fn with_ping_flavor(mut self, flavor: PingFlavor) -> Self {
        self.ping_flavor = flavor;
        self
    }

    pub fn with_ping_deadline(mut self, deadline: Duration) -> Self {
        self.ping_deadline = Some(deadline);
        self
    }
}

pub struct EchoProbe {
    socket: UdpSocket,
    destination: SocketAddr,
    timeout: Duration,
    ping_program: String,
    ping_flavor: PingFlavor,
    ping_deadline: Option<Duration>,
}

impl EchoProbe {
    /// Resolves the destination and binds the local socket.
    ///
    /// The destination is resolved first so that a failure there never leaves a
    /// bound port behind.
    pub async fn bind(cfg: ProbeConfig) -> Result<Self, ProbeError> {
        let src_ip: IpAddr = cfg
            .src_addr
            .parse()
            .map_err(|_| ProbeError::InvalidAddress(cfg.src_addr.clone()))?;
        let local = SocketAddr::new(src_ip, cfg.src_port);
        let destination = resolve_destination(&cfg.dst_addr, cfg.dst_port, src_ip).await?;

        let socket = UdpSocket::bind(local)
            .await
            .map_err(|source| ProbeError::Bind { addr: local, source })?;

        debug!(local = %local, destination = %destination, "echo probe bound");

        Ok(Self {
            socket,
            destination,
            timeout: cfg.timeout,
            ping_program: cfg.ping_program,
            ping_flavor: cfg.ping_flavor,
            ping_deadline: cfg.ping_deadline,
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    pub fn destination(&self) -> SocketAddr {
        self.destination
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends `message` to the destination and waits for one datagram back.
    ///
    /// The first datagram received is the reply, whoever sent it. Running out
    /// of time is [`EchoReply::NoResponse`]; socket faults are errors.
    pub async fn send_and_receive(&mut self, message: &str) -> Result<EchoReply, ProbeError> {
        let sent = self
            .socket
            .send_to(message.as_bytes(), self.destination)
            .await
            .map_err(|source| ProbeError::Send {
                dst: self.destination,
                source,
            })?;
        debug!(destination = %self.destination, bytes_sent = sent, "echo sent");

        let mut buf = [0u8; RECV_BUFFER_SIZE];
        match timeout(self.timeout, self.socket.recv_from(&mut buf)).await {
            Ok(Ok((len, from))) => {
                if from != self.destination {
                    debug!(expected = %self.destination, received_from = %from, "reply from unexpected source");
                }
                debug!(bytes_received = len, "echo reply received");
                Ok(EchoReply::Reply(String::from_utf8_lossy(&buf[..len]).into_owned()))
            }
            Ok(Err(source)) => Err(ProbeError::Receive(source)),
            Err(_elapsed) => {
                warn!("No echo from {} within {:?}", self.destination, self.timeout);
                Ok(EchoReply::NoResponse)
            }
        }
    }

    /// Runs the OS ping utility against the destination and parses its summary.
    ///
    /// A report without a loss or average figure is a hard error.
    pub async fn ping(&mut self, packet_size: u32, count: u32) -> Result<PingResult, ProbeError> {
        if packet_size == 0 {
            return Err(ProbeError::InvalidArgument("packet size must be positive"));
        }
        if count == 0 {
            return Err(ProbeError::InvalidArgument("count must be positive"));
        }

        let args = self
            .ping_flavor
            .command_args(count, packet_size, self.timeout, self.destination.ip());
        let deadline = self
            .ping_deadline
            .unwrap_or_else(|| default_deadline(count, self.timeout));

        let output = ping::run(&self.ping_program, &args, deadline).await?;
        Ok(self.ping_flavor.parse(&output)?)
    }
}

/// Worst case for `count` requests that each wait the full reply timeout.
fn default_deadline(count: u32, reply_timeout: Duration) -> Duration {
    PING_INTERVAL
        .saturating_add(reply_timeout)
        .saturating_mul(count)
        .saturating_add(PING_DEADLINE_SLACK)
}

/// Resolves `host:port`, preferring an address of the same family as `src_ip`.
async fn resolve_destination(host: &str, port: u16, src_ip: IpAddr) -> Result<SocketAddr, ProbeError> {
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, port));
    }

    let target = format!("{host}:{port}");
    let candidates: Vec<SocketAddr> = lookup_host(target.as_str())
        .await
        .map_err(|source| ProbeError::Resolve {
            target: target.clone(),
            source,
        })?
        .collect();

    candidates
        .iter()
        .find(|addr| addr.is_ipv4() == src_ip.is_ipv4())
        .or_else(|| candidates.first())
        .copied()
        .ok_or_else(|| ProbeError::Resolve {
            target,
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no addresses found"),
        })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
