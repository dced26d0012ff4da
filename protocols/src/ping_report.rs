//! # Ping Report Parsing
//!
//! The OS `ping` utility is driven through its command line and its
//! human-readable summary. Both depend on the platform, so every
//! [`PingFlavor`] pairs one flag convention with the parser for the output that
//! the same implementation prints.
//!
//! **Platform assumption:** the parsers expect the English summary lines.
//! A localized `ping` or a platform with a different report shape needs its own
//! flavor.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::LazyLock;
use std::time::Duration;

use netdiag_common::{error::ReportError, network::ping::PingResult};
use regex::Regex;

// Packets: Sent = 4, Received = 4, Lost = 0 (0% loss),
static WINDOWS_LOSS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+)% loss\)").expect("valid loss pattern"));

// Minimum = 3ms, Maximum = 3ms, Average = 3ms
static WINDOWS_AVG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Average = (\d+)ms").expect("valid average pattern"));

// 5 packets transmitted, 5 received, 0% packet loss, time 4005ms
static UNIX_LOSS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)% packet loss").expect("valid loss pattern")
});

// rtt min/avg/max/mdev = 0.041/0.047/0.056/0.006 ms
// round-trip min/avg/max/stddev = 14.123/15.456/16.789/0.945 ms
static UNIX_AVG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"min/avg/max\S* = [\d.]+/([\d.]+)/").expect("valid average pattern")
});

/// A matched pair of `ping` command-line convention and report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PingFlavor {
    /// `ping.exe`: `-n` count, `-l` size, `-w` reply wait in milliseconds,
    /// `(N% loss)` and `Average = Nms`.
    Windows,
    /// iputils, BSD, macOS and busybox: `-c` count, `-s` size, `-W` reply wait
    /// in whole seconds (iputils and busybox semantics), `N% packet loss` and a
    /// `min/avg/max` line with fractional milliseconds.
    Unix,
}

impl PingFlavor {
    /// The flavor of the `ping` shipped with the target platform.
    pub fn native() -> Self {
        if cfg!(windows) {
            PingFlavor::Windows
        } else {
            PingFlavor::Unix
        }
    }

    /// Flags for `count` requests of `packet_size` bytes, each waiting at most
    /// `reply_wait` for its reply.
    pub fn command_args(
        &self,
        count: u32,
        packet_size: u32,
        reply_wait: Duration,
        destination: IpAddr,
    ) -> Vec<String> {
        let (count_flag, size_flag, wait_flag, wait) = match self {
            PingFlavor::Windows => ("-n", "-l", "-w", reply_wait.as_millis().max(1)),
            // -W takes whole seconds; round up so the wait never shrinks.
            PingFlavor::Unix => ("-c", "-s", "-W", reply_wait.as_millis().div_ceil(1000).max(1)),
        };
        vec![
            count_flag.to_string(),
            count.to_string(),
            size_flag.to_string(),
            packet_size.to_string(),
            wait_flag.to_string(),
            wait.to_string(),
            destination.to_string(),
        ]
    }

    /// Extracts packet loss and average round trip time from captured output.
    ///
    /// Both values must be present. A report missing either one is an error,
    /// never a zero-filled result.
    pub fn parse(&self, output: &str) -> Result<PingResult, ReportError> {
        match self {
            PingFlavor::Windows => parse_windows(output),
            PingFlavor::Unix => parse_unix(output),
        }
    }
}

impl Default for PingFlavor {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for PingFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PingFlavor::Windows => f.write_str("windows"),
            PingFlavor::Unix => f.write_str("unix"),
        }
    }
}

impl FromStr for PingFlavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" | "win" => Ok(PingFlavor::Windows),
            "unix" | "linux" | "macos" | "bsd" => Ok(PingFlavor::Unix),
            _ => Err(format!("unknown ping flavor: {s}")),
        }
    }
}

fn parse_windows(output: &str) -> Result<PingResult, ReportError> {
    let loss = capture(&WINDOWS_LOSS_RE, output).ok_or(ReportError::MissingLoss)?;
    let avg = capture(&WINDOWS_AVG_RE, output).ok_or(ReportError::MissingAverage)?;

    let packet_loss_percent = loss
        .parse::<u8>()
        .ok()
        .filter(|pct| *pct <= 100)
        .ok_or_else(|| invalid("packet loss", loss))?;
    let avg_rtt_ms = avg
        .parse::<u32>()
        .map_err(|_| invalid("average round trip time", avg))?;

    Ok(PingResult::new(packet_loss_percent, avg_rtt_ms))
}

fn parse_unix(output: &str) -> Result<PingResult, ReportError> {
    let loss = capture(&UNIX_LOSS_RE, output).ok_or(ReportError::MissingLoss)?;
    let avg = capture(&UNIX_AVG_RE, output).ok_or(ReportError::MissingAverage)?;

    let packet_loss_percent = loss
        .parse::<f64>()
        .ok()
        .map(f64::round)
        .filter(|pct| (0.0..=100.0).contains(pct))
        .ok_or_else(|| invalid("packet loss", loss))? as u8;
    let avg_rtt_ms = avg
        .parse::<f64>()
        .ok()
        .map(f64::round)
        .filter(|ms| ms.is_finite() && (0.0..=f64::from(u32::MAX)).contains(ms))
        .ok_or_else(|| invalid("average round trip time", avg))? as u32;

    Ok(PingResult::new(packet_loss_percent, avg_rtt_ms))
}

fn capture<'a>(re: &Regex, output: &'a str) -> Option<&'a str> {
    re.captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn invalid(field: &'static str, value: &str) -> ReportError {
    ReportError::InvalidNumber {
        field,
        value: value.to_string(),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
