//! Extraction of [`ArpEntry`] values from raw ARP table output.
//!
//! Every line is searched on its own for three things: the first IPv4-shaped
//! run, the first dotted hex-group MAC and the last whitespace-separated token
//! (the interface). The searches are independent and unanchored. A line only
//! yields an entry when all three succeed, so headers, blank lines and
//! incomplete rows drop out without an error.
//!
//! Because the searches do not know about each other, an oddly laid out line
//! can still produce an entry whose interface is really a fragment of another
//! column. Device output is trusted; nothing here validates octet ranges.

use std::sync::LazyLock;

use netdiag_common::network::arp::ArpEntry;
use regex::{Regex, RegexBuilder};

static IPV4_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+\.\d+\.\d+").expect("valid IPv4 pattern"));

static DOTTED_MAC_RE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"(?:[0-9a-f]{4}\.){2}[0-9a-f]{4}")
        .case_insensitive(true)
        .build()
        .expect("valid MAC pattern")
});

/// Parses a whole ARP table dump, keeping the order of the source lines.
///
/// Duplicates are kept. Empty input yields an empty vector.
pub fn parse(raw: &str) -> Vec<ArpEntry> {
    raw.lines().filter_map(parse_line).collect()
}

/// Parses a single table row, or returns `None` if any field is missing.
pub fn parse_line(line: &str) -> Option<ArpEntry> {
    let ip = IPV4_RE.find(line)?;
    let mac = DOTTED_MAC_RE.find(line)?;
    let interface = line.split_whitespace().next_back()?;

    Some(ArpEntry::new(ip.as_str(), mac.as_str(), interface))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
