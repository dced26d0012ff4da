//! # ARP Entry Model
//!
//! One IP-to-MAC binding as scraped from a device's ARP table.
//!
//! The fields hold the text exactly as the device printed it. Typed views are
//! available through [`ArpEntry::ipv4`] and [`ArpEntry::mac_addr`], which never
//! alter the stored strings.

use std::fmt;
use std::net::Ipv4Addr;

use pnet::util::MacAddr;

/// A resolved binding on a device.
///
/// All three fields are non-empty. `netdiag_protocols::arp_table::parse` only
/// builds an entry when every field was found on the same line; other callers
/// of [`ArpEntry::new`] must hold the same invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArpEntry {
    /// Dotted-quad address, not range checked.
    pub ip: String,
    /// Hardware address in the notation the device used.
    pub mac: String,
    /// Device-local interface name.
    pub interface: String,
}

impl ArpEntry {
    pub fn new(
        ip: impl Into<String>,
        mac: impl Into<String>,
        interface: impl Into<String>,
    ) -> Self {
        let entry = Self {
            ip: ip.into(),
            mac: mac.into(),
            interface: interface.into(),
        };
        debug_assert!(
            !entry.ip.is_empty() && !entry.mac.is_empty() && !entry.interface.is_empty(),
            "ArpEntry fields must be non-empty: {entry:?}"
        );
        entry
    }

    /// Returns the address as an [`Ipv4Addr`], or `None` if an octet is out of range.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        self.ip.parse().ok()
    }

    /// Decodes the dotted hex-group notation (`aabb.cc00.0110`) into a [`MacAddr`].
    pub fn mac_addr(&self) -> Option<MacAddr> {
        parse_dotted_mac(&self.mac)
    }
}

impl fmt::Display for ArpEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {} on {}", self.ip, self.mac, self.interface)
    }
}

fn parse_dotted_mac(s: &str) -> Option<MacAddr> {
    let groups: Vec<&str> = s.split('.').collect();
    if groups.len() != 3 {
        return None;
    }

    let mut octets = [0u8; 6];
    for (idx, group) in groups.iter().enumerate() {
        if group.len() != 4 || !group.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u16::from_str_radix(group, 16).ok()?;
        octets[idx * 2..idx * 2 + 2].copy_from_slice(&value.to_be_bytes());
    }

    let [a, b, c, d, e, f] = octets;
    Some(MacAddr::new(a, b, c, d, e, f))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
