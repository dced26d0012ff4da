//! # Command Session Port
//!
//! The remote command session (SSH login, command dispatch) is an external
//! collaborator. This module only defines the seam it plugs into and the vendor
//! tag that decides which command to send.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;

/// A connected session on a network device that runs one CLI command at a time
/// and hands back its output verbatim.
///
/// Implementations own their connection and release it on drop.
#[async_trait]
pub trait CommandSession: Send {
    async fn send_command(&mut self, command: &str) -> anyhow::Result<String>;
}

/// Device families whose ARP table output the table parser understands.
///
/// All of them print hardware addresses in dotted hex groups and put the
/// interface name in the last column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Vendor {
    #[default]
    CiscoIos,
    CiscoNxos,
    AristaEos,
}

impl Vendor {
    /// The command that prints the ARP table on this platform.
    pub fn arp_command(&self) -> &'static str {
        match self {
            Vendor::CiscoIos | Vendor::CiscoNxos => "show ip arp",
            Vendor::AristaEos => "show arp",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Vendor::CiscoIos => "cisco_ios",
            Vendor::CiscoNxos => "cisco_nxos",
            Vendor::AristaEos => "arista_eos",
        };
        f.write_str(name)
    }
}

impl FromStr for Vendor {
    type Err = String;

    /// Accepts the driver-style tags (`cisco_ios`, `cisco_nxos`, `arista_eos`)
    /// and their short forms (`ios`, `nxos`, `eos`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "cisco_ios" | "ios" => Ok(Vendor::CiscoIos),
            "cisco_nxos" | "nxos" => Ok(Vendor::CiscoNxos),
            "arista_eos" | "eos" => Ok(Vendor::AristaEos),
            _ => Err(format!("unsupported vendor: {s}")),
        }
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
