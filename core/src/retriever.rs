//! # ARP Table Retrieval
//!
//! Glues a [`CommandSession`] to the ARP table parser. The session decides
//! how the command reaches the device; this service only picks the command for
//! the vendor and turns the returned text into entries.

use anyhow::Context;
use netdiag_common::network::arp::ArpEntry;
use netdiag_common::session::{CommandSession, Vendor};
use netdiag_protocols::arp_table;
use tracing::info;

pub struct ArpRetriever<S: CommandSession> {
    session: S,
    vendor: Vendor,
}

impl<S: CommandSession> ArpRetriever<S> {
    pub fn new(session: S, vendor: Vendor) -> Self {
        Self { session, vendor }
    }

    /// Sends the vendor's ARP command once and parses whatever comes back.
    ///
    /// Session failures are returned as-is; there are no retries.
    pub async fn get_arp_table(&mut self) -> anyhow::Result<Vec<ArpEntry>> {
        let command: &str = self.vendor.arp_command();
        let raw: String = self
            .session
            .send_command(command)
            .await
            .with_context(|| format!("running '{command}' on {} device", self.vendor))?;

        let entries: Vec<ArpEntry> = arp_table::parse(&raw);
        info!("Parsed {} ARP entries from '{command}'", entries.len());

        Ok(entries)
    }

    /// Hands the session back, e.g. to close it explicitly.
    pub fn into_session(self) -> S {
        self.session
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
