pub mod arp;
pub mod echo;
pub mod ping;

use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use netdiag_common::session::Vendor;
use netdiag_core::probe::ProbeConfig;
use netdiag_protocols::ping_report::PingFlavor;

#[derive(Parser)]
#[command(name = "netdiag")]
#[command(about = "ARP table parsing and UDP/ICMP reachability probes.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less output; repeat for results only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse ARP table output read from stdin
    #[command(alias = "a")]
    Arp {
        /// Device family that produced the table
        #[arg(long, default_value = "cisco_ios")]
        vendor: Vendor,
    },
    /// Send one UDP datagram and wait for the echo
    #[command(alias = "e")]
    Echo {
        #[command(flatten)]
        probe: ProbeArgs,
        /// Payload to send
        message: String,
    },
    /// Measure packet loss and average RTT with the system ping
    #[command(alias = "p")]
    Ping {
        #[command(flatten)]
        probe: ProbeArgs,
        /// Payload bytes per echo request
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
        size: u32,
        /// Number of echo requests
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
        /// Ping command-line and output convention (defaults to this platform's)
        #[arg(long)]
        flavor: Option<PingFlavor>,
    },
}

#[derive(Args)]
pub struct ProbeArgs {
    /// Local address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub src: String,
    /// Local port to bind, 0 picks one
    #[arg(long, default_value_t = 0)]
    pub src_port: u16,
    /// Destination address or host name
    #[arg(long)]
    pub dst: String,
    /// Destination UDP port
    #[arg(long, default_value_t = 7)]
    pub dst_port: u16,
    /// Seconds to wait for a reply
    #[arg(long, default_value_t = 2)]
    pub timeout: u64,
}

impl ProbeArgs {
    pub fn to_config(&self) -> ProbeConfig {
        ProbeConfig::new(&self.src, self.src_port, &self.dst, self.dst_port)
            .with_timeout(Duration::from_secs(self.timeout))
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
