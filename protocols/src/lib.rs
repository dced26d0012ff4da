//! Text protocols spoken by network devices and OS tools.
//!
//! * [`arp_table`]: "show ARP table" style CLI output.
//! * [`ping_report`]: summaries printed by the OS `ping` utility.
//!
//! Everything here is a pure function of its input.

pub mod arp_table;
pub mod ping_report;
