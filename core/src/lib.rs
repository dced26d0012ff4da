//! # netdiag core
//!
//! The I/O half of the toolkit:
//!
//! * **[`probe`]**: UDP echo round trips and OS `ping` runs from one bound socket.
//! * **[`retriever`]**: fetches an ARP table through a command session and parses it.
//! * **[`vendors`]**: OUI lookups for hardware addresses.

pub mod probe;
pub mod retriever;
pub mod vendors;
