pub mod arp;
pub mod echo;
pub mod ping;
