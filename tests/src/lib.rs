//! Cross-crate tests for `netdiag`.
//!
//! UDP tests only touch loopback. Ping tests run stand-in shell scripts in
//! place of the system `ping`, plus one ignored test against the real utility.

mod probe {
    mod echo;
    mod ping;
}
mod retrieval {
    mod arp;
}
