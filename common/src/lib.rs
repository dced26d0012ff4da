//! Shared models, errors and ports for the `netdiag` workspace.
//!
//! Nothing in here performs I/O. The parsers live in `netdiag-protocols` and the
//! socket and process work lives in `netdiag-core`.

pub mod config;
pub mod error;
pub mod network;
pub mod session;
pub mod vendors;
