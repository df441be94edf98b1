//! Remote data access.
//!
//! The REST API (`pilab serve`) is the system of record for users and can
//! also serve benchmark records and the catalog; `ApiClient` is the blocking
//! client the TUI and `pilab list --remote` use to reach it.

pub mod client;

pub use client::*;
