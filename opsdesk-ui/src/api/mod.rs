//! API Layer
//!
//! HTTP client for the OpsDesk service and runtime base-address configuration.

pub mod client;

pub use client::*;
