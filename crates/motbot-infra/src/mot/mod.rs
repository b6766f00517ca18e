//! DVSA MoT history API client.

pub mod client;

pub use client::MotHistoryClient;
