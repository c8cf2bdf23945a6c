// netstage-api: Async Rust client for the netstage network-configuration HTTP API

pub mod client;
pub mod error;
pub mod models;
pub mod network;
pub mod transport;

pub use client::BaseHttpClient;
pub use error::Error;
pub use network::NetworkApi;
