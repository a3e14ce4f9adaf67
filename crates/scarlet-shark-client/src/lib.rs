//! HTTP client for the Scarlet Shark threat intelligence API.
//!
//! [`ClientFactory`] and [`ScarletSharkClientBuilder`] produce a versioned
//! client implementing [`ScarletSharkApi`]. Each search call builds its query
//! string, performs one authenticated GET and unwraps the result envelope.
//! [`BlockingClient`] offers the same operations without an async runtime.

#![doc(html_root_url = "https://docs.rs/scarlet-shark-client/1.0.0")]

pub mod api;
mod blocking;
mod client;
mod config;
mod executor;
mod normalize;
mod query;
mod registry;
mod transport;

#[cfg(test)]
mod testing;

pub use api::{ScarletSharkApi, V04Client};
pub use blocking::BlockingClient;
pub use client::{ClientFactory, ScarletSharkClientBuilder};
pub use config::*;
pub use executor::RequestExecutor;
pub use normalize::{domain_to_ascii, url_to_ascii};
pub use query::QueryBuilder;
pub use registry::ActionRegistry;
pub use scarlet_shark_core::{Result, ScarletSharkError};
pub use transport::{ReqwestTransport, Transport, TransportResponse};
