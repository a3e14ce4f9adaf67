//! Rust client for the Scarlet Shark threat intelligence API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use scarlet_shark::{ClientFactory, DomainQuery, IpContext, IpQuery};
//!
//! #[tokio::main]
//! async fn main() -> scarlet_shark::Result<()> {
//!     let client = ClientFactory::get_client("your-api-key", "v0.4")?;
//!
//!     // Domain lookup; Unicode domains are sent in their punycode form
//!     if let Some(info) = client.search_domain(DomainQuery::new("bücher.de")).await? {
//!         println!("{info:#}");
//!     }
//!
//!     // IP lookup with context
//!     let query = IpQuery::new(["1.2.3.4"])
//!         .context(IpContext::UserActivity)
//!         .time_period(7);
//!     match client.search_ip(query).await? {
//!         Some(result) => println!("{result:#}"),
//!         None => println!("no data"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Without an async runtime, use [`ScarletSharkClientBuilder::build_blocking`]:
//!
//! ```rust,ignore
//! use scarlet_shark::{HashQuery, ScarletSharkClientBuilder};
//!
//! let client = ScarletSharkClientBuilder::new("your-api-key").build_blocking()?;
//! let result = client.search_hash(HashQuery::md5("d41d8cd98f00b204e9800998ecf8427e"))?;
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/scarlet-shark/1.0.0")]

// Re-export core types
pub use scarlet_shark_core::*;

// Re-export client
pub use scarlet_shark_client::{
    BlockingClient, ClientConfig, ClientFactory, ReqwestTransport, ScarletSharkApi,
    ScarletSharkClientBuilder, Transport, TransportResponse, V04Client, DEFAULT_BASE_URL,
};

// Re-export runtime for convenience
pub use tokio;
pub use serde;
pub use serde_json;
