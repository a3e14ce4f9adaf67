//! Core types and errors for the Scarlet Shark API client.
//!
//! This crate provides the foundational types used across the Scarlet Shark library:
//!
//! - **Operations**: the closed set of search endpoints ([`Operation`])
//! - **Queries**: one parameter type per operation ([`DomainQuery`], [`IpQuery`], ...)
//! - **Parameters**: ordered, presence-filtered query values ([`QueryParams`])
//! - **Envelope**: the API's `result_code`/`result` wrapper ([`ResultEnvelope`])
//! - **Errors**: error handling with [`ScarletSharkError`]
//!
//! # Example
//!
//! ```rust
//! use scarlet_shark_core::{IpContext, IpQuery};
//!
//! let query = IpQuery::new(["1.2.3.4"])
//!     .context(IpContext::UserActivity)
//!     .time_period(7);
//! assert_eq!(query.ips.len(), 1);
//! ```

#![doc(html_root_url = "https://docs.rs/scarlet-shark-core/1.0.0")]

mod error;
pub mod types;

pub use error::{Result, ScarletSharkError};
pub use types::*;
