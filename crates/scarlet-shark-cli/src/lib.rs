//! # scarlet-shark-cli
//!
//! Command-line interface for the Scarlet Shark threat intelligence API.
//!
//! ## Features
//!
//! - **All search operations**: DNS, domain, email, hash, IP, network, threat actors,
//!   threat tools and URL lookups
//! - **Persisted configuration**: API key, API version and output format
//! - **Multiple output formats**: Pretty, JSON, YAML

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
