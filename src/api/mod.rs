//! API Client
//!
//! HTTP access to the analytics endpoint.

pub mod client;

pub use client::{fetch_analytics, get_endpoint, reset_endpoint, set_endpoint};
