//! State Management
//!
//! Dashboard state and the pure diet-type filter engine.

pub mod filter;
pub mod global;
