//! Core domain concepts shared across all subdomains.
//!
//! - [`error::InvalidOperationError`] — the single contract-violation error

pub mod error;
