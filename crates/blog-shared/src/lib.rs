//! # Blog Shared
//!
//! Wire types exchanged with API clients.
//! Kept free of domain dependencies so clients can reuse them as-is.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
