//! # Blog Core
//!
//! The domain layer of the blog API.
//! Blog post entities, their invariants and the storage port, with no
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
