//! # Blog Infrastructure
//!
//! Concrete implementations of the [`BlogPostRepository`] port defined in
//! `blog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL store via SeaORM
//!
//! [`BlogPostRepository`]: blog_core::ports::BlogPostRepository

pub mod database;
pub mod memory;

pub use database::DatabaseConfig;
pub use memory::InMemoryBlogPostStore;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresBlogPostRepository};
