//! Database module - MySQL implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management and health checks
//! - Embedded schema migrations
//! - Repository implementations for users, verification sessions and messages

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlMessageRepository, MySqlUserRepository, MySqlVerificationRepository};
