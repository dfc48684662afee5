//! Shared utilities and common types for the MobileVerify server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - The JSON response envelope
//! - Phone number utilities (normalization, masking, prefixing)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, Environment, OtpConfig, ServerConfig, SmsConfig};
pub use types::ApiResponse;
pub use utils::phone;
