//! HTTP route handlers grouped by resource.

pub mod health;
pub mod messages;
pub mod otp;
pub mod users;
