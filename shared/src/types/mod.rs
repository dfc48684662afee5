//! Type definitions shared between layers
//!
//! - `response` - The JSON response envelope

pub mod response;

pub use response::ApiResponse;
