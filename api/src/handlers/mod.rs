pub mod error;
pub mod health;

pub use error::{json_error_handler, path_error_handler, ApiError};
pub use health::HealthProbe;
