use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name is required"))]
    pub last_name: String,

    /// Registered without country prefix, e.g. "9876543210"
    #[validate(length(min = 6, max = 20, message = "Mobile number must be 6 to 20 characters"))]
    pub mobile_number: String,
}
