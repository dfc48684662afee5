//! Conversion of every failure into the JSON response envelope.

use actix_web::{
    error::{JsonPayloadError, PathError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use mv_core::errors::DomainError;
use mv_shared::types::ApiResponse;
use validator::ValidationErrors;

/// Error returned by every handler
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid request data")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    /// Server faults at `error`, rejected client requests at `warn`
    fn log_level(&self) -> log::Level {
        if self.status_code().is_server_error() {
            log::Level::Error
        } else {
            log::Level::Warn
        }
    }

    /// Client-facing message and optional detail
    fn envelope(&self) -> ApiResponse<()> {
        match self {
            ApiError::Domain(err) => match err {
                DomainError::IncorrectOtp {
                    remaining_attempts: Some(remaining),
                } => ApiResponse::failure(err.to_string())
                    .with_error(format!("{} attempts remaining", remaining)),
                DomainError::DispatchFailed { message } => {
                    ApiResponse::failure("Failed to send otp").with_error(message.clone())
                }
                DomainError::Internal { message } => {
                    ApiResponse::failure("Internal server error").with_error(message.clone())
                }
                other => ApiResponse::failure(other.to_string()),
            },
            ApiError::Validation(errors) => {
                ApiResponse::failure("Invalid request data").with_error(describe_validation(errors))
            }
            ApiError::BadRequest(message) => ApiResponse::failure(message.clone()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(err) => match err {
                DomainError::Validation { .. }
                | DomainError::Conflict { .. }
                | DomainError::IncorrectOtp { .. }
                | DomainError::OtpExpired => StatusCode::BAD_REQUEST,
                DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
                DomainError::TooManyAttempts => StatusCode::TOO_MANY_REQUESTS,
                DomainError::DispatchFailed { .. } | DomainError::Internal { .. } => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        log::log!(
            self.log_level(),
            "Request failed ({}): {:?}",
            status.as_u16(),
            self
        );

        HttpResponse::build(status).json(self.envelope())
    }
}

/// `field: message; field: message` in field order
fn describe_validation(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages: Vec<String> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            format!("{}: {}", field, messages.join(", "))
        })
        .collect();
    fields.sort();
    fields.join("; ")
}

/// Malformed or missing JSON bodies
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Content type must be application/json".to_string(),
        JsonPayloadError::Deserialize(e) => format!("Invalid JSON body: {}", e),
        other => format!("Invalid request body: {}", other),
    };
    ApiError::BadRequest(message).into()
}

/// Unparseable path segments such as a malformed user id
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("Invalid path parameter: {}", err)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(err: ApiError) -> serde_json::Value {
        let response = err.error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (DomainError::validation("bad"), StatusCode::BAD_REQUEST),
            (DomainError::conflict("dup"), StatusCode::BAD_REQUEST),
            (DomainError::not_found("User"), StatusCode::NOT_FOUND),
            (
                DomainError::IncorrectOtp {
                    remaining_attempts: None,
                },
                StatusCode::BAD_REQUEST,
            ),
            (DomainError::OtpExpired, StatusCode::BAD_REQUEST),
            (DomainError::TooManyAttempts, StatusCode::TOO_MANY_REQUESTS),
            (
                DomainError::DispatchFailed {
                    message: "down".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (DomainError::internal("db"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status_code(), status);
        }
    }

    #[test]
    fn test_client_errors_are_logged_above_debug() {
        let not_found = ApiError::from(DomainError::not_found("User"));
        let bad_body = ApiError::BadRequest("Invalid JSON body".to_string());
        assert_eq!(not_found.log_level(), log::Level::Warn);
        assert_eq!(bad_body.log_level(), log::Level::Warn);

        let internal = ApiError::from(DomainError::internal("db"));
        assert_eq!(internal.log_level(), log::Level::Error);
    }

    #[actix_web::test]
    async fn test_envelope_for_not_found() {
        let body = body_of(DomainError::not_found("User").into()).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "User not found");
        assert!(body.get("error").is_none());
        assert!(body.get("data").is_none());
    }

    #[actix_web::test]
    async fn test_envelope_for_dispatch_failure() {
        let body = body_of(
            DomainError::DispatchFailed {
                message: "provider down".to_string(),
            }
            .into(),
        )
        .await;
        assert_eq!(body["message"], "Failed to send otp");
        assert_eq!(body["error"], "provider down");
    }

    #[actix_web::test]
    async fn test_envelope_for_incorrect_otp() {
        let body = body_of(
            DomainError::IncorrectOtp {
                remaining_attempts: Some(2),
            }
            .into(),
        )
        .await;
        assert_eq!(body["message"], "Incorrect OTP");
        assert_eq!(body["error"], "2 attempts remaining");
    }
}
