//! OTP issue, resend and verify endpoints.
//!
//! Send and resend take an optional body; an empty body means "use the
//! registered number". A body that is present must be valid JSON.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use mv_core::repositories::{MessageRepository, UserRepository, VerificationRepository};
use mv_core::services::SmsServiceTrait;
use mv_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::{OtpSentResponse, SendOtpRequest, VerifyOtpRequest, VerifyOtpResponse};
use crate::handlers::ApiError;

/// POST /api/users/{id}/send-otp
///
/// # Request Body (optional)
///
/// ```json
/// { "mobileNumber": "9876543210" }
/// ```
///
/// # Response
///
/// ```json
/// {
///     "success": true,
///     "message": "OTP sent to +91******3210",
///     "data": { "destination": "+91******3210", "expiresAt": "..." }
/// }
/// ```
pub async fn send_otp<U, V, M, S>(
    state: web::Data<AppState<U, V, M, S>>,
    path: web::Path<Uuid>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    V: VerificationRepository + 'static,
    M: MessageRepository + 'static,
    S: SmsServiceTrait + 'static,
{
    let request = parse_send_body(&body)?;

    let issued = state
        .verification_service
        .issue_otp(
            path.into_inner(),
            request.mobile_number.as_deref(),
            request.otp.as_deref(),
        )
        .await?;

    let message = format!("OTP sent to {}", issued.destination);
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        message,
        OtpSentResponse {
            destination: issued.destination,
            expires_at: issued.expires_at,
        },
    )))
}

/// POST /api/users/{id}/resend-otp
///
/// Replaces the pending session. 404 when nothing is pending.
pub async fn resend_otp<U, V, M, S>(
    state: web::Data<AppState<U, V, M, S>>,
    path: web::Path<Uuid>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    V: VerificationRepository + 'static,
    M: MessageRepository + 'static,
    S: SmsServiceTrait + 'static,
{
    let request = parse_send_body(&body)?;

    let issued = state
        .verification_service
        .resend_otp(
            path.into_inner(),
            request.mobile_number.as_deref(),
            request.otp.as_deref(),
        )
        .await?;

    let message = format!("A new otp has been sent to {}", issued.destination);
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        message,
        OtpSentResponse {
            destination: issued.destination,
            expires_at: issued.expires_at,
        },
    )))
}

/// Empty or whitespace-only bodies fall back to the registered number
fn parse_send_body(body: &[u8]) -> Result<SendOtpRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SendOtpRequest::default());
    }

    let request: SendOtpRequest = serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {}", e)))?;
    request.validate()?;
    Ok(request)
}

/// POST /api/users/{id}/verify-otp
///
/// ```json
/// { "mobileNumber": "9876543210", "enteredOtp": "123456" }
/// ```
///
/// The session is looked up by number; the id segment only has to parse.
pub async fn verify_otp<U, V, M, S>(
    state: web::Data<AppState<U, V, M, S>>,
    _path: web::Path<Uuid>,
    request: web::Json<VerifyOtpRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    V: VerificationRepository + 'static,
    M: MessageRepository + 'static,
    S: SmsServiceTrait + 'static,
{
    request.validate()?;

    let verified = state
        .verification_service
        .verify_otp(&request.mobile_number, &request.entered_otp)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Mobile verified successfully",
        VerifyOtpResponse {
            mobile_number: verified.mobile_number,
            is_verified: verified.user_verified,
        },
    )))
}
