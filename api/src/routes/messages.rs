use actix_web::{web, HttpResponse};

use mv_core::repositories::{MessageRepository, UserRepository, VerificationRepository};
use mv_core::services::SmsServiceTrait;
use mv_shared::types::ApiResponse;

use crate::app::AppState;
use crate::handlers::ApiError;

/// GET /api/messages
///
/// Every archived message, each with its user record inlined.
pub async fn list_messages<U, V, M, S>(
    state: web::Data<AppState<U, V, M, S>>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    V: VerificationRepository + 'static,
    M: MessageRepository + 'static,
    S: SmsServiceTrait + 'static,
{
    let messages = state.message_service.list_messages().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Messages retrieved successfully", messages)))
}
