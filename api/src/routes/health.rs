use actix_web::{web, HttpResponse};
use mv_core::repositories::{MessageRepository, UserRepository, VerificationRepository};
use mv_core::services::SmsServiceTrait;
use mv_shared::types::ApiResponse;

use crate::app::AppState;

/// GET /
pub async fn liveness() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "message": "Server is running" }))
}

/// GET /health
///
/// 200 when the database answers a ping, 503 otherwise.
pub async fn health_check<U, V, M, S>(state: web::Data<AppState<U, V, M, S>>) -> HttpResponse
where
    U: UserRepository + 'static,
    V: VerificationRepository + 'static,
    M: MessageRepository + 'static,
    S: SmsServiceTrait + 'static,
{
    let database = state.health.is_healthy().await;
    let body = serde_json::json!({
        "status": if database { "healthy" } else { "unhealthy" },
        "database": database,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    if database {
        HttpResponse::Ok().json(ApiResponse::success("Service is healthy", body))
    } else {
        log::warn!("Health check failed: database unreachable");
        HttpResponse::ServiceUnavailable().json(ApiResponse {
            success: false,
            message: "Database unreachable".to_string(),
            data: Some(body),
            error: None,
        })
    }
}
