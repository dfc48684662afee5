//! User directory endpoints.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use mv_core::repositories::{MessageRepository, UserRepository, VerificationRepository};
use mv_core::services::SmsServiceTrait;
use mv_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::CreateUserRequest;
use crate::handlers::ApiError;

/// POST /api/users
///
/// ```json
/// { "firstName": "A", "lastName": "B", "mobileNumber": "9876543210" }
/// ```
///
/// Responds 201 with the created user, 400 on a blank field, malformed
/// number or an already registered number.
pub async fn create_user<U, V, M, S>(
    state: web::Data<AppState<U, V, M, S>>,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    V: VerificationRepository + 'static,
    M: MessageRepository + 'static,
    S: SmsServiceTrait + 'static,
{
    request.validate()?;

    let user = state
        .user_service
        .create_user(&request.first_name, &request.last_name, &request.mobile_number)
        .await?;

    log::info!("User {} created", user.id);
    Ok(HttpResponse::Created().json(ApiResponse::success("User created successfully", user)))
}

/// GET /api/users
pub async fn list_users<U, V, M, S>(
    state: web::Data<AppState<U, V, M, S>>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    V: VerificationRepository + 'static,
    M: MessageRepository + 'static,
    S: SmsServiceTrait + 'static,
{
    let users = state.user_service.list_users().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Users retrieved successfully", users)))
}

/// GET /api/users/{id}
pub async fn get_user<U, V, M, S>(
    state: web::Data<AppState<U, V, M, S>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    V: VerificationRepository + 'static,
    M: MessageRepository + 'static,
    S: SmsServiceTrait + 'static,
{
    let user = state.user_service.get_user(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("User retrieved successfully", user)))
}

/// DELETE /api/users/{id}
pub async fn delete_user<U, V, M, S>(
    state: web::Data<AppState<U, V, M, S>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    V: VerificationRepository + 'static,
    M: MessageRepository + 'static,
    S: SmsServiceTrait + 'static,
{
    let id = path.into_inner();
    state.user_service.delete_user(id).await?;

    log::info!("User {} deleted", id);
    Ok(HttpResponse::Ok().json(ApiResponse::message("User deleted successfully")))
}
