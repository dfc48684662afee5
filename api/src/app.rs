//! Application state and factory
//!
//! Builds the actix-web `App` from already constructed services so the same
//! wiring serves the binary (MySQL + configured SMS provider) and the
//! integration tests (in-memory repositories + mock SMS).

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use mv_core::repositories::{MessageRepository, UserRepository, VerificationRepository};
use mv_core::services::{MessageService, SmsServiceTrait, UserService, VerificationService};
use mv_shared::config::CorsConfig;
use mv_shared::types::ApiResponse;

use crate::handlers::{json_error_handler, path_error_handler, HealthProbe};
use crate::middleware::cors::create_cors;
use crate::routes::{health, messages, otp, users};

/// Application state that holds shared services
pub struct AppState<U, V, M, S>
where
    U: UserRepository,
    V: VerificationRepository,
    M: MessageRepository,
    S: SmsServiceTrait,
{
    pub user_service: Arc<UserService<U>>,
    pub verification_service: Arc<VerificationService<S, U, V, M>>,
    pub message_service: Arc<MessageService<M, U>>,
    pub health: Arc<dyn HealthProbe>,
}

impl<U, V, M, S> AppState<U, V, M, S>
where
    U: UserRepository,
    V: VerificationRepository,
    M: MessageRepository,
    S: SmsServiceTrait,
{
    pub fn new(
        user_service: Arc<UserService<U>>,
        verification_service: Arc<VerificationService<S, U, V, M>>,
        message_service: Arc<MessageService<M, U>>,
        health: Arc<dyn HealthProbe>,
    ) -> Self {
        Self {
            user_service,
            verification_service,
            message_service,
            health,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, V, M, S>(
    app_state: web::Data<AppState<U, V, M, S>>,
    cors_config: &CorsConfig,
    max_payload_size: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    V: VerificationRepository + 'static,
    M: MessageRepository + 'static,
    S: SmsServiceTrait + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(
            web::JsonConfig::default()
                .limit(max_payload_size)
                .error_handler(json_error_handler),
        )
        .app_data(web::PayloadConfig::new(max_payload_size))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .wrap(create_cors(cors_config))
        .wrap(Logger::default())
        .route("/", web::get().to(health::liveness))
        .route("/health", web::get().to(health::health_check::<U, V, M, S>))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/users")
                        .route("", web::post().to(users::create_user::<U, V, M, S>))
                        .route("", web::get().to(users::list_users::<U, V, M, S>))
                        .route("/{id}", web::get().to(users::get_user::<U, V, M, S>))
                        .route("/{id}", web::delete().to(users::delete_user::<U, V, M, S>))
                        .route("/{id}/send-otp", web::post().to(otp::send_otp::<U, V, M, S>))
                        .route("/{id}/verify-otp", web::post().to(otp::verify_otp::<U, V, M, S>))
                        .route("/{id}/resend-otp", web::post().to(otp::resend_otp::<U, V, M, S>)),
                )
                .route("/messages", web::get().to(messages::list_messages::<U, V, M, S>)),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::failure("The requested resource was not found"))
}
