use std::sync::Arc;

use actix_web::{web, HttpServer};
use log::{error, info};

use mv_api::app::{create_app, AppState};
use mv_api::config::load_config;
use mv_core::services::{MessageService, UserService, VerificationService, VerificationServiceConfig};
use mv_infra::database::{
    DatabasePool, MySqlMessageRepository, MySqlUserRepository, MySqlVerificationRepository,
};
use mv_infra::sms::{create_sms_service, SmsServiceAdapter};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting MobileVerify API server");
    let config = load_config();

    let db_pool = match DatabasePool::new(config.database.clone()).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to connect to the database: {}", e);
            std::process::exit(1);
        }
    };
    db_pool.run_migrations().await?;
    info!("{}", db_pool.get_statistics());

    let sms_service = Arc::new(SmsServiceAdapter::from(create_sms_service(&config.sms)?));
    info!("SMS provider ready: {}", sms_service.provider_name());

    let pool = db_pool.get_pool().clone();
    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let verification_repository = Arc::new(MySqlVerificationRepository::new(pool.clone()));
    let message_repository = Arc::new(MySqlMessageRepository::new(pool));

    let verification_config = VerificationServiceConfig::from_settings(&config.otp, &config.sms);
    let app_state = web::Data::new(AppState::new(
        Arc::new(UserService::new(user_repository.clone())),
        Arc::new(VerificationService::new(
            sms_service,
            user_repository.clone(),
            verification_repository,
            message_repository.clone(),
            verification_config,
        )),
        Arc::new(MessageService::new(message_repository, user_repository)),
        Arc::new(db_pool.clone()),
    ));

    let cors_config = config.cors.clone();
    let max_payload_size = config.server.max_payload_size;
    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), &cors_config, max_payload_size)
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let bind_address = config.server.bind_address();
    info!("Listening on {}", bind_address);
    server.bind(&bind_address)?.run().await?;

    db_pool.close().await;
    info!("Server stopped");
    Ok(())
}
