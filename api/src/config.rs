//! Configuration loading for the API binary.

use mv_shared::config::{AppConfig, SmsProvider};

/// Load `.env` (when present) and build the application configuration
/// from the environment.
pub fn load_config() -> AppConfig {
    match dotenvy::dotenv() {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => log::debug!("No .env file found, using process environment"),
        Err(e) => log::warn!("Failed to read .env file: {}", e),
    }

    let config = AppConfig::from_env();
    log_summary(&config);
    config
}

/// Log the effective settings without secrets
fn log_summary(config: &AppConfig) {
    log::info!("Environment: {:?}", config.environment);
    log::info!("Server will bind to: {}", config.server.bind_address());
    log::info!(
        "Database pool: max {} connections, connect timeout {}s",
        config.database.max_connections,
        config.database.connect_timeout
    );

    match config.sms.provider {
        SmsProvider::Twilio => log::info!(
            "SMS provider: twilio (prefix {}, timeout {}s)",
            config.sms.country_prefix,
            config.sms.timeout_secs
        ),
        SmsProvider::Mock => log::warn!("SMS provider: mock, no real messages will be sent"),
    }

    log::info!(
        "OTP policy: {} digits, valid {} min, max attempts {}",
        config.otp.length,
        config.otp.ttl_minutes,
        config
            .otp
            .attempt_budget()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "unlimited".to_string())
    );
    if config.otp.accept_client_code {
        log::warn!("Caller-supplied OTP codes are accepted");
    }
}
