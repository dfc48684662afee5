//! Shared wiring for the HTTP integration tests: in-memory repositories,
//! the mock SMS provider and a fixed health probe.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error,
};

use mv_api::app::{create_app, AppState};
use mv_api::handlers::health::StaticHealth;
use mv_core::repositories::{MockMessageRepository, MockUserRepository, MockVerificationRepository};
use mv_core::services::{MessageService, UserService, VerificationService, VerificationServiceConfig};
use mv_infra::sms::{MockSmsService, SmsService, SmsServiceAdapter};
use mv_shared::config::CorsConfig;

pub type TestState =
    AppState<MockUserRepository, MockVerificationRepository, MockMessageRepository, SmsServiceAdapter>;

/// Handles onto the in-memory stores behind a test app
pub struct TestContext {
    pub state: web::Data<TestState>,
    pub users: Arc<MockUserRepository>,
    pub sessions: Arc<MockVerificationRepository>,
    pub messages: Arc<MockMessageRepository>,
    pub sms: MockSmsService,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with(MockSmsService::new(), VerificationServiceConfig::default(), true)
    }

    pub fn with(sms: MockSmsService, config: VerificationServiceConfig, healthy: bool) -> Self {
        let users = Arc::new(MockUserRepository::new());
        let sessions = Arc::new(MockVerificationRepository::new());
        let messages = Arc::new(MockMessageRepository::new());
        let provider: Arc<dyn SmsService> = Arc::new(sms.clone());

        let state = web::Data::new(AppState::new(
            Arc::new(UserService::new(users.clone())),
            Arc::new(VerificationService::new(
                Arc::new(SmsServiceAdapter::new(provider)),
                users.clone(),
                sessions.clone(),
                messages.clone(),
                config,
            )),
            Arc::new(MessageService::new(messages.clone(), users.clone())),
            Arc::new(StaticHealth(healthy)),
        ));

        Self {
            state,
            users,
            sessions,
            messages,
            sms,
        }
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = Error,
            InitError = (),
        >,
    > {
        create_app(self.state.clone(), &CorsConfig::default(), 256 * 1024)
    }

    /// OTP carried by the last SMS sent to `destination`
    pub async fn last_otp(&self, destination: &str) -> Option<String> {
        self.sms
            .last_message_to(destination)
            .await
            .and_then(|m| m.body.rsplit(' ').next().map(str::to_string))
    }
}

/// Issue a request against an initialised app and return the status and
/// parsed JSON body
macro_rules! call {
    ($app:expr, $req:expr) => {{
        let resp = actix_web::test::call_service(&$app, $req.to_request()).await;
        let status = resp.status().as_u16();
        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        (status, body)
    }};
}

/// Register a user over HTTP and evaluate to its id
macro_rules! create_user {
    ($app:expr, $first:expr, $last:expr, $mobile:expr) => {{
        let (status, body) = call!(
            $app,
            actix_web::test::TestRequest::post()
                .uri("/api/users")
                .set_json(serde_json::json!({
                    "firstName": $first,
                    "lastName": $last,
                    "mobileNumber": $mobile,
                }))
        );
        assert_eq!(status, 201, "unexpected body: {}", body);
        body["data"]["id"].as_str().unwrap().to_string()
    }};
}
