//! Main verification service implementation

use std::sync::Arc;

use chrono::Duration;
use mv_shared::utils::phone::{mask_phone_number, normalize_phone_number, with_country_prefix};
use uuid::Uuid;

use crate::domain::entities::message::ArchivedMessage;
use crate::domain::entities::user::User;
use crate::domain::entities::verification_session::VerificationSession;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{MessageRepository, UserRepository, VerificationRepository};

use super::config::VerificationServiceConfig;
use super::locks::KeyedLocks;
use super::traits::SmsServiceTrait;
use super::types::{IssueOtpResult, VerifyOtpResult};

/// Verification service driving the OTP lifecycle
///
/// Issue, resend and verify for the same mobile number are serialised by a
/// per-number lock. Steps that span the session store, the SMS channel and
/// the user directory are undone when a later step fails.
pub struct VerificationService<S, U, V, M>
where
    S: SmsServiceTrait,
    U: UserRepository,
    V: VerificationRepository,
    M: MessageRepository,
{
    sms_service: Arc<S>,
    user_repository: Arc<U>,
    verification_repository: Arc<V>,
    message_repository: Arc<M>,
    config: VerificationServiceConfig,
    locks: KeyedLocks,
}

impl<S, U, V, M> VerificationService<S, U, V, M>
where
    S: SmsServiceTrait,
    U: UserRepository,
    V: VerificationRepository,
    M: MessageRepository,
{
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `sms_service` - Outbound SMS channel
    /// * `user_repository` - User directory
    /// * `verification_repository` - Pending session store
    /// * `message_repository` - Archive of dispatched bodies
    /// * `config` - Service configuration
    pub fn new(
        sms_service: Arc<S>,
        user_repository: Arc<U>,
        verification_repository: Arc<V>,
        message_repository: Arc<M>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            sms_service,
            user_repository,
            verification_repository,
            message_repository,
            config,
            locks: KeyedLocks::default(),
        }
    }

    pub fn config(&self) -> &VerificationServiceConfig {
        &self.config
    }

    /// Issue an OTP to a registered user
    ///
    /// This method:
    /// 1. Resolves the user and the number to verify
    /// 2. Rejects the request while an unexpired session exists
    /// 3. Creates a session with a fresh OTP
    /// 4. Sends the OTP via SMS, removing the session again on failure
    /// 5. Archives the dispatched body
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user whose number is being verified
    /// * `mobile_number` - Optional number; must match the registered one
    /// * `client_otp` - Caller-supplied OTP, only honoured when enabled
    pub async fn issue_otp(
        &self,
        user_id: Uuid,
        mobile_number: Option<&str>,
        client_otp: Option<&str>,
    ) -> DomainResult<IssueOtpResult> {
        let user = self.resolve_user(user_id, mobile_number).await?;
        let _guard = self.locks.acquire(&user.mobile_number).await;

        if let Some(existing) = self
            .verification_repository
            .find_by_mobile(&user.mobile_number)
            .await?
        {
            if !existing.is_expired() {
                tracing::info!(
                    mobile = %mask_phone_number(&user.mobile_number),
                    event = "otp_already_pending",
                    "Rejected issue while a session is pending"
                );
                return Err(DomainError::conflict(
                    "An OTP is already pending for this mobile number, use resend instead",
                ));
            }

            self.verification_repository
                .delete_by_mobile(&user.mobile_number)
                .await?;
        }

        self.issue_locked(&user, client_otp).await
    }

    /// Replace the pending session with a new one and send the new OTP
    ///
    /// Fails with `NotFound` when nothing is pending for the number.
    pub async fn resend_otp(
        &self,
        user_id: Uuid,
        mobile_number: Option<&str>,
        client_otp: Option<&str>,
    ) -> DomainResult<IssueOtpResult> {
        let user = self.resolve_user(user_id, mobile_number).await?;
        let _guard = self.locks.acquire(&user.mobile_number).await;

        if !self
            .verification_repository
            .delete_by_mobile(&user.mobile_number)
            .await?
        {
            return Err(DomainError::NotFound {
                message: "User verification record not found".to_string(),
            });
        }

        tracing::info!(
            user_id = %user.id,
            mobile = %mask_phone_number(&user.mobile_number),
            event = "otp_resend",
            "Replacing pending session"
        );

        self.issue_locked(&user, client_otp).await
    }

    /// Verify an entered OTP against the pending session for a number
    ///
    /// # Returns
    ///
    /// * `Ok(VerifyOtpResult)` - Code matched; session removed, user flagged
    /// * `Err(DomainError::NotFound)` - Nothing pending for the number
    /// * `Err(DomainError::OtpExpired)` - Session expired and was removed
    /// * `Err(DomainError::IncorrectOtp)` - Mismatch; session kept
    /// * `Err(DomainError::TooManyAttempts)` - Budget exhausted; session removed
    pub async fn verify_otp(
        &self,
        mobile_number: &str,
        entered_otp: &str,
    ) -> DomainResult<VerifyOtpResult> {
        let mobile_number = normalize_phone_number(mobile_number);
        let masked = mask_phone_number(&mobile_number);
        let _guard = self.locks.acquire(&mobile_number).await;

        let mut session = self
            .verification_repository
            .find_by_mobile(&mobile_number)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                message: "User verification record not found".to_string(),
            })?;

        if session.is_expired() {
            self.verification_repository
                .delete_by_mobile(&mobile_number)
                .await?;
            tracing::info!(mobile = %masked, event = "otp_expired", "Expired session removed");
            return Err(DomainError::OtpExpired);
        }

        if !session.matches(entered_otp) {
            return self.record_mismatch(&mut session).await;
        }

        self.verification_repository
            .delete_by_mobile(&mobile_number)
            .await?;

        let user_verified = match self
            .user_repository
            .mark_verified_by_mobile(&mobile_number)
            .await
        {
            Ok(flagged) => flagged,
            Err(e) => {
                tracing::error!(
                    mobile = %masked,
                    error = %e,
                    event = "verify_flag_failed",
                    "Failed to flag user as verified, restoring session"
                );
                if let Err(restore_err) = self.verification_repository.create(session).await {
                    tracing::error!(
                        mobile = %masked,
                        error = %restore_err,
                        event = "session_restore_failed",
                        "Failed to restore verification session"
                    );
                }
                return Err(DomainError::internal(format!(
                    "Failed to update verification status: {}",
                    e
                )));
            }
        };

        if user_verified {
            tracing::info!(mobile = %masked, event = "otp_verified", "Mobile number verified");
        } else {
            tracing::warn!(
                mobile = %masked,
                event = "otp_verified_without_user",
                "OTP matched but no user is registered with this number"
            );
        }

        Ok(VerifyOtpResult {
            mobile_number,
            user_verified,
        })
    }

    async fn resolve_user(&self, user_id: Uuid, mobile_number: Option<&str>) -> DomainResult<User> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        if let Some(supplied) = mobile_number.map(normalize_phone_number) {
            if !supplied.is_empty() && supplied != user.mobile_number {
                return Err(DomainError::validation(
                    "Mobile number does not match the user's registered number",
                ));
            }
        }

        Ok(user)
    }

    /// Create the session, dispatch, archive. Caller holds the number's lock
    /// and has cleared any previous session.
    async fn issue_locked(&self, user: &User, client_otp: Option<&str>) -> DomainResult<IssueOtpResult> {
        let otp = self.choose_otp(client_otp)?;
        let session = VerificationSession::new(
            user.mobile_number.clone(),
            otp,
            Duration::minutes(self.config.ttl_minutes),
        );
        let session = self.verification_repository.create(session).await?;

        let destination = with_country_prefix(&self.config.country_prefix, &user.mobile_number);
        let masked = mask_phone_number(&destination);
        let body = format!("Your mobile verification otp is {}", session.otp);

        let dispatch = tokio::time::timeout(
            self.config.dispatch_timeout,
            self.sms_service.send_sms(&destination, &body),
        )
        .await
        .unwrap_or_else(|_| {
            Err(format!(
                "SMS dispatch timed out after {}s",
                self.config.dispatch_timeout.as_secs()
            ))
        });

        let message_id = match dispatch {
            Ok(id) => id,
            Err(e) => {
                tracing::error!(
                    destination = %masked,
                    error = %e,
                    event = "otp_dispatch_failed",
                    "Failed to send OTP, removing session"
                );
                if let Err(cleanup_err) = self
                    .verification_repository
                    .delete_by_mobile(&user.mobile_number)
                    .await
                {
                    tracing::error!(
                        destination = %masked,
                        error = %cleanup_err,
                        event = "session_cleanup_failed",
                        "Failed to remove session after dispatch failure"
                    );
                }
                return Err(DomainError::DispatchFailed { message: e });
            }
        };

        tracing::info!(
            user_id = %user.id,
            destination = %masked,
            message_id = %message_id,
            event = "otp_sent",
            "OTP dispatched"
        );

        // The SMS is out; an archive failure must not undo the session
        if let Err(e) = self
            .message_repository
            .create(ArchivedMessage::new(body, user.id))
            .await
        {
            tracing::error!(
                user_id = %user.id,
                error = %e,
                event = "message_archive_failed",
                "Failed to archive dispatched message"
            );
        }

        Ok(IssueOtpResult {
            destination: masked,
            message_id,
            expires_at: session.expires_at,
        })
    }

    fn choose_otp(&self, client_otp: Option<&str>) -> DomainResult<String> {
        match client_otp.map(str::trim).filter(|otp| !otp.is_empty()) {
            Some(otp) if self.config.accept_client_otp => {
                if otp.len() < 4 || otp.len() > 10 || !otp.chars().all(|c| c.is_ascii_digit()) {
                    return Err(DomainError::validation("OTP must be 4 to 10 digits"));
                }
                Ok(otp.to_string())
            }
            _ => Ok(VerificationSession::generate_otp(self.config.otp_length)),
        }
    }

    async fn record_mismatch(&self, session: &mut VerificationSession) -> DomainResult<VerifyOtpResult> {
        let attempts = session.record_failed_attempt();
        let masked = mask_phone_number(&session.mobile_number);
        let remaining = session.remaining_attempts(self.config.max_attempts);

        if remaining == Some(0) {
            self.verification_repository
                .delete_by_mobile(&session.mobile_number)
                .await?;
            tracing::warn!(
                mobile = %masked,
                attempts = attempts,
                event = "otp_attempts_exhausted",
                "Attempt budget exhausted, session removed"
            );
            return Err(DomainError::TooManyAttempts);
        }

        self.verification_repository
            .update_attempts(&session.mobile_number, attempts)
            .await?;

        tracing::info!(
            mobile = %masked,
            attempts = attempts,
            event = "otp_mismatch",
            "Incorrect OTP entered"
        );

        Err(DomainError::IncorrectOtp {
            remaining_attempts: remaining,
        })
    }
}
