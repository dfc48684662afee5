//! Verification session entity pairing a mobile number with its current OTP.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use uuid::Uuid;

/// Default number of digits in a generated OTP
pub const DEFAULT_OTP_LENGTH: usize = 6;

/// Default lifetime of a verification session
pub const DEFAULT_TTL_MINUTES: i64 = 10;

/// Transient record used to validate a verification attempt.
///
/// There is at most one session per mobile number; the session is the sole
/// source of truth for OTP comparison.
#[derive(Clone, PartialEq, Eq)]
pub struct VerificationSession {
    pub id: Uuid,

    /// Mobile number as registered, without country prefix
    pub mobile_number: String,

    /// The issued one-time passcode
    pub otp: String,

    /// Number of failed comparisons so far
    pub attempts: u32,

    pub created_at: DateTime<Utc>,

    pub expires_at: DateTime<Utc>,
}

impl VerificationSession {
    /// Creates a session for `mobile_number` holding `otp`, valid for `ttl`
    pub fn new(mobile_number: String, otp: String, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            mobile_number,
            otp,
            attempts: 0,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// Generates a numeric OTP of `length` digits from the OS CSPRNG
    pub fn generate_otp(length: usize) -> String {
        let mut rng = OsRng;
        (0..length)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Exact string comparison against the stored OTP, in constant time
    pub fn matches(&self, entered_otp: &str) -> bool {
        self.otp.len() == entered_otp.len()
            && constant_time_eq(self.otp.as_bytes(), entered_otp.as_bytes())
    }

    /// Records a failed comparison and returns the new attempt count
    pub fn record_failed_attempt(&mut self) -> u32 {
        self.attempts = self.attempts.saturating_add(1);
        self.attempts
    }

    /// Attempts left before the budget is exhausted; `None` when unlimited
    pub fn remaining_attempts(&self, max_attempts: Option<u32>) -> Option<u32> {
        max_attempts.map(|max| max.saturating_sub(self.attempts))
    }
}

impl std::fmt::Debug for VerificationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationSession")
            .field("id", &self.id)
            .field("mobile_number", &self.mobile_number)
            .field("otp", &"<redacted>")
            .field("attempts", &self.attempts)
            .field("created_at", &self.created_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
