//! Unit tests for SMS module

mod adapter_tests;
#[cfg(feature = "twilio-sms")]
mod twilio_tests;
