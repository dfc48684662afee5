//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// National subscriber number as registered by clients (digits only)
static MOBILE_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{6,15}$").expect("mobile number regex is valid")
});

// International phone number regex (E.164 format)
static INTERNATIONAL_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{1,14}$").expect("E.164 regex is valid")
});

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a registered mobile number is well formed (6-15 digits, no prefix)
pub fn is_valid_mobile_number(phone: &str) -> bool {
    MOBILE_NUMBER_REGEX.is_match(phone)
}

/// Check if a phone number is valid (international E.164 format)
pub fn is_valid_international_phone(phone: &str) -> bool {
    INTERNATIONAL_PHONE_REGEX.is_match(&normalize_phone_number(phone))
}

/// Build the dialable destination for a registered number.
///
/// The prefix is applied to every number that does not already carry a
/// leading `+`.
pub fn with_country_prefix(prefix: &str, mobile_number: &str) -> String {
    let normalized = normalize_phone_number(mobile_number);
    if normalized.starts_with('+') {
        normalized
    } else {
        format!("{}{}", prefix, normalized)
    }
}

/// Mask a phone number for logs and responses (e.g., +91******3210)
pub fn mask_phone_number(phone: &str) -> String {
    let count = phone.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }

    let visible: String = phone.chars().skip(count - 4).collect();
    if let Some(rest) = phone.strip_prefix('+') {
        let hidden = rest.chars().count() - 4;
        let cc_len = hidden.min(2);
        let cc: String = rest.chars().take(cc_len).collect();
        format!("+{}{}{}", cc, "*".repeat(hidden - cc_len), visible)
    } else {
        format!("{}{}", "*".repeat(count - 4), visible)
    }
}
