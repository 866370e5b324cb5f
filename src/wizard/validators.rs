//! Field-level format checks and the input sanitizers applied on every edit.
//!
//! Validators are pure predicates: malformed input yields `false`, never an
//! error or a panic.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled on first use; `None` only if the pattern itself were invalid,
/// which fails every match instead of panicking.
type Pattern = LazyLock<Option<Regex>>;

static EMAIL: Pattern = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());
static PHONE: Pattern = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").ok());
static ZIP: Pattern = LazyLock::new(|| Regex::new(r"^[0-9]{6}$").ok());
static CARD_NUMBER: Pattern = LazyLock::new(|| Regex::new(r"^[0-9]{16}$").ok());
static CVC: Pattern = LazyLock::new(|| Regex::new(r"^[0-9]{3}$").ok());

pub const PHONE_DIGITS: usize = 10;
pub const ZIP_DIGITS: usize = 6;
pub const CARD_NUMBER_DIGITS: usize = 16;
pub const CVC_DIGITS: usize = 3;

fn matches(pattern: &Pattern, value: &str) -> bool {
    LazyLock::force(pattern)
        .as_ref()
        .is_some_and(|regex| regex.is_match(value))
}

/// Basic `local@domain.tld` shape check.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    matches(&EMAIL, email)
}

#[must_use]
pub fn validate_phone(phone: &str) -> bool {
    matches(&PHONE, phone)
}

#[must_use]
pub fn validate_zip(zip: &str) -> bool {
    matches(&ZIP, zip)
}

#[must_use]
pub fn validate_card_number(card_number: &str) -> bool {
    matches(&CARD_NUMBER, card_number)
}

#[must_use]
pub fn validate_cvc(cvc: &str) -> bool {
    matches(&CVC, cvc)
}

/// Drop every non-digit character and keep at most `max_len` digits.
#[must_use]
pub fn digits_only(value: &str, max_len: usize) -> String {
    value
        .chars()
        .filter(char::is_ascii_digit)
        .take(max_len)
        .collect()
}

/// Free-text fields are stored trimmed.
#[must_use]
pub fn clean_text(value: &str) -> String {
    value.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_compiles() {
        for pattern in [&EMAIL, &PHONE, &ZIP, &CARD_NUMBER, &CVC] {
            assert!(LazyLock::force(pattern).is_some());
        }
    }

    #[test]
    fn email_accepts_basic_shape() {
        assert!(validate_email("jane@example.com"));
        assert!(validate_email("a.b+c@mail.example.co"));
    }

    #[test]
    fn email_rejects_malformed() {
        for email in [
            "",
            "jane",
            "jane@",
            "jane@example",
            "@example.com",
            "jane doe@example.com",
            "jane@@example.com",
            "jane@example .com",
        ] {
            assert!(!validate_email(email), "{email:?} should be rejected");
        }
    }

    #[test]
    fn phone_requires_exactly_ten_digits() {
        assert!(validate_phone("5551234567"));
        assert!(validate_phone("0000000000"));

        for phone in [
            "",
            "5551234",
            "55512345678",
            "555123456a",
            "555-123-4567",
            " 5551234567",
            "５５５１２３４５６７",
        ] {
            assert!(!validate_phone(phone), "{phone:?} should be rejected");
        }
    }

    #[test]
    fn phone_holds_for_every_ten_digit_string() {
        for seed in (0u64..10_000_000_000).step_by(999_999_937) {
            let phone = format!("{seed:010}");
            assert!(validate_phone(&phone), "{phone}");
        }
    }

    #[test]
    fn zip_requires_exactly_six_digits() {
        assert!(validate_zip("110001"));
        for zip in ["", "11000", "1100011", "11000a", "110 01"] {
            assert!(!validate_zip(zip), "{zip:?} should be rejected");
        }
        for seed in (0u32..1_000_000).step_by(99_991) {
            assert!(validate_zip(&format!("{seed:06}")));
        }
    }

    #[test]
    fn card_number_and_cvc_lengths() {
        assert!(validate_card_number("4111111111111111"));
        assert!(!validate_card_number("411111111111111"));
        assert!(!validate_card_number("41111111111111112"));
        assert!(!validate_card_number("4111 1111 1111 1111"));

        assert!(validate_cvc("123"));
        assert!(!validate_cvc("12"));
        assert!(!validate_cvc("1234"));
        assert!(!validate_cvc("12a"));
    }

    #[test]
    fn digits_only_strips_and_truncates() {
        assert_eq!(digits_only("555-123-4567", PHONE_DIGITS), "5551234567");
        assert_eq!(
            digits_only("12345678901234567", CARD_NUMBER_DIGITS),
            "1234567890123456"
        );
        assert_eq!(digits_only("1a2b3c4", CVC_DIGITS), "123");
        assert_eq!(digits_only("abc", ZIP_DIGITS), "");
    }

    #[test]
    fn clean_text_trims() {
        assert_eq!(clean_text("  Jane  "), "Jane");
        assert_eq!(clean_text("   "), "");
    }
}
