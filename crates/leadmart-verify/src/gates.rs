//! Pass/fail predicates a record must satisfy to reach the output.

use regex::Regex;

/// Full-string email check against the configured (pre-anchored) pattern.
///
/// No normalization is attempted: a sentinel like `"INVALID_EMAIL"` or
/// `"no email found"` fails the match like any other non-address string.
#[must_use]
pub fn email_is_valid(pattern: &Regex, email: &str) -> bool {
    pattern.is_match(email)
}

/// Strip every non-digit character from a phone field.
#[must_use]
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Digit-count check on the stripped phone. The canonical digit-only value
/// is only ever compared, never persisted; the formatted original stays in
/// the record.
#[must_use]
pub fn phone_is_valid(phone: &str, min_digits: usize) -> bool {
    phone_digits(phone).len() >= min_digits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchored(pattern: &str) -> Regex {
        Regex::new(&format!("^(?:{pattern})$")).unwrap()
    }

    #[test]
    fn email_accepts_plain_address() {
        let re = anchored(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}");
        assert!(email_is_valid(&re, "info@brightstarco.com"));
    }

    #[test]
    fn email_rejects_sentinels_without_special_casing() {
        let re = anchored(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}");
        assert!(!email_is_valid(&re, "INVALID_EMAIL"));
        assert!(!email_is_valid(&re, "no email found"));
        assert!(!email_is_valid(&re, ""));
    }

    #[test]
    fn email_rejects_embedded_address() {
        let re = anchored(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}");
        assert!(!email_is_valid(&re, "write to info@brightstarco.com today"));
    }

    #[test]
    fn phone_digits_strips_formatting() {
        assert_eq!(phone_digits("+1 555-123-4567"), "15551234567");
        assert_eq!(phone_digits("(555) 123.4567"), "5551234567");
        assert_eq!(phone_digits("no phone"), "");
    }

    #[test]
    fn phone_gate_compares_digit_count() {
        assert!(!phone_is_valid("123", 5));
        assert!(phone_is_valid("+1 555-123-4567", 10));
        assert!(!phone_is_valid("99", 3));
    }
}
