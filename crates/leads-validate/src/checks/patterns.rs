//! Email and phone format checks.

use std::sync::LazyLock;

use regex::Regex;

/// Local part, `@`, then dot-separated labels ending in an alphabetic TLD.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("Invalid email regex")
});

/// 10 to 15 ASCII digits, nothing else.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,15}$").expect("Invalid phone regex"));

pub fn is_email(value: &str) -> bool {
    // The regex crate has no lookahead; leading and doubled dots are checked here.
    !value.starts_with('.') && !value.contains("..") && EMAIL_REGEX.is_match(value)
}

pub fn is_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_email("jane@example.com"));
        assert!(is_email("jane.doe+leads@mail.example.co.in"));
        assert!(!is_email("jane"));
        assert!(!is_email("jane@"));
        assert!(!is_email("jane@example"));
        assert!(!is_email(".jane@example.com"));
        assert!(!is_email("jane..doe@example.com"));
        assert!(!is_email("jane doe@example.com"));
    }

    #[test]
    fn test_phone() {
        assert!(is_phone("9876543210"));
        assert!(is_phone("919876543210123"));
        assert!(!is_phone("987654321"));
        assert!(!is_phone("9198765432101234"));
        assert!(!is_phone("+919876543210"));
        assert!(!is_phone("98765 43210"));
        assert!(!is_phone("٩٨٧٦٥٤٣٢١٠"));
    }
}
