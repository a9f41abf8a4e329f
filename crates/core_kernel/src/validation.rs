//! Pure validation primitives for form input and image files
//!
//! Every predicate here is a total function with no side effects; the only
//! failure mode is returning `false`. Validation failures never reach the
//! network layer - callers block the action and surface inline messages.

/// Maximum accepted image size in bytes (5 MiB)
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Media types accepted for damage photos
pub const ACCEPTED_IMAGE_TYPES: [&str; 4] =
    ["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Password strength classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

/// Returns true iff the trimmed value is non-empty
pub fn is_required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Returns true iff the value has a simple `local@domain.tld` shape
///
/// Exactly one `@`, no whitespace, a non-empty local part, and a domain
/// containing an interior dot with non-empty runs on either side. This is
/// deliberately not full RFC compliance.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len(),
        None => false,
    }
}

/// Returns true iff the password is at least 8 characters with at least one
/// uppercase letter, one lowercase letter, and one digit
pub fn is_strong_password(value: &str) -> bool {
    value.chars().count() >= 8
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_digit())
}

/// Classifies a password as weak, medium, or strong
pub fn password_strength(value: &str) -> PasswordStrength {
    if value.chars().count() < 6 {
        PasswordStrength::Weak
    } else if is_strong_password(value) {
        PasswordStrength::Strong
    } else {
        PasswordStrength::Medium
    }
}

/// Returns true iff the declared media type is an accepted image format and
/// the size does not exceed [`MAX_IMAGE_BYTES`]
pub fn is_valid_image_file(content_type: &str, size_bytes: u64) -> bool {
    ACCEPTED_IMAGE_TYPES.contains(&content_type) && size_bytes <= MAX_IMAGE_BYTES
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_is_required() {
        assert!(is_required("Ford"));
        assert!(is_required(" x "));
        assert!(!is_required(""));
        assert!(!is_required("   "));
        assert!(!is_required("\t\n"));
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("user.name@example.co.uk"));
        assert!(is_valid_email("UPPER@CASE.ORG"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@no-local.com"));
        assert!(!is_valid_email("two@@ats.com"));
        assert!(!is_valid_email("spaces in@local.com"));
        assert!(!is_valid_email("dot@.start"));
        assert!(!is_valid_email("dot@end."));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_password_strength_boundaries() {
        assert_eq!(password_strength("abc"), PasswordStrength::Weak);
        assert_eq!(password_strength("abcde"), PasswordStrength::Weak);
        assert_eq!(password_strength("abcdef"), PasswordStrength::Medium);
        assert_eq!(password_strength("abcdefgh"), PasswordStrength::Medium);
        assert_eq!(password_strength("Abcdefg1"), PasswordStrength::Strong);
    }

    #[test]
    fn test_is_strong_password() {
        assert!(is_strong_password("Abcdefg1"));
        assert!(!is_strong_password("Abcdef1")); // too short
        assert!(!is_strong_password("abcdefg1")); // no uppercase
        assert!(!is_strong_password("ABCDEFG1")); // no lowercase
        assert!(!is_strong_password("Abcdefgh")); // no digit
    }

    #[test]
    fn test_image_file_validation() {
        assert!(is_valid_image_file("image/jpeg", 1024));
        assert!(is_valid_image_file("image/png", MAX_IMAGE_BYTES));
        assert!(is_valid_image_file("image/webp", 0));
        assert!(!is_valid_image_file("image/png", MAX_IMAGE_BYTES + 1));
        assert!(!is_valid_image_file("image/gif", 1024));
        assert!(!is_valid_image_file("application/pdf", 1024));
    }

    proptest! {
        #[test]
        fn prop_is_required_matches_trim(s in ".*") {
            prop_assert_eq!(is_required(&s), !s.trim().is_empty());
        }

        #[test]
        fn prop_strong_passwords_classify_strong(
            upper in "[A-Z]{1,4}",
            lower in "[a-z]{1,8}",
            digit in "[0-9]{1,4}",
        ) {
            let candidate = format!("{upper}{lower}{digit}");
            prop_assume!(candidate.len() >= 8);
            prop_assert_eq!(password_strength(&candidate), PasswordStrength::Strong);
        }
    }
}
