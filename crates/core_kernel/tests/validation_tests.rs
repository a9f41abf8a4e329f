//! Validation primitive tests
//!
//! Exercises the documented behavior of the form and file predicates.

use core_kernel::validation::{
    is_required, is_strong_password, is_valid_email, is_valid_image_file, password_strength,
    MAX_IMAGE_BYTES,
};
use core_kernel::PasswordStrength;

#[test]
fn email_accepts_simple_shape() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("claims.adjuster@insurer.example.org"));
}

#[test]
fn email_rejects_malformed_input() {
    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("user@domain"));
    assert!(!is_valid_email("user name@domain.com"));
    assert!(!is_valid_email("user@"));
    assert!(!is_valid_email("@domain.com"));
}

#[test]
fn password_strength_tiers() {
    assert_eq!(password_strength("abc"), PasswordStrength::Weak);
    assert_eq!(password_strength("abcdefgh"), PasswordStrength::Medium);
    assert_eq!(password_strength("Abcdefg1"), PasswordStrength::Strong);
}

#[test]
fn strong_password_requires_all_character_classes() {
    assert!(is_strong_password("Xyzzy123"));
    assert!(!is_strong_password("xyzzy123"));
    assert!(!is_strong_password("XYZZY123"));
    assert!(!is_strong_password("Xyzzyabc"));
    assert!(!is_strong_password("Xy1"));
}

#[test]
fn required_trims_whitespace() {
    assert!(is_required("Mustang"));
    assert!(!is_required("  \t "));
}

#[test]
fn image_file_limits() {
    assert!(is_valid_image_file("image/webp", MAX_IMAGE_BYTES));
    assert!(!is_valid_image_file("image/webp", MAX_IMAGE_BYTES + 1));
    assert!(!is_valid_image_file("video/mp4", 10));
}
