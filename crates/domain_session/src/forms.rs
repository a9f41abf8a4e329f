//! Auth form validation
//!
//! Field-level checks for the login and signup screens. Validation failures
//! never reach the network layer; the caller blocks the submit action and
//! renders the messages inline.

use core_kernel::validation::{is_required, is_valid_email};

use crate::user::UserRole;

/// A validation message attached to one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Outcome of validating a form
#[derive(Debug, Clone, Default)]
pub struct FormValidation {
    pub errors: Vec<FieldError>,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message for a field, if it failed
    pub fn error_for(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    fn add(&mut self, field: &'static str, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }
}

/// Login screen input
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> FormValidation {
        let mut result = FormValidation::default();
        if !is_required(&self.email) {
            result.add("email", "Email is required");
        } else if !is_valid_email(&self.email) {
            result.add("email", "Please enter a valid email");
        }
        if !is_required(&self.password) {
            result.add("password", "Password is required");
        }
        result
    }
}

/// Signup screen input
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: UserRole,
    pub agreed: bool,
}

impl SignupForm {
    pub fn validate(&self) -> FormValidation {
        let mut result = FormValidation::default();
        if !is_required(&self.name) {
            result.add("name", "Name is required");
        }
        if !is_required(&self.email) {
            result.add("email", "Email is required");
        } else if !is_valid_email(&self.email) {
            result.add("email", "Please enter a valid email");
        }
        if !is_required(&self.password) {
            result.add("password", "Password is required");
        } else if self.password.chars().count() < 6 {
            result.add("password", "Password must be at least 6 characters");
        }
        if self.password != self.confirm_password {
            result.add("confirm_password", "Passwords do not match");
        }
        if !self.agreed {
            result.add("agreed", "You must agree to the terms and conditions");
        }
        result
    }
}
