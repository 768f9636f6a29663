//! Local credential validation, run before any network call.

use crate::error::{AuthError, CredentialField};

/// Check the email shape: exactly one `@`, a non-empty local part, a
/// domain with an interior dot, and no whitespace. This is a form
/// check, not RFC 5322 — the endpoint stays authoritative.
pub fn validate_email(email: &str) -> Result<(), AuthError> {
    let invalid = |message: &str| AuthError::Validation {
        field: CredentialField::Email,
        message: message.to_string(),
    };

    if email.is_empty() {
        return Err(invalid("email is required"));
    }
    if email.chars().any(char::is_whitespace) {
        return Err(invalid("email must not contain whitespace"));
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(invalid("email must contain exactly one '@'")),
    };

    if local.is_empty() {
        return Err(invalid("email is missing the part before '@'"));
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid("email domain looks incomplete"));
    }

    Ok(())
}

/// Enforce the minimum password length.
pub fn validate_password(password: &str, min_length: usize) -> Result<(), AuthError> {
    if password.chars().count() < min_length {
        return Err(AuthError::Validation {
            field: CredentialField::Password,
            message: format!("password must be at least {min_length} characters"),
        });
    }
    Ok(())
}

/// Validate both credential fields, email first.
pub fn validate_credentials(
    email: &str,
    password: &str,
    min_password_length: usize,
) -> Result<(), AuthError> {
    validate_email(email)?;
    validate_password(password, min_password_length)
}
