//! Inline form validation helpers.
//!
//! Validation happens before any request is issued; errors render next to
//! the offending field rather than as toasts.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Validate and normalize an email address.
///
/// # Errors
///
/// Returns the inline message to show under the field.
pub fn validate_email(email: &str) -> Result<String, &'static str> {
    const MESSAGE: &str = "Please enter a valid email address";
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return Err(MESSAGE);
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || email.contains(char::is_whitespace) {
        return Err(MESSAGE);
    }
    Ok(email.to_owned())
}

/// Validate a password against the minimum length.
///
/// # Errors
///
/// Returns the inline message to show under the field.
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 6 {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

/// Validate that the confirmation matches the password.
///
/// # Errors
///
/// Returns the inline message to show under the field.
pub fn validate_password_confirmation(password: &str, confirmation: &str) -> Result<(), &'static str> {
    if confirmation.len() < 6 {
        return Err("Please confirm your password");
    }
    if password != confirmation {
        return Err("Passwords don't match");
    }
    Ok(())
}

/// Validate a required free-text field with a minimum length.
///
/// # Errors
///
/// Returns the supplied inline message.
pub fn validate_min_len(value: &str, min: usize, message: &'static str) -> Result<String, &'static str> {
    let value = value.trim();
    if value.len() < min {
        return Err(message);
    }
    Ok(value.to_owned())
}

/// Validate an optional website URL; empty input is accepted.
///
/// # Errors
///
/// Returns the inline message to show under the field.
pub fn validate_optional_url(value: &str) -> Result<Option<String>, &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(Some(value.to_owned()))
    } else {
        Err("Please enter a valid URL")
    }
}

/// Validate an optional email field; empty input is accepted.
///
/// # Errors
///
/// Returns the inline message to show under the field.
pub fn validate_optional_email(value: &str) -> Result<Option<String>, &'static str> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    validate_email(value).map(Some).map_err(|_| "Please enter a valid email")
}
