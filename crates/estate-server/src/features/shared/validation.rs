//! Input validation rules
//!
//! Commands validate before touching the store and surface the first broken
//! rule as an unsuccessful response envelope. Messages name the field with
//! its public (PascalCase) spelling so clients can map them back to inputs.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} must be a valid email address")]
    Email { field: &'static str },

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("{field} must be one of: {allowed}")]
    NotAllowed {
        field: &'static str,
        allowed: &'static str,
    },
}

pub fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required { field })
    } else {
        Ok(())
    }
}

pub fn max_length(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        Err(ValidationError::TooLong { field, max })
    } else {
        Ok(())
    }
}

/// Loose structural check: one `@` with something on both sides and a dot in
/// the domain part
pub fn email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(ValidationError::Email { field });
    }
    Ok(())
}

pub fn positive(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value <= 0 {
        Err(ValidationError::NotPositive { field })
    } else {
        Ok(())
    }
}

pub fn one_of(
    field: &'static str,
    value: &str,
    allowed: &'static [&'static str],
    allowed_display: &'static str,
) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::NotAllowed {
            field,
            allowed: allowed_display,
        })
    }
}
