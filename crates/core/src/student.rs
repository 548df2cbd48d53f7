//! Student record validation.

use crate::error::CoreError;

/// Maximum length for a student's display name.
pub const MAX_STUDENT_NAME_LENGTH: usize = 200;

pub fn validate_student_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidInput(
            "Student name must not be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_STUDENT_NAME_LENGTH {
        return Err(CoreError::InvalidInput(format!(
            "Student name exceeds maximum length of {MAX_STUDENT_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Shallow shape check: one `@` with text on both sides.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(CoreError::InvalidInput(format!(
            "Invalid email address '{email}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_name_required() {
        assert!(validate_student_name("").is_err());
        assert!(validate_student_name("Grace").is_ok());
    }

    #[test]
    fn test_email_shape() {
        assert!(validate_email("a@b.io").is_ok());
        assert!(validate_email("ab.io").is_err());
        assert!(validate_email("@b.io").is_err());
        assert!(validate_email("a@b@c.io").is_err());
        assert!(validate_email("a@localhost").is_err());
    }
}
