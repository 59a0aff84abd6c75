use thiserror::Error;

/// Validation failures detected locally by the form. The `Display` output is
/// the message shown under the email input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email field must be completed")]
    EmailMissing,
    #[error("{0} is not a valid email")]
    InvalidEmail(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::EmailMissing.to_string(),
            "Email field must be completed"
        );
        assert_eq!(
            ValidationError::InvalidEmail("foo@bar".to_string()).to_string(),
            "foo@bar is not a valid email"
        );
    }
}
