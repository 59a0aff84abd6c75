use crate::{error::ValidationError, state::FormValues};

/// Returns true if `value` holds something other than whitespace.
pub fn validate_presence(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Returns true if `value` has the `localpart@domain.tld` shape.
///
/// Display names (`Jane <a@b.com>`) and domain literals (`a@[127.0.0.1]`)
/// are refused: the value is sent as is, so it must be a bare address.
pub fn valid_email(value: &str) -> bool {
    email_address::EmailAddress::parse_with_options(
        value,
        email_address::Options::default()
            .with_required_tld()
            .without_display_text()
            .without_domain_literal(),
    )
    .is_ok()
}

/// Checks the form values, first failing rule wins.
///
/// Only the email is checked: name and role are accepted as is.
pub fn validate(values: &FormValues) -> Result<(), ValidationError> {
    if !validate_presence(&values.email) {
        return Err(ValidationError::EmailMissing);
    }

    if !valid_email(&values.email) {
        return Err(ValidationError::InvalidEmail(values.email.clone()));
    }

    Ok(())
}
