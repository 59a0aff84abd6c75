use serde::Serialize;
use std::{fmt::Display, str::FromStr};
use uuid::Uuid;

/// Role picked in the radio group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Value carried by the radio button.
    pub fn as_value(&self) -> &'static str {
        match self {
            Self::User => "false",
            Self::Admin => "true",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "USER (default)",
            Self::Admin => "ADMIN",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role value: {0}")]
pub struct ParseRoleError(String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "false" => Ok(Self::User),
            "true" => Ok(Self::Admin),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Admin,
}

/// A new value for one of the form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Name(String),
    Email(String),
    Admin(Role),
}

impl FieldChange {
    pub fn field(&self) -> Field {
        match self {
            Self::Name(_) => Field::Name,
            Self::Email(_) => Field::Email,
            Self::Admin(_) => Field::Admin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub admin: Role,
}

/// Error slot of each field, `None` when the field is clean.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub admin: Option<String>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Admin => self.admin.as_deref(),
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Admin => &mut self.admin,
        }
    }
}

/// Editable state of the form. Every transition consumes the current value
/// and returns the next one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub values: FormValues,
    pub errors: FieldErrors,
}

impl FormState {
    /// Applies `change` and clears the error of the changed field.
    pub fn with_change(mut self, change: FieldChange) -> Self {
        *self.errors.slot(change.field()) = None;
        match change {
            FieldChange::Name(name) => self.values.name = name,
            FieldChange::Email(email) => self.values.email = email,
            FieldChange::Admin(role) => self.values.admin = role,
        }
        self
    }

    /// Replaces the error slot of `field`.
    pub fn with_error(mut self, field: Field, error: Option<String>) -> Self {
        *self.errors.slot(field) = error;
        self
    }

    pub fn payload(&self, invited_by: Uuid) -> SubmissionPayload {
        SubmissionPayload {
            name: self.values.name.clone(),
            email: self.values.email.clone(),
            admin: self.values.admin.is_admin(),
            invited_by,
        }
    }
}

/// Data handed to the owner of the form once it validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub admin: bool,
    pub invited_by: Uuid,
}
