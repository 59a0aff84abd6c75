//! Invite-user dialog: collects a name, an email and a role, validates the
//! email on submit and hands a [`SubmissionPayload`] to its owner.

pub mod error;
pub mod models;
pub mod state;
pub mod validation;
pub mod views;

pub use error::ValidationError;
pub use models::User;
pub use state::{Action, InviteUserForm, Message, Role, SubmissionPayload};
