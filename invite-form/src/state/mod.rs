use crate::models::User;
use admin_ui::widget::text_input;
use iced::Task;

pub use form::{
    Field, FieldChange, FieldErrors, FormState, FormValues, ParseRoleError, Role,
    SubmissionPayload,
};
pub use message::{Action, Message, Msg};

pub mod form;
pub mod message;
pub mod update;

/// Id of the name input, focused when the dialog opens.
pub const NAME_INPUT_ID: &str = "invite_user_name";

/// Invite-user form component.
///
/// Owns the editable [`FormState`]. The owner passes the inviting user at
/// creation time, pushes its own error (e.g. a backend rejection) with
/// [`InviteUserForm::sync_external_error`] and reacts to the [`Action`]
/// returned by [`InviteUserForm::update`].
#[derive(Debug, Clone)]
pub struct InviteUserForm {
    invited_by: User,
    state: FormState,
    /// Last external error seen, compared on every sync.
    external_error: Option<String>,
}

impl InviteUserForm {
    pub fn new(invited_by: User) -> Self {
        Self {
            invited_by,
            state: FormState::default(),
            external_error: None,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn invited_by(&self) -> &User {
        &self.invited_by
    }

    /// Focuses the name input.
    pub fn focus<T>() -> Task<T>
    where
        T: Send + 'static,
    {
        text_input::focus(text_input::Id::new(NAME_INPUT_ID))
    }

    /// Pushes the owner's error into the email error slot when it differs
    /// from the previously pushed value. A value equal to the last one is
    /// ignored, so a local edit that cleared the slot is kept until the
    /// owner's error changes again.
    pub fn sync_external_error(&mut self, error: Option<&str>) {
        if self.external_error.as_deref() == error {
            return;
        }
        self.external_error = error.map(str::to_string);
        self.state = std::mem::take(&mut self.state)
            .with_error(Field::Email, self.external_error.clone());
    }
}
