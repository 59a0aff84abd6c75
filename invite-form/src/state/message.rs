use super::{Role, SubmissionPayload};

/// Messages produced by the invite form widgets.
#[derive(Debug, Clone)]
pub enum Msg {
    NameChanged(String),
    EmailChanged(String),
    RoleSelected(Role),
    Submit,
    Cancel,
}

/// Type alias for Msg (used in views)
pub type Message = Msg;

/// What the owner of the form has to do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The form validated, the payload must be sent.
    Submit(SubmissionPayload),
    /// The user gave up on the invitation.
    Cancel,
}
