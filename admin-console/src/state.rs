use crate::backend::Backend;
use admin_ui::{
    component::{button, divider, text},
    theme,
    widget::{modal::Modal, *},
};
use iced::{widget::Space, Alignment, Length, Task};
use invite_form::{
    state::Action, views::invite_user_modal_view, InviteUserForm, SubmissionPayload, User,
};
use tracing::{debug, info};

/// All application messages
#[derive(Debug, Clone)]
pub enum Msg {
    InviteOpen,
    Invite(invite_form::Message),
}

/// Main application state
pub struct State {
    backend: Box<dyn Backend>,
    inviter: User,
    users: Vec<User>,
    invite: Option<InviteUserForm>,
    /// Error of the last invitation, shown by the form on the email field.
    invite_error: Option<String>,
}

impl State {
    pub fn new(backend: Box<dyn Backend>, inviter: User) -> Self {
        let users = backend.users();
        Self {
            backend,
            inviter,
            users,
            invite: None,
            invite_error: None,
        }
    }

    pub fn update(&mut self, message: Msg) -> Task<Msg> {
        debug!("received message");
        match message {
            Msg::InviteOpen => return self.on_invite_open(),
            Msg::Invite(msg) => {
                let action = self.invite.as_mut().and_then(|form| form.update(msg));
                match action {
                    Some(Action::Submit(payload)) => self.on_invite_submit(payload),
                    Some(Action::Cancel) => self.on_invite_cancel(),
                    None => {}
                }
            }
        }
        Task::none()
    }

    fn on_invite_open(&mut self) -> Task<Msg> {
        self.invite = Some(InviteUserForm::new(self.inviter.clone()));
        self.invite_error = None;
        InviteUserForm::focus()
    }

    fn on_invite_submit(&mut self, payload: SubmissionPayload) {
        // Reset first so that a rejection equal to the previous one is
        // still seen as a change by the form.
        self.set_invite_error(None);
        match self.backend.invite(payload) {
            Ok(user) => {
                info!(user = %user.id, "invitation sent");
                self.users.push(user);
                self.invite = None;
            }
            Err(e) => self.set_invite_error(Some(e.to_string())),
        }
    }

    fn on_invite_cancel(&mut self) {
        self.invite = None;
        self.invite_error = None;
    }

    fn set_invite_error(&mut self, error: Option<String>) {
        self.invite_error = error;
        if let Some(form) = self.invite.as_mut() {
            form.sync_external_error(self.invite_error.as_deref());
        }
    }

    pub fn view(&self) -> Element<'_, Msg> {
        let header = Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(text::title("Users"))
            .push(Space::with_width(Length::Fill))
            .push(
                button::primary("Invite user")
                    .on_press(Msg::InviteOpen)
                    .width(Length::Fixed(150.0)),
            );

        let users = self
            .users
            .iter()
            .fold(Column::new().spacing(10), |col, user| {
                col.push(user_row(user)).push(divider::<Msg>())
            });

        let content = Container::new(
            Column::new()
                .push(header)
                .push(users)
                .spacing(20)
                .padding(40)
                .width(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::container::page);

        if let Some(form) = &self.invite {
            let modal = invite_user_modal_view(form).map(Msg::Invite);
            Modal::new(content, modal)
                .on_blur(Some(Msg::Invite(invite_form::Message::Cancel)))
                .into()
        } else {
            content.into()
        }
    }
}

fn user_row(user: &User) -> Element<'_, Msg> {
    Row::new()
        .spacing(20)
        .align_y(Alignment::Center)
        .push(text::label(&user.name).width(Length::FillPortion(2)))
        .push(
            text::body(&user.email)
                .style(theme::text::muted)
                .width(Length::FillPortion(3)),
        )
        .push(
            text::small(if user.admin { "ADMIN" } else { "USER" })
                .style(if user.admin {
                    theme::text::accent
                } else {
                    theme::text::muted
                })
                .width(Length::FillPortion(1)),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;
    use invite_form::{Message, Role};

    fn state() -> State {
        let inviter = User::new("Admin", "admin@example.com", true);
        let backend = MockBackend::new(vec![
            inviter.clone(),
            User::new("Bob", "bob@example.com", false),
        ]);
        State::new(Box::new(backend), inviter)
    }

    fn fill(state: &mut State, name: &str, email: &str) {
        let _ = state.update(Msg::InviteOpen);
        let _ = state.update(Msg::Invite(Message::NameChanged(name.to_string())));
        let _ = state.update(Msg::Invite(Message::EmailChanged(email.to_string())));
    }

    fn email_error(state: &State) -> Option<String> {
        state
            .invite
            .as_ref()
            .and_then(|f| f.state().errors.email.clone())
    }

    #[test]
    fn test_same_backend_error_is_not_pushed_again() {
        let mut state = state();
        fill(&mut state, "Jane", "jane@example.com");
        state.set_invite_error(Some("email already taken".to_string()));
        assert_eq!(email_error(&state).as_deref(), Some("email already taken"));

        let _ = state.update(Msg::Invite(Message::EmailChanged(
            "jane@example.org".to_string(),
        )));
        assert_eq!(email_error(&state), None);

        // Equal to the last value seen by the form: the cleared slot stays.
        state.set_invite_error(Some("email already taken".to_string()));
        assert_eq!(email_error(&state), None);

        // Going through None first makes the same message a change again,
        // which is what a submit does before calling the backend.
        state.set_invite_error(None);
        state.set_invite_error(Some("email already taken".to_string()));
        assert_eq!(email_error(&state).as_deref(), Some("email already taken"));
    }

    #[test]
    fn test_invite_success() {
        let mut state = state();
        fill(&mut state, "Jane", "jane@example.com");
        let _ = state.update(Msg::Invite(Message::RoleSelected(Role::Admin)));
        let _ = state.update(Msg::Invite(Message::Submit));

        assert!(state.invite.is_none());
        assert_eq!(state.users.len(), 3);
        let jane = state.users.last().unwrap();
        assert_eq!(jane.email, "jane@example.com");
        assert!(jane.admin);
    }

    #[test]
    fn test_invalid_email_is_not_sent() {
        let mut state = state();
        fill(&mut state, "Jane", "jane@example");
        let _ = state.update(Msg::Invite(Message::Submit));

        assert!(state.invite.is_some());
        assert_eq!(state.users.len(), 2);
        assert_eq!(
            email_error(&state).as_deref(),
            Some("jane@example is not a valid email")
        );
    }

    #[test]
    fn test_taken_email_shows_backend_error() {
        let mut state = state();
        fill(&mut state, "Bobby", "bob@example.com");
        let _ = state.update(Msg::Invite(Message::Submit));

        assert_eq!(email_error(&state).as_deref(), Some("email already taken"));
        assert_eq!(state.users.len(), 2);

        // Editing clears the error, a second rejection shows it again.
        let _ = state.update(Msg::Invite(Message::EmailChanged(
            "admin@example.com".to_string(),
        )));
        assert_eq!(email_error(&state), None);
        let _ = state.update(Msg::Invite(Message::Submit));
        assert_eq!(email_error(&state).as_deref(), Some("email already taken"));

        let _ = state.update(Msg::Invite(Message::EmailChanged(
            "bobby@example.com".to_string(),
        )));
        let _ = state.update(Msg::Invite(Message::Submit));
        assert!(state.invite.is_none());
        assert_eq!(state.users.len(), 3);
    }

    #[test]
    fn test_cancel_closes_form() {
        let mut state = state();
        fill(&mut state, "Jane", "not an email");
        let _ = state.update(Msg::Invite(Message::Cancel));

        assert!(state.invite.is_none());
        assert!(state.invite_error.is_none());
        assert_eq!(state.users.len(), 2);
    }

    #[test]
    fn test_reopen_starts_clean() {
        let mut state = state();
        fill(&mut state, "Bobby", "bob@example.com");
        let _ = state.update(Msg::Invite(Message::Submit));
        let _ = state.update(Msg::Invite(Message::Cancel));
        let _ = state.update(Msg::InviteOpen);

        let form = state.invite.as_ref().unwrap();
        assert_eq!(form.state(), &invite_form::state::FormState::default());
    }
}
