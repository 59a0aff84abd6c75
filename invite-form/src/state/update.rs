use super::{Action, FieldChange, InviteUserForm, Msg};
use crate::{state::Field, validation};
use tracing::debug;

impl InviteUserForm {
    pub fn update(&mut self, message: Msg) -> Option<Action> {
        debug!("invite form received message");
        match message {
            Msg::NameChanged(name) => self.on_change(FieldChange::Name(name)),
            Msg::EmailChanged(email) => self.on_change(FieldChange::Email(email)),
            Msg::RoleSelected(role) => self.on_change(FieldChange::Admin(role)),
            Msg::Submit => return self.on_submit(),
            Msg::Cancel => return Some(Action::Cancel),
        }
        None
    }

    fn on_change(&mut self, change: FieldChange) {
        self.state = std::mem::take(&mut self.state).with_change(change);
    }

    fn on_submit(&mut self) -> Option<Action> {
        if !self.validate() {
            return None;
        }
        Some(Action::Submit(self.state.payload(self.invited_by.id)))
    }

    /// Runs the validation rules, writing the first failure in the email
    /// error slot.
    fn validate(&mut self) -> bool {
        match validation::validate(&self.state.values) {
            Ok(()) => true,
            Err(e) => {
                debug!("invite form validation failed: {}", e);
                self.state = std::mem::take(&mut self.state)
                    .with_error(Field::Email, Some(e.to_string()));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        models::User,
        state::{Action, InviteUserForm, Msg, Role, SubmissionPayload},
    };

    fn inviter() -> User {
        User::new("Admin", "admin@example.com", true)
    }

    fn form_with_email(email: &str) -> InviteUserForm {
        let mut form = InviteUserForm::new(inviter());
        form.update(Msg::EmailChanged(email.to_string()));
        form
    }

    #[test]
    fn test_empty_email_is_blocked() {
        for email in ["", " ", "   \t"] {
            let mut form = form_with_email(email);
            assert_eq!(form.update(Msg::Submit), None);
            assert_eq!(
                form.state().errors.email.as_deref(),
                Some("Email field must be completed")
            );
        }
    }

    #[test]
    fn test_malformed_email_is_blocked() {
        for email in [
            "foo",
            "foo@bar",
            "foo@",
            "@example.com",
            "Jane <a@b.com>",
            "a@[127.0.0.1]",
        ] {
            let mut form = form_with_email(email);
            assert_eq!(form.update(Msg::Submit), None);
            assert_eq!(
                form.state().errors.email,
                Some(format!("{} is not a valid email", email))
            );
        }
    }

    #[test]
    fn test_valid_submit() {
        let inviter = inviter();
        let mut form = InviteUserForm::new(inviter.clone());
        assert_eq!(form.update(Msg::NameChanged("Jane".to_string())), None);
        assert_eq!(form.update(Msg::EmailChanged("a@b.com".to_string())), None);

        assert_eq!(
            form.update(Msg::Submit),
            Some(Action::Submit(SubmissionPayload {
                name: "Jane".to_string(),
                email: "a@b.com".to_string(),
                admin: false,
                invited_by: inviter.id,
            }))
        );
        assert_eq!(form.state().errors.email, None);
    }

    #[test]
    fn test_empty_name_is_accepted() {
        let mut form = form_with_email("a@b.com");
        match form.update(Msg::Submit) {
            Some(Action::Submit(payload)) => assert_eq!(payload.name, ""),
            other => panic!("unexpected action: {:?}", other),
        }
        assert_eq!(form.state().errors.name, None);
    }

    #[test]
    fn test_admin_role_submit() {
        let mut form = form_with_email("a@b.com");
        assert_eq!(form.state().values.admin, Role::User);

        form.update(Msg::RoleSelected(Role::Admin));
        match form.update(Msg::Submit) {
            Some(Action::Submit(payload)) => assert!(payload.admin),
            other => panic!("unexpected action: {:?}", other),
        }

        form.update(Msg::RoleSelected(Role::User));
        match form.update(Msg::Submit) {
            Some(Action::Submit(payload)) => assert!(!payload.admin),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_edit_clears_email_error() {
        let mut form = form_with_email("foo");
        form.update(Msg::Submit);
        assert!(form.state().errors.email.is_some());

        form.update(Msg::EmailChanged("foo@".to_string()));
        assert_eq!(form.state().errors.email, None);
        assert_eq!(form.state().values.email, "foo@");
    }

    #[test]
    fn test_other_field_edit_keeps_email_error() {
        let mut form = form_with_email("");
        form.update(Msg::Submit);
        form.update(Msg::NameChanged("Jane".to_string()));
        form.update(Msg::RoleSelected(Role::Admin));
        assert_eq!(
            form.state().errors.email.as_deref(),
            Some("Email field must be completed")
        );
    }

    #[test]
    fn test_cancel_does_not_validate() {
        let mut form = form_with_email("foo");
        let before = form.state().clone();
        assert_eq!(form.update(Msg::Cancel), Some(Action::Cancel));
        assert_eq!(form.state(), &before);
        assert_eq!(form.state().errors.email, None);
    }

    #[test]
    fn test_external_error_overwrites_email_slot() {
        let mut form = form_with_email("");
        form.update(Msg::Submit);

        form.sync_external_error(Some("email already taken"));
        assert_eq!(
            form.state().errors.email.as_deref(),
            Some("email already taken")
        );
        assert_eq!(form.state().errors.name, None);
        assert_eq!(form.state().errors.admin, None);

        form.sync_external_error(None);
        assert_eq!(form.state().errors.email, None);
    }

    #[test]
    fn test_same_external_error_is_ignored() {
        let mut form = form_with_email("taken@example.com");
        form.sync_external_error(Some("email already taken"));

        form.update(Msg::EmailChanged("other@example.com".to_string()));
        assert_eq!(form.state().errors.email, None);

        // Unchanged value: the local edit wins.
        form.sync_external_error(Some("email already taken"));
        assert_eq!(form.state().errors.email, None);

        form.sync_external_error(Some("invitation failed"));
        assert_eq!(
            form.state().errors.email.as_deref(),
            Some("invitation failed")
        );
    }

    #[test]
    fn test_external_error_replaces_local_error() {
        let mut form = form_with_email("foo");
        form.update(Msg::Submit);
        form.sync_external_error(Some("email already taken"));
        assert_eq!(
            form.state().errors.email.as_deref(),
            Some("email already taken")
        );

        // Next submit validates again and replaces it.
        assert_eq!(form.update(Msg::Submit), None);
        assert_eq!(
            form.state().errors.email.as_deref(),
            Some("foo is not a valid email")
        );
    }
}
