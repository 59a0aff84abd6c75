use invite_form::{SubmissionPayload, User};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("email already taken")]
    EmailTaken,
}

/// Users API of the admin backend.
pub trait Backend {
    fn users(&self) -> Vec<User>;
    /// Registers the invited user. Fails if the email is already used.
    fn invite(&mut self, payload: SubmissionPayload) -> Result<User, BackendError>;
}

/// In-memory backend used by the console.
#[derive(Debug, Default)]
pub struct MockBackend {
    users: Vec<User>,
}

impl MockBackend {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    fn is_taken(&self, email: &str) -> bool {
        let email = email.trim();
        self.users
            .iter()
            .any(|u| u.email.trim().eq_ignore_ascii_case(email))
    }
}

impl Backend for MockBackend {
    fn users(&self) -> Vec<User> {
        self.users.clone()
    }

    fn invite(&mut self, payload: SubmissionPayload) -> Result<User, BackendError> {
        if self.is_taken(&payload.email) {
            warn!("invitation rejected: email already taken");
            return Err(BackendError::EmailTaken);
        }
        let user = User::new(payload.name, payload.email, payload.admin);
        info!(
            user = %user.id,
            invited_by = %payload.invited_by,
            admin = user.admin,
            "user invited"
        );
        self.users.push(user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn payload(email: &str) -> SubmissionPayload {
        SubmissionPayload {
            name: "Jane".to_string(),
            email: email.to_string(),
            admin: true,
            invited_by: Uuid::new_v4(),
        }
    }

    #[test]
    fn test_invite() {
        let mut backend = MockBackend::default();
        let user = backend.invite(payload("jane@example.com")).unwrap();
        assert_eq!(user.name, "Jane");
        assert!(user.admin);
        assert_eq!(backend.users(), vec![user]);
    }

    #[test]
    fn test_invite_taken_email() {
        let mut backend =
            MockBackend::new(vec![User::new("Bob", "bob@example.com", false)]);
        assert_eq!(
            backend.invite(payload("BOB@example.com")),
            Err(BackendError::EmailTaken)
        );
        assert_eq!(
            BackendError::EmailTaken.to_string(),
            "email already taken"
        );
        assert_eq!(backend.users().len(), 1);
    }
}
