use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user of the admin application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub admin: bool,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, admin: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            admin,
        }
    }
}
