/// Key of the users table.
///
/// Users are registered under their email, and the `userId` accepted by the
/// post endpoints is that same value. There is no separate numeric id.
pub type UserKey = String;

/// A registered user. Created on sign-up and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: Option<String>,
    pub email: UserKey,
}

impl User {
    pub fn new(name: Option<String>, email: impl Into<UserKey>) -> Self {
        Self {
            name,
            email: email.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.email
    }
}
