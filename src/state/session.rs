use crate::models::User;

/// Session as seen by the UI. Written once, by the session provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    /// The startup auth check has completed (successfully or not)
    pub checked: bool,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user: None, checked: true }
    }

    pub fn logged_in(user: User) -> Self {
        Self { user: Some(user), checked: true }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}
