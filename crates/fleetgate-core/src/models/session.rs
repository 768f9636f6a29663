//! Session domain model.

use crate::models::role::Role;

/// A snapshot of the persisted session, read fresh from storage on
/// every evaluation — never cached.
///
/// `role` is `None` both when no role is stored and when the stored
/// value is not a recognized role; the guard treats either as
/// "no usable role".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
}

impl Session {
    /// True iff a non-empty token is present.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.token.as_deref(), Some(t) if !t.is_empty())
    }

    /// Token present but no usable role — the defensively handled
    /// inconsistent state.
    pub fn is_inconsistent(&self) -> bool {
        self.is_authenticated() && self.role.is_none()
    }
}
