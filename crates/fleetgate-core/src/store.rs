//! Session store trait definition.
//!
//! The gate treats its session storage as an injectable key-value
//! repository, so backends can range from an in-memory map (tests) to
//! a file on disk (CLI) or a platform keystore without touching
//! gateway logic. All mutation of session state goes through the
//! gateway's login/logout — nothing else writes these keys.

use crate::error::GateResult;

/// Well-known storage keys.
pub mod keys {
    /// Opaque authentication token from the login endpoint.
    pub const TOKEN: &str = "token";
    /// Wire-form role string (`"ADMIN"`, `"FLEET_MANAGER"`, ...).
    pub const ROLE: &str = "role";
    /// Remember-me email, kept separate from the session proper:
    /// logout leaves it alone.
    pub const REMEMBERED_EMAIL: &str = "remembered_email";
}

/// A persistent string key-value store backing the session.
///
/// Absence of a key means "unset". Implementations are internally
/// synchronized so a store can be shared behind `Arc`.
pub trait SessionStore: Send + Sync {
    /// Read a key, `None` if unset.
    fn get(&self, key: &str) -> GateResult<Option<String>>;

    /// Write a key, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> GateResult<()>;

    /// Delete a key. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> GateResult<()>;
}

impl<T: SessionStore + ?Sized> SessionStore for &T {
    fn get(&self, key: &str) -> GateResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> GateResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> GateResult<()> {
        (**self).remove(key)
    }
}

impl<T: SessionStore + ?Sized> SessionStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> GateResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> GateResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> GateResult<()> {
        (**self).remove(key)
    }
}
