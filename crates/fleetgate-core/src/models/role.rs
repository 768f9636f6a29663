//! Role domain model and the role→route directory.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The public landing page, used as the redirect target for
/// unauthenticated visitors and as the dashboard of "no role".
pub const PUBLIC_ROOT: &str = "/";

/// The closed set of dashboard roles.
///
/// Wire form is SCREAMING_SNAKE_CASE (`"FLEET_MANAGER"` etc.), matching
/// the login endpoint's `role` field and the persisted `role` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    FleetManager,
    Mechanic,
    Driver,
}

impl Role {
    /// Every role, in wire order. Useful for exhaustiveness tests.
    pub const ALL: [Role; 4] = [
        Role::Admin,
        Role::FleetManager,
        Role::Mechanic,
        Role::Driver,
    ];

    /// The role's dashboard root path.
    ///
    /// The match is exhaustive on purpose: adding a role without a
    /// route fails to compile.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Admin => "/admin-dashboard",
            Role::FleetManager => "/fleet-manager-dashboard",
            Role::Mechanic => "/mechanic-dashboard",
            Role::Driver => "/driver-dashboard",
        }
    }

    /// Wire/storage representation of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::FleetManager => "FLEET_MANAGER",
            Role::Mechanic => "MECHANIC",
            Role::Driver => "DRIVER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed from the stored `role` key. Unrecognized strings are an
/// error; callers decide whether to treat that as "no role".
impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "FLEET_MANAGER" => Ok(Role::FleetManager),
            "MECHANIC" => Ok(Role::Mechanic),
            "DRIVER" => Ok(Role::Driver),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

/// Resolve a possibly-absent role to its dashboard path.
///
/// `None` (no session, or a session whose role could not be resolved)
/// lands on the public root.
pub fn dashboard_path(role: Option<Role>) -> &'static str {
    match role {
        Some(role) => role.dashboard_path(),
        None => PUBLIC_ROOT,
    }
}
