//! Route guard — the per-navigation access decision.
//!
//! A pure function over a session snapshot: it never mutates the
//! store and is re-evaluated on every navigation, never cached.

use fleetgate_core::models::role::{PUBLIC_ROOT, Role};
use fleetgate_core::models::session::Session;

/// Why a visitor is being redirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    /// No token (or an empty one).
    Unauthenticated,
    /// Token present but no usable role; treated as unauthenticated.
    InconsistentSession,
    /// Authenticated, but the role is not on the route's allowlist.
    RoleNotAllowed,
}

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected content unchanged.
    Allow,
    /// Redirect, replacing history. `attempted` carries the original
    /// target for an optional post-login redirect-back.
    Redirect {
        to: String,
        reason: RedirectReason,
        attempted: Option<String>,
    },
}

impl GuardDecision {
    fn redirect(to: &str, reason: RedirectReason, attempted: &str) -> Self {
        GuardDecision::Redirect {
            to: to.to_string(),
            reason,
            attempted: Some(attempted.to_string()),
        }
    }
}

/// Decide whether the visitor may see the route at `attempted`.
///
/// - Unauthenticated → public root, carrying the attempted location.
/// - Token without a usable role → public root (defensive path for an
///   inconsistent store).
/// - Role not on the supplied allowlist → that role's own dashboard,
///   never an arbitrary page and never a forbidden page. A crafted URL
///   bounces the visitor to their legitimate home.
/// - Otherwise → allow.
pub fn evaluate(
    session: &Session,
    allowlist: Option<&[Role]>,
    attempted: &str,
) -> GuardDecision {
    if !session.is_authenticated() {
        return GuardDecision::redirect(PUBLIC_ROOT, RedirectReason::Unauthenticated, attempted);
    }

    let Some(role) = session.role else {
        return GuardDecision::redirect(
            PUBLIC_ROOT,
            RedirectReason::InconsistentSession,
            attempted,
        );
    };

    if let Some(allowed) = allowlist
        && !allowed.contains(&role)
    {
        return GuardDecision::Redirect {
            to: role.dashboard_path().to_string(),
            reason: RedirectReason::RoleNotAllowed,
            attempted: None,
        };
    }

    GuardDecision::Allow
}
