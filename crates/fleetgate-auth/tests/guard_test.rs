//! Integration tests for the route guard.

use fleetgate_auth::guard::{GuardDecision, RedirectReason, evaluate};
use fleetgate_core::models::role::Role;
use fleetgate_core::models::session::Session;

fn authenticated(role: Role) -> Session {
    Session {
        token: Some("tok-1".into()),
        role: Some(role),
    }
}

#[test]
fn unauthenticated_visitor_is_sent_to_public_root() {
    let session = Session {
        token: None,
        role: None,
    };

    let decision = evaluate(&session, Some(&[Role::Admin]), "/admin-dashboard");

    assert_eq!(
        decision,
        GuardDecision::Redirect {
            to: "/".into(),
            reason: RedirectReason::Unauthenticated,
            attempted: Some("/admin-dashboard".into()),
        }
    );
}

#[test]
fn empty_token_counts_as_unauthenticated() {
    let session = Session {
        token: Some(String::new()),
        role: Some(Role::Admin),
    };

    match evaluate(&session, None, "/admin-dashboard") {
        GuardDecision::Redirect { to, reason, .. } => {
            assert_eq!(to, "/");
            assert_eq!(reason, RedirectReason::Unauthenticated);
        }
        GuardDecision::Allow => panic!("empty token must not pass the guard"),
    }
}

#[test]
fn token_without_role_is_treated_as_unauthenticated() {
    let session = Session {
        token: Some("tok-1".into()),
        role: None,
    };

    match evaluate(&session, None, "/mechanic-dashboard") {
        GuardDecision::Redirect { to, reason, .. } => {
            assert_eq!(to, "/");
            assert_eq!(reason, RedirectReason::InconsistentSession);
        }
        GuardDecision::Allow => panic!("inconsistent session must not pass the guard"),
    }
}

#[test]
fn driver_hitting_admin_route_bounces_to_own_dashboard() {
    let decision = evaluate(
        &authenticated(Role::Driver),
        Some(&[Role::Admin]),
        "/admin-dashboard",
    );

    assert_eq!(
        decision,
        GuardDecision::Redirect {
            to: "/driver-dashboard".into(),
            reason: RedirectReason::RoleNotAllowed,
            attempted: None,
        }
    );
}

#[test]
fn allowlisted_role_is_allowed() {
    let decision = evaluate(
        &authenticated(Role::Admin),
        Some(&[Role::Admin, Role::FleetManager]),
        "/admin-dashboard",
    );
    assert_eq!(decision, GuardDecision::Allow);
}

#[test]
fn no_allowlist_admits_any_authenticated_role() {
    for role in Role::ALL {
        let decision = evaluate(&authenticated(role), None, "/service-jobs");
        assert_eq!(decision, GuardDecision::Allow, "role {role} should pass");
    }
}

#[test]
fn mismatch_never_redirects_to_public_root() {
    // Policy: a wrong-role visitor goes to their own home, never to a
    // blank or forbidden page, and never to "/".
    for role in [Role::FleetManager, Role::Mechanic, Role::Driver] {
        match evaluate(&authenticated(role), Some(&[Role::Admin]), "/users") {
            GuardDecision::Redirect { to, .. } => {
                assert_eq!(to, role.dashboard_path());
                assert_ne!(to, "/");
            }
            GuardDecision::Allow => panic!("role {role} must not see the admin route"),
        }
    }
}
