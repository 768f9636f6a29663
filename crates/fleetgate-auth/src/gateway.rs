//! Auth gateway — login and logout orchestration over the session
//! store.

use fleetgate_core::error::GateResult;
use fleetgate_core::models::role::{self, Role};
use fleetgate_core::models::session::Session;
use fleetgate_core::store::{SessionStore, keys};
use tracing::{info, warn};

use crate::client::LoginClient;
use crate::config::AuthConfig;
use crate::validate;

/// Input for the login flow.
#[derive(Debug)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
    /// Opt in to persisting the email for form prefill. Opting out
    /// clears a previously remembered email; the session itself is not
    /// affected either way.
    pub remember: bool,
}

/// Successful login result.
#[derive(Debug)]
pub struct LoginOutput {
    /// Opaque token from the endpoint, now persisted.
    pub token: String,
    /// The authenticated role, now persisted.
    pub role: Role,
}

/// Session gateway.
///
/// Generic over the store and client implementations so the gate has
/// no dependency on a concrete storage backend or transport. All
/// session mutation in the system goes through [`login`] and
/// [`logout`]; reads always go back to storage, never to a cache.
///
/// [`login`]: AuthGateway::login
/// [`logout`]: AuthGateway::logout
pub struct AuthGateway<S: SessionStore, C: LoginClient> {
    store: S,
    client: C,
    config: AuthConfig,
}

impl<S: SessionStore, C: LoginClient> AuthGateway<S, C> {
    pub fn new(store: S, client: C, config: AuthConfig) -> Self {
        Self {
            store,
            client,
            config,
        }
    }

    /// Exchange credentials for a session.
    ///
    /// Validation runs first and short-circuits without touching the
    /// network. On endpoint rejection or transport failure the stored
    /// session is left exactly as it was.
    pub async fn login(&self, input: LoginInput) -> GateResult<LoginOutput> {
        validate::validate_credentials(
            &input.email,
            &input.password,
            self.config.min_password_length,
        )?;

        let response = self.client.login(&input.email, &input.password).await?;

        self.store.set(keys::TOKEN, &response.token)?;
        self.store.set(keys::ROLE, response.role.as_str())?;

        if input.remember {
            self.store.set(keys::REMEMBERED_EMAIL, &input.email)?;
        } else {
            self.store.remove(keys::REMEMBERED_EMAIL)?;
        }

        info!(role = %response.role, "login succeeded");
        Ok(LoginOutput {
            token: response.token,
            role: response.role,
        })
    }

    /// Clear the session. No network call; idempotent. The remembered
    /// email is deliberately left in place.
    pub fn logout(&self) -> GateResult<()> {
        self.store.remove(keys::TOKEN)?;
        self.store.remove(keys::ROLE)?;
        info!("session cleared");
        Ok(())
    }

    /// True iff a non-empty token is stored.
    pub fn is_authenticated(&self) -> GateResult<bool> {
        Ok(self.session()?.is_authenticated())
    }

    /// The stored role, `None` if absent or unrecognized.
    pub fn role(&self) -> GateResult<Option<Role>> {
        Ok(self.session()?.role)
    }

    /// Fresh snapshot of the stored session, for the route guard.
    ///
    /// A stored role string that does not name a known role resolves
    /// to `None`; the guard then bounces the visitor to the public
    /// root instead of crashing.
    pub fn session(&self) -> GateResult<Session> {
        let token = self.store.get(keys::TOKEN)?;
        let role = match self.store.get(keys::ROLE)? {
            Some(raw) => match raw.parse::<Role>() {
                Ok(role) => Some(role),
                Err(err) => {
                    warn!(%err, "stored role is unrecognized, treating as unset");
                    None
                }
            },
            None => None,
        };
        Ok(Session { token, role })
    }

    /// Dashboard path of the current role; the public root when no
    /// role is resolvable.
    pub fn dashboard_path(&self) -> GateResult<&'static str> {
        Ok(role::dashboard_path(self.role()?))
    }

    /// The remembered email for login-form prefill. `Some(_)` also
    /// means the remember checkbox starts checked.
    pub fn remembered_email(&self) -> GateResult<Option<String>> {
        self.store.get(keys::REMEMBERED_EMAIL)
    }
}
