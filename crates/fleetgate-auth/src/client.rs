//! Client for the external login endpoint.
//!
//! The endpoint is the only network collaborator of the gate. It is
//! reached through the [`LoginClient`] trait so the gateway has no
//! dependency on a concrete transport and tests can inject a stub.

use fleetgate_core::models::role::Role;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AuthConfig;
use crate::error::AuthError;

/// Wire request: `POST <login_url>`.
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Wire response on success. Any extra fields the endpoint returns are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
}

/// Wire response on rejection; `message` is optional.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Credential exchange with the external authentication endpoint.
pub trait LoginClient: Send + Sync {
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<LoginResponse, AuthError>> + Send;
}

/// [`LoginClient`] over HTTP.
///
/// No request timeout is configured: a hanging request leaves the
/// caller's submit flow suspended, which is the contract the
/// surrounding UI relies on (it disables the trigger while a login is
/// outstanding).
#[derive(Debug, Clone)]
pub struct HttpLoginClient {
    http: reqwest::Client,
    login_url: String,
}

impl HttpLoginClient {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            login_url: config.login_url.clone(),
        }
    }
}

impl LoginClient for HttpLoginClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError> {
        debug!(url = %self.login_url, "sending login request");

        let response = self
            .http
            .post(&self.login_url)
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(|e| AuthError::Network(format!("login request failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<LoginResponse>()
                .await
                .map_err(|e| AuthError::Network(format!("malformed login response: {e}")))
        } else if status.is_client_error() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            Err(AuthError::InvalidCredentials { message })
        } else {
            Err(AuthError::Network(format!(
                "login endpoint returned {status}, try again later"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_ignores_extra_fields() {
        let raw = r#"{
            "token": "abc123",
            "role": "FLEET_MANAGER",
            "userId": 42,
            "displayName": "Pat"
        }"#;
        let parsed: LoginResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.token, "abc123");
        assert_eq!(parsed.role, Role::FleetManager);
    }

    #[test]
    fn response_rejects_unknown_role() {
        let raw = r#"{"token": "abc123", "role": "SUPERVISOR"}"#;
        assert!(serde_json::from_str::<LoginResponse>(raw).is_err());
    }

    #[test]
    fn error_body_message_is_optional() {
        let with: ErrorBody = serde_json::from_str(r#"{"message": "bad login"}"#).unwrap();
        assert_eq!(with.message.as_deref(), Some("bad login"));

        let without: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(without.message, None);
    }

    #[test]
    fn request_serializes_credentials() {
        let raw = serde_json::to_value(LoginRequest {
            email: "x@y.com",
            password: "hunter22",
        })
        .unwrap();
        assert_eq!(raw["email"], "x@y.com");
        assert_eq!(raw["password"], "hunter22");
    }
}
