//! Fleetgate Auth — Credential validation, the login-endpoint client,
//! the session gateway, and the route guard.

pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod guard;
pub mod validate;

pub use client::{HttpLoginClient, LoginClient, LoginResponse};
pub use config::AuthConfig;
pub use error::{AuthError, CredentialField};
pub use gateway::{AuthGateway, LoginInput, LoginOutput};
pub use guard::{GuardDecision, RedirectReason, evaluate};
