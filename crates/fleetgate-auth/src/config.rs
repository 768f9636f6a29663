//! Authentication configuration.

/// Configuration for the auth gateway and login client.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// URL of the external login endpoint.
    pub login_url: String,
    /// Minimum password length enforced before any network call
    /// (default: 8).
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_url: String::new(),
            min_password_length: 8,
        }
    }
}
