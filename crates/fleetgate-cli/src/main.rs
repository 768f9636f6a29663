//! Fleetgate CLI — Application entry point.
//!
//! Wires the file-backed session store and the HTTP login client into
//! `login` / `logout` / `status` commands. Configuration comes from
//! the environment:
//!
//! - `FLEETGATE_LOGIN_URL` — external login endpoint (required for
//!   `login`).
//! - `FLEETGATE_SESSION_FILE` — session store path (default:
//!   `fleetgate-session.json` in the current directory).

use std::env;
use std::path::PathBuf;

use anyhow::{Context, bail};
use fleetgate_auth::client::HttpLoginClient;
use fleetgate_auth::config::AuthConfig;
use fleetgate_auth::gateway::{AuthGateway, LoginInput};
use fleetgate_core::models::role;
use fleetgate_store::FileStore;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: fleetgate <command>

commands:
  login <email> <password> [--remember]
  logout
  status";

fn session_file() -> PathBuf {
    env::var_os("FLEETGATE_SESSION_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("fleetgate-session.json"))
}

fn config_from_env() -> AuthConfig {
    AuthConfig {
        login_url: env::var("FLEETGATE_LOGIN_URL").unwrap_or_default(),
        ..AuthConfig::default()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("fleetgate=info".parse()?),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first().map(String::as_str) else {
        bail!("{USAGE}");
    };

    let config = config_from_env();
    let store = FileStore::open(session_file()).context("open session store")?;
    let client = HttpLoginClient::new(&config);
    let gateway = AuthGateway::new(store, client, config.clone());

    match command {
        "login" => {
            if config.login_url.is_empty() {
                bail!("FLEETGATE_LOGIN_URL is not set");
            }
            let (email, password) = match (args.get(1), args.get(2)) {
                (Some(email), Some(password)) => (email.clone(), password.clone()),
                _ => bail!("{USAGE}"),
            };
            let remember = args.iter().any(|a| a == "--remember");

            let out = gateway
                .login(LoginInput {
                    email,
                    password,
                    remember,
                })
                .await?;
            println!("logged in as {} -> {}", out.role, out.role.dashboard_path());
        }
        "logout" => {
            gateway.logout()?;
            println!("logged out");
        }
        "status" => {
            let session = gateway.session()?;
            if session.is_inconsistent() {
                println!("session is inconsistent (token without role); run `fleetgate logout`");
            } else if session.is_authenticated() {
                // is_authenticated + not inconsistent implies a role.
                println!(
                    "authenticated as {} -> {}",
                    session.role.map(role::Role::as_str).unwrap_or("?"),
                    role::dashboard_path(session.role),
                );
            } else {
                println!("not authenticated -> {}", role::PUBLIC_ROOT);
            }
            if let Some(email) = gateway.remembered_email()? {
                println!("remembered email: {email}");
            }
        }
        other => bail!("unknown command `{other}`\n{USAGE}"),
    }

    Ok(())
}
