//! Fleetgate Core — Domain models, the session store abstraction, and
//! shared error types for the fleet-dashboard access-control gate.

pub mod error;
pub mod models;
pub mod store;

pub use error::{GateError, GateResult};
pub use models::role::Role;
pub use models::session::Session;
pub use store::SessionStore;
