//! Fleetgate Store — [`SessionStore`] backends.
//!
//! This crate provides:
//! - [`MemoryStore`]: ephemeral, for tests and embedding.
//! - [`FileStore`]: a JSON file persisted across runs, the desktop
//!   analog of browser local storage.
//!
//! [`SessionStore`]: fleetgate_core::SessionStore

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;
