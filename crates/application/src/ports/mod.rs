//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the session core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer (or by a mock in tests).

mod auth_api;
mod credential_store;

pub use auth_api::{ApiError, AuthApi};
pub use credential_store::CredentialStore;
