//! Keystone Application - Session orchestration and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for the auth API and credential persistence)
//! - The event broadcaster for cross-tree auth notifications
//! - The session store and its token refresh coordinator
//! - Application-level error handling

pub mod error;
pub mod events;
pub mod ports;
pub mod session;

pub use error::{SessionError, SessionResult};
pub use events::{AuthEventBus, SubscriptionId};
pub use ports::{ApiError, AuthApi, CredentialStore};
pub use session::{RegisterOutcome, SessionStore};
