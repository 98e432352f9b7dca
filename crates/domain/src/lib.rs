//! Keystone Domain - Core session types
//!
//! This crate defines the domain model for the Keystone session manager.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod credentials;
pub mod event;
pub mod id;
pub mod session;
pub mod user;

pub use auth::{
    AuthPayload, LoginRequest, PasswordReset, RegisterPayload, ResumeFile, StudentRegistration,
};
pub use event::{AuthStateChanged, AUTH_STATE_CHANGED};
pub use id::generate_id;
pub use session::Session;
pub use user::{UserProfile, UserProfileUpdate, UserRole};
