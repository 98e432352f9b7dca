//! Keystone Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer: the reqwest-based auth API
//! client and the credential store adapters.

pub mod api;
pub mod persistence;

pub use api::{AuthApiConfig, HttpAuthApi};
pub use persistence::{FileCredentialStore, MemoryCredentialStore};
