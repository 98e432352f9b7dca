//! Reqwest-based auth API adapter.

mod client;
mod config;
mod envelope;

pub use client::HttpAuthApi;
pub use config::AuthApiConfig;
