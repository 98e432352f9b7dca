//! Auth API port
//!
//! Defines the interface to the remote authentication service. The session
//! store never builds HTTP requests itself; it talks to this trait and the
//! infrastructure layer supplies the wire adapter.

use async_trait::async_trait;
use keystone_domain::{
    AuthPayload, LoginRequest, PasswordReset, RegisterPayload, StudentRegistration, UserProfile,
};

/// Errors returned by the auth API adapter.
///
/// `Rejected` carries the message already shaped by the server's error
/// envelope (`error` field first, then `message`, then a generic
/// fallback); the session store passes it through to the user untouched.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a structured failure.
    #[error("{message}")]
    Rejected {
        /// User-facing message extracted from the error envelope.
        message: String,
        /// HTTP status code, when the failure came with one.
        status: Option<u16>,
    },

    /// The request never completed (DNS, connect, timeout, ...).
    #[error("network error: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("unexpected response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// The string to surface to the user for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Whether the server explicitly rejected the caller's credentials.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::Rejected {
                status: Some(401),
                ..
            }
        )
    }
}

/// Port for the remote authentication service.
#[async_trait]
pub trait AuthApi: Send + Sync + 'static {
    /// `POST /auth/login`.
    ///
    /// # Errors
    /// Returns an error when the credentials are rejected or the request
    /// fails in transit.
    async fn login(&self, request: &LoginRequest) -> Result<AuthPayload, ApiError>;

    /// `GET /auth/me` with the given access token.
    ///
    /// # Errors
    /// Returns an error when the token is invalid or expired, or on
    /// transport failure.
    async fn current_user(&self, access_token: &str) -> Result<UserProfile, ApiError>;

    /// `POST /auth/register/student` (multipart form).
    ///
    /// # Errors
    /// Returns an error when registration is rejected (duplicate email,
    /// invalid data) or on transport failure.
    async fn register_student(
        &self,
        registration: &StudentRegistration,
    ) -> Result<RegisterPayload, ApiError>;

    /// `POST /auth/verify-email`.
    ///
    /// # Errors
    /// Returns an error for invalid or expired verification tokens.
    async fn verify_email(&self, token: &str) -> Result<(), ApiError>;

    /// `POST /auth/resend-verification`.
    ///
    /// # Errors
    /// Returns an error when the address is unknown or on transport
    /// failure.
    async fn resend_verification(&self, email: &str) -> Result<(), ApiError>;

    /// `POST /auth/forgot-password`.
    ///
    /// # Errors
    /// Returns an error when the address is unknown or on transport
    /// failure.
    async fn forgot_password(&self, email: &str) -> Result<(), ApiError>;

    /// `POST /auth/reset-password`.
    ///
    /// # Errors
    /// Returns an error for invalid reset tokens or mismatched passwords.
    async fn reset_password(&self, reset: &PasswordReset) -> Result<(), ApiError>;

    /// `POST /auth/logout`. Best-effort server-side invalidation; the
    /// caller is expected to clear local state regardless of the outcome.
    ///
    /// # Errors
    /// Returns an error on transport failure or server rejection.
    async fn logout(&self, access_token: &str) -> Result<(), ApiError>;

    /// `POST /auth/refresh-token`. Returns the new access token.
    ///
    /// # Errors
    /// Returns an error when the refresh token is rejected or on transport
    /// failure.
    async fn refresh_token(&self, refresh_token: &str) -> Result<String, ApiError>;
}
