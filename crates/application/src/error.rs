//! Application error types

use thiserror::Error;

use crate::ports::ApiError;

/// Errors surfaced by session store operations.
///
/// The message of an `Auth` error is the user-facing string: a pass-through
/// of the server's structured error when one exists, the transport error
/// otherwise. `Clone` so that every waiter on a collapsed token refresh can
/// receive the same failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// An auth operation was rejected or could not be completed; the
    /// message is ready to show to the user.
    #[error("{0}")]
    Auth(String),

    /// A token refresh was requested with no refresh token persisted.
    #[error("no refresh token available")]
    MissingRefreshToken,

    /// Admin accounts are provisioned manually; self-registration is
    /// permanently disabled.
    #[error("admin registration is disabled; accounts are provisioned by the platform team")]
    AdminRegistrationClosed,

    /// The operation needs an established session and none exists.
    #[error("no active session")]
    NoActiveSession,

    /// The profile could not be serialized for persistence.
    #[error("failed to encode profile: {0}")]
    ProfileEncoding(String),
}

impl From<ApiError> for SessionError {
    fn from(err: ApiError) -> Self {
        Self::Auth(err.user_message())
    }
}

/// Result type alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_becomes_user_facing_message() {
        let err = SessionError::from(ApiError::Rejected {
            message: "Invalid credentials".to_string(),
            status: Some(401),
        });
        assert_eq!(err, SessionError::Auth("Invalid credentials".to_string()));
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_transport_error_message_passes_through() {
        let err = SessionError::from(ApiError::Transport("connection refused".to_string()));
        assert_eq!(err.to_string(), "network error: connection refused");
    }
}
