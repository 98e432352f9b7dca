//! In-memory session state
//!
//! One `Session` value exists for the lifetime of the client process. It is
//! never torn down; logout and credential failure re-derive it to the
//! unauthenticated state.

use serde::{Deserialize, Serialize};

use crate::user::UserProfile;

/// The in-memory session: who the client believes is logged in, plus the
/// transient loading/error state of the operation currently in flight.
///
/// Invariant: `is_authenticated` is true exactly when `user` is present,
/// except while an operation is mid-flight (`is_loading == true`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The authenticated user's profile, if any.
    pub user: Option<UserProfile>,
    /// Whether the client currently believes a user is logged in.
    pub is_authenticated: bool,
    /// Whether a session-mutating operation is in flight.
    pub is_loading: bool,
    /// User-facing message from the last failed operation.
    pub error: Option<String>,
}

impl Session {
    /// The unauthenticated session, as at application start.
    #[must_use]
    pub fn unauthenticated() -> Self {
        Self::default()
    }

    /// A settled session for `user`.
    #[must_use]
    pub fn authenticated(user: UserProfile) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            is_loading: false,
            error: None,
        }
    }

    /// The lowercased role of the current user, if any.
    #[must_use]
    pub fn user_type(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.role.user_type())
    }
}
