//! Authentication change events
//!
//! Payload broadcast to UI regions that are not descendants of the session
//! owner. Subscribers treat the payload as the sole source of truth for
//! re-rendering auth-dependent chrome.

use serde::{Deserialize, Serialize};

use crate::user::UserProfile;

/// Fixed name of the authentication change event.
pub const AUTH_STATE_CHANGED: &str = "authStateChanged";

/// Payload of an [`AUTH_STATE_CHANGED`] broadcast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStateChanged {
    /// Whether a user is now logged in.
    pub is_authenticated: bool,
    /// Lowercased role of the user, when authenticated.
    pub user_type: Option<String>,
    /// Profile of the user, when authenticated.
    pub user: Option<UserProfile>,
}

impl AuthStateChanged {
    /// Event announcing that `user` is now signed in.
    #[must_use]
    pub fn authenticated(user: &UserProfile) -> Self {
        Self {
            is_authenticated: true,
            user_type: Some(user.role.user_type()),
            user: Some(user.clone()),
        }
    }

    /// Event announcing that nobody is signed in.
    #[must_use]
    pub fn unauthenticated() -> Self {
        Self {
            is_authenticated: false,
            user_type: None,
            user: None,
        }
    }
}
