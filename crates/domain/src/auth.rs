//! Wire-contract types for the auth API
//!
//! Request and payload shapes for the endpoints the session manager
//! consumes. Field names follow the server's camelCase convention.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::user::UserProfile;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Lowercased role the user is signing in as.
    pub user_type: String,
    /// Whether the user asked to stay signed in. Forwarded to the server;
    /// persistence is durable either way.
    pub remember: bool,
}

impl LoginRequest {
    /// Creates a login request.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        user_type: impl Into<String>,
        remember: bool,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            user_type: user_type.into(),
            remember,
        }
    }
}

/// Successful login payload: the token pair plus the signed-in profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    /// Short-lived credential for API calls.
    pub access_token: String,
    /// Long-lived credential for obtaining new access tokens.
    pub refresh_token: String,
    /// Profile of the signed-in user.
    pub user: UserProfile,
}

/// A resume file attached to a student registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    /// Original file name, used for content-type guessing server-side.
    pub file_name: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// Form data for `POST /auth/register/student` (multipart).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRegistration {
    /// Full display name.
    pub full_name: String,
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Additional form fields, forwarded verbatim.
    pub fields: BTreeMap<String, String>,
    /// Optional resume upload.
    pub resume: Option<ResumeFile>,
}

impl StudentRegistration {
    /// Creates a registration with the required fields.
    #[must_use]
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            password: password.into(),
            fields: BTreeMap::new(),
            resume: None,
        }
    }

    /// Attaches a resume file.
    #[must_use]
    pub fn with_resume(mut self, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.resume = Some(ResumeFile {
            file_name: file_name.into(),
            bytes,
        });
        self
    }

    /// Adds a passthrough form field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

/// Payload of a registration response.
///
/// A token-bearing payload establishes a session immediately; a tokenless
/// one means the account is pending email verification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    /// Access token, when the server signs the user in directly.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Refresh token, when the server signs the user in directly.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Profile of the newly registered user, when returned.
    #[serde(default)]
    pub user: Option<UserProfile>,
    /// Human-readable status message (e.g. "check your inbox").
    #[serde(default)]
    pub message: Option<String>,
}

impl RegisterPayload {
    /// Converts a token-bearing payload into an [`AuthPayload`].
    ///
    /// Returns `None` when any of the token pair or the profile is absent,
    /// i.e. when no session should be established.
    #[must_use]
    pub fn into_session(self) -> Option<AuthPayload> {
        match (self.access_token, self.refresh_token, self.user) {
            (Some(access_token), Some(refresh_token), Some(user)) => Some(AuthPayload {
                access_token,
                refresh_token,
                user,
            }),
            _ => None,
        }
    }
}

/// Body of `POST /auth/reset-password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordReset {
    /// One-time reset token from the email link.
    pub token: String,
    /// New password.
    pub password: String,
    /// New password, repeated.
    pub confirm_password: String,
}
