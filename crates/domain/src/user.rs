//! User profile types
//!
//! The profile is whatever the server says it is: the fields the session
//! manager actually reads are modeled, everything else is carried opaquely
//! and round-trips unchanged.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Role of an authenticated user.
///
/// Known roles get their own variant; any other wire string is preserved
/// verbatim in `Other` so that roles added server-side keep round-tripping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRole {
    /// A student account.
    Student,
    /// A platform administrator.
    Admin,
    /// Any role this client does not know about, as received.
    Other(String),
}

impl UserRole {
    /// Parses a wire role string (`"STUDENT"`, `"ADMIN"`, ...).
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "STUDENT" => Self::Student,
            "ADMIN" => Self::Admin,
            _ => Self::Other(value.to_string()),
        }
    }

    /// Returns the wire form of the role.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Student => "STUDENT",
            Self::Admin => "ADMIN",
            Self::Other(value) => value,
        }
    }

    /// Returns the lowercased form persisted under the `userType` key.
    #[must_use]
    pub fn user_type(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for UserRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&value))
    }
}

/// Profile of an authenticated user.
///
/// `extra` captures every profile field the session manager does not model
/// itself; it is flattened on the wire and in the persisted copy, so opaque
/// fields survive a serialize/deserialize round trip untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Server-assigned user ID.
    pub id: String,
    /// Account email address.
    pub email: String,
    /// Account role.
    pub role: UserRole,
    /// Whether the email address has been verified.
    #[serde(default)]
    pub is_verified: bool,
    /// Whether this is the user's first login.
    #[serde(default)]
    pub is_first_login: bool,
    /// Opaque additional profile fields, passed through unchanged.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    /// Creates a profile with the fields the session manager reads.
    #[must_use]
    pub fn new(id: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            role,
            is_verified: false,
            is_first_login: false,
            extra: serde_json::Map::new(),
        }
    }
}

/// A merge patch for [`UserProfile`].
///
/// Every field is optional; absent fields leave the profile untouched.
/// This is a merge, never a replace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileUpdate {
    /// New email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    /// New verification state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    /// New first-login state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_first_login: Option<bool>,
    /// Opaque fields to merge key-wise into the profile's extras.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserProfileUpdate {
    /// A patch that marks the profile as email-verified.
    #[must_use]
    pub fn verified() -> Self {
        Self {
            is_verified: Some(true),
            ..Self::default()
        }
    }

    /// Merges this patch into `profile`, field by field.
    pub fn merge_into(self, profile: &mut UserProfile) {
        if let Some(email) = self.email {
            profile.email = email;
        }
        if let Some(role) = self.role {
            profile.role = role;
        }
        if let Some(is_verified) = self.is_verified {
            profile.is_verified = is_verified;
        }
        if let Some(is_first_login) = self.is_first_login {
            profile.is_first_login = is_first_login;
        }
        for (key, value) in self.extra {
            profile.extra.insert(key, value);
        }
    }
}
