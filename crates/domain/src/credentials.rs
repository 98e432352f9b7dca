//! Persisted credential key schema
//!
//! The durable key-value store holds string values under these fixed keys.
//! The boolean-ish keys (`isAuthenticated`, `isFirstLogin`) hold the
//! literal `"true"` when set and are absent otherwise.

/// Key holding the short-lived access token.
pub const ACCESS_TOKEN: &str = "accessToken";

/// Key holding the long-lived refresh token.
pub const REFRESH_TOKEN: &str = "refreshToken";

/// Key holding the lowercased role of the signed-in user.
pub const USER_TYPE: &str = "userType";

/// Key holding the JSON-serialized [`crate::UserProfile`].
pub const USER: &str = "user";

/// Key present (as `"true"`) while a session is established.
pub const IS_AUTHENTICATED: &str = "isAuthenticated";

/// Key present (as `"true"`) when the server marked the login as the
/// user's first.
pub const IS_FIRST_LOGIN: &str = "isFirstLogin";

/// Value stored under the boolean-ish keys when set.
pub const FLAG_TRUE: &str = "true";

/// Every credential key, in the order they are written. Logout and failed
/// startup checks clear exactly this set.
pub const CREDENTIAL_KEYS: [&str; 6] = [
    ACCESS_TOKEN,
    REFRESH_TOKEN,
    USER_TYPE,
    USER,
    IS_AUTHENTICATED,
    IS_FIRST_LOGIN,
];
