//! The session store
//!
//! Owns the in-memory [`Session`], orchestrates the credential store, the
//! auth API, the refresh coordinator and the event bus, and enforces the
//! lifecycle invariants: persistence is written before memory, memory
//! before the broadcast, and logout always clears locally no matter what
//! the server said.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

use keystone_domain::{
    credentials, AuthPayload, AuthStateChanged, LoginRequest, PasswordReset, Session,
    StudentRegistration, UserProfile, UserProfileUpdate, UserRole,
};

use crate::error::{SessionError, SessionResult};
use crate::events::AuthEventBus;
use crate::ports::{AuthApi, CredentialStore};
use crate::session::refresh::RefreshCoordinator;

use futures_util::FutureExt;

/// Result of a registration attempt that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
    /// The server returned a token pair; the user is now signed in.
    SessionEstablished(UserProfile),
    /// The account was created but needs email verification first; no
    /// session was established.
    VerificationPending {
        /// Status message from the server, when provided.
        message: Option<String>,
    },
}

/// The stateful core of the session subsystem.
///
/// One store is created at application start and lives for the process
/// lifetime; it is the only writer of the persisted credential keys and of
/// the in-memory [`Session`]. Cloning is cheap and yields a handle to the
/// same store.
///
/// State-mutating operations serialize on an internal gate, so correctness
/// does not depend on the UI disabling buttons while `is_loading` is set.
/// [`SessionStore::refresh_token`] deliberately stays outside that gate
/// (it is invoked from HTTP-retry paths that may overlap a gated
/// operation) and synchronizes through its single-flight coordinator
/// instead. Overlapping operations resolve in serialized order; the last
/// completed operation's state wins.
pub struct SessionStore<A, C> {
    api: Arc<A>,
    credentials: Arc<C>,
    events: Arc<AuthEventBus>,
    state: Arc<RwLock<Session>>,
    gate: Arc<Mutex<()>>,
    refresh: Arc<RefreshCoordinator>,
}

impl<A, C> Clone for SessionStore<A, C> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            credentials: Arc::clone(&self.credentials),
            events: Arc::clone(&self.events),
            state: Arc::clone(&self.state),
            gate: Arc::clone(&self.gate),
            refresh: Arc::clone(&self.refresh),
        }
    }
}

impl<A: AuthApi, C: CredentialStore> SessionStore<A, C> {
    /// Creates a store with its own event bus.
    #[must_use]
    pub fn new(api: A, credentials: C) -> Self {
        Self::with_events(api, credentials, Arc::new(AuthEventBus::new()))
    }

    /// Creates a store broadcasting on a shared event bus.
    #[must_use]
    pub fn with_events(api: A, credentials: C, events: Arc<AuthEventBus>) -> Self {
        Self {
            api: Arc::new(api),
            credentials: Arc::new(credentials),
            events,
            state: Arc::new(RwLock::new(Session::unauthenticated())),
            gate: Arc::new(Mutex::new(())),
            refresh: Arc::new(RefreshCoordinator::new()),
        }
    }

    /// A snapshot of the current session.
    pub async fn session(&self) -> Session {
        self.state.read().await.clone()
    }

    /// Whether the client currently believes a user is signed in.
    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated
    }

    /// The event bus this store broadcasts on.
    #[must_use]
    pub fn events(&self) -> &AuthEventBus {
        self.events.as_ref()
    }

    /// Restores a persisted session at startup.
    ///
    /// Requires all of the persisted access token, user type and user to
    /// be present, then validates the token against `GET /auth/me`. Any
    /// failure clears every credential key and leaves the session
    /// unauthenticated; this operation never fails. Returns whether a
    /// session was restored.
    pub async fn check_auth_state(&self) -> bool {
        let _gate = self.gate.lock().await;
        self.begin().await;

        let access_token = self.credentials.get(credentials::ACCESS_TOKEN);
        let user_type = self.credentials.get(credentials::USER_TYPE);
        let stored_user = self.credentials.get(credentials::USER);
        let (Some(access_token), Some(_), Some(_)) = (access_token, user_type, stored_user) else {
            // Nothing usable persisted. Drop stale partial keys, but the
            // session never left the unauthenticated state, so there is
            // nothing to broadcast.
            self.credentials.clear_all(&credentials::CREDENTIAL_KEYS);
            let mut state = self.state.write().await;
            *state = Session::unauthenticated();
            return false;
        };

        match self.api.current_user(&access_token).await {
            Ok(user) => {
                // Refresh the persisted profile copy before touching memory.
                match serde_json::to_string(&user) {
                    Ok(json) => self.credentials.set(credentials::USER, &json),
                    Err(err) => warn!(error = %err, "could not re-persist profile"),
                }
                let mut state = self.state.write().await;
                *state = Session::authenticated(user);
                debug!("persisted session restored");
                true
            }
            Err(err) => {
                warn!(error = %err, "stored credentials rejected; clearing session");
                self.force_unauthenticated().await;
                false
            }
        }
    }

    /// Signs a user in.
    ///
    /// On success the credential set is persisted, the in-memory session
    /// updated, and an authenticated [`AuthStateChanged`] broadcast, in
    /// that order. On failure the prior session is left untouched and the
    /// shaped failure message is recorded in [`Session::error`].
    ///
    /// # Errors
    /// Returns the user-facing message when the server rejects the
    /// credentials or the request fails in transit.
    pub async fn login(&self, request: LoginRequest) -> SessionResult<UserProfile> {
        let _gate = self.gate.lock().await;
        self.begin().await;

        match self.api.login(&request).await {
            Ok(payload) => {
                self.establish(&payload).await?;
                debug!(user = %payload.user.id, "login succeeded");
                Ok(payload.user)
            }
            Err(err) => {
                let failure = SessionError::from(err);
                self.fail(&failure.to_string()).await;
                Err(failure)
            }
        }
    }

    /// Registers a new account.
    ///
    /// Only students may self-register; any other role is rejected before
    /// any network or state activity. A token-bearing response establishes
    /// a session exactly like [`SessionStore::login`]; a tokenless
    /// response (account pending email verification) succeeds without one.
    ///
    /// # Errors
    /// Returns [`SessionError::AdminRegistrationClosed`] for non-student
    /// roles, or the shaped failure message from the server.
    pub async fn register(
        &self,
        registration: StudentRegistration,
        role: UserRole,
    ) -> SessionResult<RegisterOutcome> {
        if role != UserRole::Student {
            return Err(SessionError::AdminRegistrationClosed);
        }

        let _gate = self.gate.lock().await;
        self.begin().await;

        match self.api.register_student(&registration).await {
            Ok(payload) => {
                let message = payload.message.clone();
                if let Some(auth) = payload.into_session() {
                    self.establish(&auth).await?;
                    debug!(user = %auth.user.id, "registration signed user in");
                    Ok(RegisterOutcome::SessionEstablished(auth.user))
                } else {
                    self.settle().await;
                    Ok(RegisterOutcome::VerificationPending { message })
                }
            }
            Err(err) => {
                let failure = SessionError::from(err);
                self.fail(&failure.to_string()).await;
                Err(failure)
            }
        }
    }

    /// Signs the user out.
    ///
    /// The remote invalidation call is best-effort: its failure is logged
    /// and swallowed, because local logout must be unconditional. The
    /// local clear always happens and always precedes the unauthenticated
    /// broadcast.
    pub async fn logout(&self) {
        let _gate = self.gate.lock().await;
        self.begin().await;

        if let Some(access_token) = self.credentials.get(credentials::ACCESS_TOKEN) {
            if let Err(err) = self.api.logout(&access_token).await {
                warn!(error = %err, "remote logout failed; clearing local session anyway");
            }
        }

        self.force_unauthenticated().await;
        debug!("signed out");
    }

    /// Confirms an email address with a verification token.
    ///
    /// When a session exists, the profile's `is_verified` flag is patched
    /// in persistence and memory.
    ///
    /// # Errors
    /// Returns the shaped failure message for invalid or expired tokens.
    pub async fn verify_email_address(&self, token: &str) -> SessionResult<()> {
        self.api
            .verify_email(token)
            .await
            .map_err(SessionError::from)?;

        let _gate = self.gate.lock().await;
        self.patch_user(UserProfileUpdate::verified()).await?;
        Ok(())
    }

    /// Requests a new verification email.
    ///
    /// # Errors
    /// Returns the shaped failure message from the server.
    pub async fn resend_email_verification(&self, email: &str) -> SessionResult<()> {
        self.api
            .resend_verification(email)
            .await
            .map_err(SessionError::from)
    }

    /// Starts a password reset flow.
    ///
    /// # Errors
    /// Returns the shaped failure message from the server.
    pub async fn forgot_user_password(&self, email: &str) -> SessionResult<()> {
        self.api
            .forgot_password(email)
            .await
            .map_err(SessionError::from)
    }

    /// Completes a password reset flow.
    ///
    /// # Errors
    /// Returns the shaped failure message for invalid reset tokens or
    /// mismatched passwords.
    pub async fn reset_user_password(&self, reset: PasswordReset) -> SessionResult<()> {
        self.api
            .reset_password(&reset)
            .await
            .map_err(SessionError::from)
    }

    /// Obtains a new access token using the persisted refresh token.
    ///
    /// Concurrent callers collapse into one remote call and all receive
    /// the same outcome. On success the new access token is persisted and
    /// returned. On rejection the whole credential set is cleared, the
    /// unauthenticated state broadcast (exactly once, no matter how many
    /// callers were waiting), and the failure re-raised so HTTP-retry
    /// callers can react.
    ///
    /// # Errors
    /// [`SessionError::MissingRefreshToken`] when nothing is persisted
    /// (the session is cleared and broadcast as unauthenticated first),
    /// or the shaped failure when the server rejects the refresh token.
    pub async fn refresh_token(&self) -> SessionResult<String> {
        let Some(refresh_token) = self.credentials.get(credentials::REFRESH_TOKEN) else {
            warn!("refresh requested without a stored refresh token");
            self.force_unauthenticated().await;
            return Err(SessionError::MissingRefreshToken);
        };

        let this = self.clone();
        self.refresh
            .run(move || {
                async move {
                    match this.api.refresh_token(&refresh_token).await {
                        Ok(access_token) => {
                            this.credentials
                                .set(credentials::ACCESS_TOKEN, &access_token);
                            debug!("access token refreshed");
                            Ok(access_token)
                        }
                        Err(err) => {
                            warn!(error = %err, "refresh token rejected; clearing session");
                            let failure = SessionError::from(err);
                            this.force_unauthenticated().await;
                            Err(failure)
                        }
                    }
                }
                .boxed()
            })
            .await
    }

    /// Merges a patch into the signed-in user's profile.
    ///
    /// A merge, never a replace: absent fields keep their values, in both
    /// memory and the persisted copy. Does not contact the network.
    ///
    /// # Errors
    /// [`SessionError::NoActiveSession`] when nobody is signed in.
    pub async fn update_user(&self, update: UserProfileUpdate) -> SessionResult<UserProfile> {
        let _gate = self.gate.lock().await;
        self.patch_user(update)
            .await?
            .ok_or(SessionError::NoActiveSession)
    }

    /// Clears the session's error message.
    pub async fn clear_error(&self) {
        self.state.write().await.error = None;
    }

    /// Silently clears all session state. Test isolation only: no
    /// broadcast is emitted and no remote call is made.
    pub async fn reset(&self) {
        self.credentials.clear_all(&credentials::CREDENTIAL_KEYS);
        *self.state.write().await = Session::unauthenticated();
    }

    /// Marks an operation as in flight.
    async fn begin(&self) {
        let mut state = self.state.write().await;
        state.is_loading = true;
        state.error = None;
    }

    /// Ends an operation without changing who is signed in.
    async fn settle(&self) {
        self.state.write().await.is_loading = false;
    }

    /// Ends an operation with a user-facing failure message, leaving the
    /// prior session untouched.
    async fn fail(&self, message: &str) {
        let mut state = self.state.write().await;
        state.is_loading = false;
        state.error = Some(message.to_string());
    }

    /// Writes the full credential set for `payload`.
    fn persist_payload(&self, payload: &AuthPayload) -> SessionResult<()> {
        let user_json = serde_json::to_string(&payload.user)
            .map_err(|err| SessionError::ProfileEncoding(err.to_string()))?;

        self.credentials
            .set(credentials::ACCESS_TOKEN, &payload.access_token);
        self.credentials
            .set(credentials::REFRESH_TOKEN, &payload.refresh_token);
        self.credentials
            .set(credentials::USER_TYPE, &payload.user.role.user_type());
        self.credentials.set(credentials::USER, &user_json);
        self.credentials
            .set(credentials::IS_AUTHENTICATED, credentials::FLAG_TRUE);
        if payload.user.is_first_login {
            self.credentials
                .set(credentials::IS_FIRST_LOGIN, credentials::FLAG_TRUE);
        }
        Ok(())
    }

    /// Establishes a session: persistence, then memory, then broadcast.
    async fn establish(&self, payload: &AuthPayload) -> SessionResult<()> {
        if let Err(err) = self.persist_payload(payload) {
            self.fail(&err.to_string()).await;
            return Err(err);
        }

        {
            let mut state = self.state.write().await;
            *state = Session::authenticated(payload.user.clone());
        }

        self.events
            .emit(&AuthStateChanged::authenticated(&payload.user));
        Ok(())
    }

    /// Drops the session: clears every credential key, resets the
    /// in-memory state, then broadcasts the unauthenticated state.
    async fn force_unauthenticated(&self) {
        self.credentials.clear_all(&credentials::CREDENTIAL_KEYS);
        {
            let mut state = self.state.write().await;
            *state = Session::unauthenticated();
        }
        self.events.emit(&AuthStateChanged::unauthenticated());
    }

    /// Applies `update` to the signed-in user, persisted copy first.
    /// Returns `None` when nobody is signed in.
    async fn patch_user(&self, update: UserProfileUpdate) -> SessionResult<Option<UserProfile>> {
        let current = self.state.read().await.user.clone();
        let Some(mut user) = current else {
            return Ok(None);
        };

        update.merge_into(&mut user);
        let user_json = serde_json::to_string(&user)
            .map_err(|err| SessionError::ProfileEncoding(err.to_string()))?;
        self.credentials.set(credentials::USER, &user_json);
        self.state.write().await.user = Some(user.clone());
        Ok(Some(user))
    }
}

impl<A, C> std::fmt::Debug for SessionStore<A, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::ports::ApiError;
    use async_trait::async_trait;
    use keystone_domain::RegisterPayload;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;

    /// In-memory credential store sharing its map with the test body.
    #[derive(Clone, Default)]
    struct MapStore {
        values: Arc<StdMutex<HashMap<String, String>>>,
    }

    impl MapStore {
        fn len(&self) -> usize {
            self.values.lock().unwrap().len()
        }
    }

    impl CredentialStore for MapStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.lock().unwrap().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.values.lock().unwrap().remove(key);
        }
    }

    /// Auth API mock returning pre-scripted responses; unscripted calls
    /// panic. Counts every invocation.
    #[derive(Default)]
    struct ScriptedApi {
        login: StdMutex<Option<Result<AuthPayload, ApiError>>>,
        register: StdMutex<Option<Result<RegisterPayload, ApiError>>>,
        me: StdMutex<Option<Result<UserProfile, ApiError>>>,
        refresh: StdMutex<Option<Result<String, ApiError>>>,
        logout: StdMutex<Option<Result<(), ApiError>>>,
        verify: StdMutex<Option<Result<(), ApiError>>>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl AuthApi for ScriptedApi {
        async fn login(&self, _request: &LoginRequest) -> Result<AuthPayload, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.login.lock().unwrap().take().expect("login scripted")
        }

        async fn current_user(&self, _access_token: &str) -> Result<UserProfile, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.me.lock().unwrap().take().expect("me scripted")
        }

        async fn register_student(
            &self,
            _registration: &StudentRegistration,
        ) -> Result<RegisterPayload, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.register
                .lock()
                .unwrap()
                .take()
                .expect("register scripted")
        }

        async fn verify_email(&self, _token: &str) -> Result<(), ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.verify.lock().unwrap().take().expect("verify scripted")
        }

        async fn resend_verification(&self, _email: &str) -> Result<(), ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn forgot_password(&self, _email: &str) -> Result<(), ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn reset_password(&self, _reset: &PasswordReset) -> Result<(), ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn logout(&self, _access_token: &str) -> Result<(), ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.logout.lock().unwrap().take().expect("logout scripted")
        }

        async fn refresh_token(&self, _refresh_token: &str) -> Result<String, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.refresh
                .lock()
                .unwrap()
                .take()
                .expect("refresh scripted")
        }
    }

    fn student() -> UserProfile {
        let mut user = UserProfile::new("u1", "s@x.com", UserRole::Student);
        user.is_first_login = true;
        user.extra.insert("university".to_string(), "MIT".into());
        user
    }

    fn payload() -> AuthPayload {
        AuthPayload {
            access_token: "AT1".to_string(),
            refresh_token: "RT1".to_string(),
            user: student(),
        }
    }

    fn login_request() -> LoginRequest {
        LoginRequest::new("s@x.com", "Secret123!", "student", true)
    }

    #[tokio::test]
    async fn test_login_persists_before_broadcast() {
        let api = ScriptedApi::default();
        *api.login.lock().unwrap() = Some(Ok(payload()));
        let credentials = MapStore::default();
        let store = SessionStore::new(api, credentials.clone());

        // Record what the broadcast observer can see at delivery time.
        let observed = Arc::new(StdMutex::new(Vec::new()));
        let sink = Arc::clone(&observed);
        let snapshot = credentials.clone();
        store.events().subscribe(move |event| {
            sink.lock()
                .unwrap()
                .push((event.clone(), snapshot.get(credentials::ACCESS_TOKEN)));
        });

        let user = store.login(login_request()).await.unwrap();
        assert_eq!(user.id, "u1");

        let events = observed.lock().unwrap();
        assert_eq!(events.len(), 1);
        let (event, token_at_delivery) = &events[0];
        assert!(event.is_authenticated);
        assert_eq!(event.user_type.as_deref(), Some("student"));
        // Persistence is written before the broadcast fires.
        assert_eq!(token_at_delivery.as_deref(), Some("AT1"));

        assert_eq!(
            credentials.get(credentials::USER_TYPE).as_deref(),
            Some("student")
        );
        assert_eq!(
            credentials.get(credentials::IS_FIRST_LOGIN).as_deref(),
            Some("true")
        );

        let session = store.session().await;
        assert!(session.is_authenticated);
        assert!(!session.is_loading);
        assert_eq!(session.user.unwrap().role, UserRole::Student);
    }

    #[tokio::test]
    async fn test_login_failure_leaves_prior_session_untouched() {
        let api = ScriptedApi::default();
        *api.login.lock().unwrap() = Some(Ok(payload()));
        let credentials = MapStore::default();
        let store = SessionStore::new(api, credentials.clone());

        store.login(login_request()).await.unwrap();

        // Script a rejected second login; the mock slot was consumed.
        {
            let session = store.session().await;
            let api_err = ApiError::Rejected {
                message: "Invalid credentials".to_string(),
                status: Some(401),
            };
            assert!(session.is_authenticated);
            drop(session);
            // Reach back into the store's API handle through a fresh login.
            *store.api.login.lock().unwrap() = Some(Err(api_err));
        }

        let err = store.login(login_request()).await.unwrap_err();
        assert_eq!(err, SessionError::Auth("Invalid credentials".to_string()));

        let session = store.session().await;
        assert!(session.is_authenticated, "prior session must survive");
        assert_eq!(session.user.unwrap().id, "u1");
        assert_eq!(session.error.as_deref(), Some("Invalid credentials"));
        assert_eq!(
            credentials.get(credentials::ACCESS_TOKEN).as_deref(),
            Some("AT1")
        );
    }

    #[tokio::test]
    async fn test_logout_swallows_remote_failure() {
        let api = ScriptedApi::default();
        *api.login.lock().unwrap() = Some(Ok(payload()));
        *api.logout.lock().unwrap() = Some(Err(ApiError::Transport("boom".to_string())));
        let credentials = MapStore::default();
        let store = SessionStore::new(api, credentials.clone());

        store.login(login_request()).await.unwrap();

        let unauth_events = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&unauth_events);
        store.events().subscribe(move |event| {
            if !event.is_authenticated {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        store.logout().await;

        assert_eq!(credentials.len(), 0, "every credential key cleared");
        assert_eq!(unauth_events.load(Ordering::SeqCst), 1);
        let session = store.session().await;
        assert!(!session.is_authenticated);
        assert!(session.user.is_none());
        assert!(!session.is_loading);
    }

    #[tokio::test]
    async fn test_register_rejects_non_students_without_network() {
        let api = ScriptedApi::default();
        let calls = Arc::clone(&api.calls);
        let store = SessionStore::new(api, MapStore::default());

        let err = store
            .register(
                StudentRegistration::new("Ada", "a@x.com", "Secret123!"),
                UserRole::Admin,
            )
            .await
            .unwrap_err();

        assert_eq!(err, SessionError::AdminRegistrationClosed);
        assert_eq!(calls.load(Ordering::SeqCst), 0, "must fail before the wire");
        assert!(!store.session().await.is_loading);
    }

    #[tokio::test]
    async fn test_register_without_tokens_establishes_nothing() {
        let api = ScriptedApi::default();
        *api.register.lock().unwrap() = Some(Ok(RegisterPayload {
            message: Some("Check your inbox".to_string()),
            ..RegisterPayload::default()
        }));
        let credentials = MapStore::default();
        let store = SessionStore::new(api, credentials.clone());

        let outcome = store
            .register(
                StudentRegistration::new("Ada", "a@x.com", "Secret123!"),
                UserRole::Student,
            )
            .await
            .unwrap();

        assert_eq!(
            outcome,
            RegisterOutcome::VerificationPending {
                message: Some("Check your inbox".to_string())
            }
        );
        assert_eq!(credentials.len(), 0);
        let session = store.session().await;
        assert!(!session.is_authenticated);
        assert!(!session.is_loading);
    }

    #[tokio::test]
    async fn test_update_user_without_session_is_an_error() {
        let store = SessionStore::new(ScriptedApi::default(), MapStore::default());
        let err = store
            .update_user(UserProfileUpdate::verified())
            .await
            .unwrap_err();
        assert_eq!(err, SessionError::NoActiveSession);
    }

    #[tokio::test]
    async fn test_clear_error_only_clears_error() {
        let api = ScriptedApi::default();
        *api.login.lock().unwrap() = Some(Err(ApiError::Transport("offline".to_string())));
        let store = SessionStore::new(api, MapStore::default());

        store.login(login_request()).await.unwrap_err();
        assert!(store.session().await.error.is_some());

        store.clear_error().await;
        let session = store.session().await;
        assert!(session.error.is_none());
        assert!(!session.is_authenticated);
    }
}
