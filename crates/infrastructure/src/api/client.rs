//! HTTP auth API client using reqwest.
//!
//! This adapter implements the `AuthApi` port. It owns nothing but the
//! wire: envelope decoding lives in [`super::envelope`], and all session
//! semantics (what to persist, what to broadcast) stay in the
//! application layer.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use keystone_application::{ApiError, AuthApi};
use keystone_domain::{
    AuthPayload, LoginRequest, PasswordReset, RegisterPayload, StudentRegistration, UserProfile,
};

use super::config::AuthApiConfig;
use super::envelope;

#[derive(Serialize)]
struct TokenBody<'a> {
    token: &'a str,
}

#[derive(Serialize)]
struct EmailBody<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshBody<'a> {
    refresh_token: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshData {
    access_token: String,
}

/// Auth API client backed by `reqwest`.
pub struct HttpAuthApi {
    client: Client,
    config: AuthApiConfig,
}

impl HttpAuthApi {
    /// Creates a client from `config`.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: AuthApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        Ok(Self { client, config })
    }

    /// Creates a client reusing a caller-provided `reqwest::Client`.
    #[must_use]
    pub const fn with_client(client: Client, config: AuthApiConfig) -> Self {
        Self { client, config }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Sends a prepared request and returns `(status, body)`.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<(u16, Vec<u8>), ApiError> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        Ok((status, bytes.to_vec()))
    }

    fn registration_form(registration: &StudentRegistration) -> Result<Form, ApiError> {
        let mut form = Form::new()
            .text("fullName", registration.full_name.clone())
            .text("email", registration.email.clone())
            .text("password", registration.password.clone());

        for (name, value) in &registration.fields {
            form = form.text(name.clone(), value.clone());
        }

        if let Some(resume) = &registration.resume {
            let mime = mime_guess::from_path(&resume.file_name).first_or_octet_stream();
            let part = Part::bytes(resume.bytes.clone())
                .file_name(resume.file_name.clone())
                .mime_str(mime.essence_str())
                .map_err(|err| ApiError::Malformed(err.to_string()))?;
            form = form.part("resume", part);
        }

        Ok(form)
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthPayload, ApiError> {
        let (status, body) = self
            .send(self.client.post(self.endpoint("auth/login")).json(request))
            .await?;
        envelope::expect_data(status, &body)
    }

    async fn current_user(&self, access_token: &str) -> Result<UserProfile, ApiError> {
        let (status, body) = self
            .send(
                self.client
                    .get(self.endpoint("auth/me"))
                    .bearer_auth(access_token),
            )
            .await?;
        envelope::expect_data(status, &body)
    }

    async fn register_student(
        &self,
        registration: &StudentRegistration,
    ) -> Result<RegisterPayload, ApiError> {
        let form = Self::registration_form(registration)?;
        let (status, body) = self
            .send(
                self.client
                    .post(self.endpoint("auth/register/student"))
                    .multipart(form),
            )
            .await?;

        // The payload is optional here: a pending-verification response
        // carries no tokens, sometimes not even a data object.
        let parsed = envelope::parse::<RegisterPayload>(status, &body)?;
        let envelope_message = parsed.message;
        let mut payload = parsed.data.unwrap_or_default();
        if payload.message.is_none() {
            payload.message = envelope_message;
        }
        Ok(payload)
    }

    async fn verify_email(&self, token: &str) -> Result<(), ApiError> {
        let (status, body) = self
            .send(
                self.client
                    .post(self.endpoint("auth/verify-email"))
                    .json(&TokenBody { token }),
            )
            .await?;
        envelope::expect_ok(status, &body)
    }

    async fn resend_verification(&self, email: &str) -> Result<(), ApiError> {
        let (status, body) = self
            .send(
                self.client
                    .post(self.endpoint("auth/resend-verification"))
                    .json(&EmailBody { email }),
            )
            .await?;
        envelope::expect_ok(status, &body)
    }

    async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        let (status, body) = self
            .send(
                self.client
                    .post(self.endpoint("auth/forgot-password"))
                    .json(&EmailBody { email }),
            )
            .await?;
        envelope::expect_ok(status, &body)
    }

    async fn reset_password(&self, reset: &PasswordReset) -> Result<(), ApiError> {
        let (status, body) = self
            .send(
                self.client
                    .post(self.endpoint("auth/reset-password"))
                    .json(reset),
            )
            .await?;
        envelope::expect_ok(status, &body)
    }

    async fn logout(&self, access_token: &str) -> Result<(), ApiError> {
        let (status, body) = self
            .send(
                self.client
                    .post(self.endpoint("auth/logout"))
                    .bearer_auth(access_token),
            )
            .await?;
        envelope::expect_ok(status, &body)
    }

    async fn refresh_token(&self, refresh_token: &str) -> Result<String, ApiError> {
        let (status, body) = self
            .send(
                self.client
                    .post(self.endpoint("auth/refresh-token"))
                    .json(&RefreshBody { refresh_token }),
            )
            .await?;
        let data: RefreshData = envelope::expect_data(status, &body)?;
        Ok(data.access_token)
    }
}

impl std::fmt::Debug for HttpAuthApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpAuthApi")
            .field("base_url", &self.config.base_url.as_str())
            .finish_non_exhaustive()
    }
}
