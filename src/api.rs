//! HTTP client for the task/login API.
//!
//! ARCHITECTURE
//! ============
//! `ApiClient` is the session context: base URL, connection pool, and
//! token store behind one handle. Each operation maps to one endpoint
//! and returns the parsed response body, leaving presentation to the
//! caller.
//!
//! ERROR HANDLING
//! ==============
//! The API reports request failures as JSON payloads, so non-success
//! statuses still yield the body for display. Only transport failures,
//! non-JSON bodies, and missing required fields are errors.

use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;

use crate::store::TokenStore;
use crate::types::{Credentials, TaskInput, assemble_draft};

/// Header carrying the authority token on protected endpoints.
pub const AUTHORITY_HEADER: &str = "authority";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("missing expected field `{0}`")]
    MissingField(&'static str),
    #[error("token store error: {0}")]
    Store(#[from] std::io::Error),
}

/// Session context for talking to the task API.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    store: Box<dyn TokenStore>,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>, store: impl TokenStore + 'static) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
            store: Box::new(store),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn authority_headers(&self) -> Result<HeaderMap, ApiError> {
        let token = self.store.load()?;
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORITY_HEADER, HeaderValue::from_str(&token)?);
        Ok(headers)
    }

    /// POST credentials to `/api/login`. On a success status the body's
    /// `authority` field is persisted to the token store; the full body
    /// is returned for display either way.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-JSON bodies, or a success body
    /// without a string `authority` field. The stored token is left
    /// untouched on every error path.
    pub async fn login(&self, credentials: &Credentials) -> Result<Value, ApiError> {
        let response = self
            .http
            .post(self.url("/api/login"))
            .json(credentials)
            .send()
            .await?;
        let status = response.status();
        let body = response.json::<Value>().await?;

        if status.is_success() {
            let authority = body
                .get("authority")
                .and_then(Value::as_str)
                .ok_or(ApiError::MissingField("authority"))?;
            self.store.save(authority)?;
            tracing::debug!(status = %status, "login succeeded; authority token stored");
        } else {
            tracing::debug!(status = %status, "login rejected");
        }

        Ok(body)
    }

    /// POST credentials to `/api/user` to register an account. The body
    /// is parsed and returned with no success/failure branching.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-JSON body.
    pub async fn create_user(&self, credentials: &Credentials) -> Result<Value, ApiError> {
        let response = self
            .http
            .post(self.url("/api/user"))
            .json(credentials)
            .send()
            .await?;
        Ok(response.json::<Value>().await?)
    }

    /// GET `/api/user` with the stored token.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-JSON body.
    pub async fn current_user(&self) -> Result<Value, ApiError> {
        let response = self
            .http
            .get(self.url("/api/user"))
            .headers(self.authority_headers()?)
            .send()
            .await?;
        Ok(response.json::<Value>().await?)
    }

    /// GET `/api/task` with the stored token.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-JSON body.
    pub async fn list_tasks(&self) -> Result<Value, ApiError> {
        let response = self
            .http
            .get(self.url("/api/task"))
            .headers(self.authority_headers()?)
            .send()
            .await?;
        Ok(response.json::<Value>().await?)
    }

    /// Create a task for the current user: fetch the user record for
    /// its `userId`, stamp `assign_date` with today's UTC date, and
    /// POST the draft to `/api/task`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-JSON bodies, or a user record
    /// without a string `userId` field.
    pub async fn create_task(&self, input: &TaskInput) -> Result<Value, ApiError> {
        let user = self.current_user().await?;
        tracing::debug!(user = %user, "fetched current user");
        let user_id = user
            .get("userId")
            .and_then(Value::as_str)
            .ok_or(ApiError::MissingField("userId"))?;

        let draft = assemble_draft(input, user_id, Utc::now().date_naive());
        tracing::debug!(draft = ?draft, "submitting task draft");

        let response = self
            .http
            .post(self.url("/api/task"))
            .headers(self.authority_headers()?)
            .json(&draft)
            .send()
            .await?;
        Ok(response.json::<Value>().await?)
    }

    /// Clear the stored token to the empty string. No server call.
    ///
    /// # Errors
    ///
    /// Fails if the token store cannot be written.
    pub fn deauth(&self) -> Result<(), ApiError> {
        self.store.clear()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
