//! HTTP client for the activities service
//!
//! This module provides:
//! - The `ActivitiesApi` trait the view synchronizer talks through
//! - The reqwest-backed `HttpApi` implementation
//! - `ApiError`, separating transport failures from server rejections
//!
//! The service contract is three endpoints: list the catalog, sign a
//! participant up, remove a participant. Path segments are percent-encoded
//! before transmission; query values are encoded by the request builder.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::model::ActivityCatalog;

/// Errors crossing the client boundary
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure: unreachable host, timeout, broken connection
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response arrived but its body could not be parsed
    #[error("malformed response: {0}")]
    Decode(String),

    /// The server answered with a non-success status
    #[error("rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },
}

impl ApiError {
    fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e)
        }
    }
}

/// Success body of the two mutation endpoints
#[derive(Deserialize, Debug)]
struct MessageBody {
    message: String,
}

/// Error body of a non-success response
#[derive(Deserialize, Debug, Default)]
struct DetailBody {
    detail: Option<String>,
}

/// The seam between the synchronizer and the external service
#[async_trait]
pub trait ActivitiesApi: Send + Sync {
    /// Fetches the full activity catalog
    async fn list_activities(&self) -> Result<ActivityCatalog, ApiError>;

    /// Registers `email` for `activity`; returns the server's message
    async fn sign_up(&self, activity: &str, email: &str) -> Result<String, ApiError>;

    /// Removes `email` from `activity`; returns the server's message
    async fn remove_participant(&self, activity: &str, email: &str) -> Result<String, ApiError>;
}

/// HTTP implementation of [`ActivitiesApi`]
pub struct HttpApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpApi {
    /// Creates a client for the service at `base_url` (no trailing slash)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Transport)?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn activities_url(&self) -> String {
        format!("{}/activities", self.base_url)
    }

    fn signup_url(&self, activity: &str) -> String {
        format!(
            "{}/activities/{}/signup",
            self.base_url,
            urlencoding::encode(activity)
        )
    }

    fn participants_url(&self, activity: &str) -> String {
        format!(
            "{}/activities/{}/participants",
            self.base_url,
            urlencoding::encode(activity)
        )
    }

    /// Converts a non-success response into [`ApiError::Rejected`], keeping
    /// the server's `detail` when the body carries one
    async fn rejection(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let detail = match response.bytes().await {
            Ok(bytes) => serde_json::from_slice::<DetailBody>(&bytes)
                .unwrap_or_default()
                .detail,
            Err(_) => None,
        };
        ApiError::Rejected { status, detail }
    }

    async fn read_message(response: reqwest::Response) -> Result<String, ApiError> {
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        let body: MessageBody = response.json().await.map_err(ApiError::from_reqwest)?;
        Ok(body.message)
    }
}

#[async_trait]
impl ActivitiesApi for HttpApi {
    async fn list_activities(&self) -> Result<ActivityCatalog, ApiError> {
        let response = self
            .client
            .get(self.activities_url())
            .send()
            .await
            .map_err(ApiError::Transport)?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        response.json().await.map_err(ApiError::from_reqwest)
    }

    async fn sign_up(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .post(self.signup_url(activity))
            .query(&[("email", email)])
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Self::read_message(response).await
    }

    async fn remove_participant(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .delete(self.participants_url(activity))
            .query(&[("email", email)])
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Self::read_message(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> HttpApi {
        HttpApi::new("http://localhost:8000", Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_signup_url_encodes_path_segment() {
        assert_eq!(
            api().signup_url("Arts & Crafts #1"),
            "http://localhost:8000/activities/Arts%20%26%20Crafts%20%231/signup"
        );
    }

    #[test]
    fn test_participants_url_plain_name() {
        assert_eq!(
            api().participants_url("Chess Club"),
            "http://localhost:8000/activities/Chess%20Club/participants"
        );
    }

    #[test]
    fn test_detail_body_tolerates_missing_field() {
        let body: DetailBody = serde_json::from_str("{}").unwrap();
        assert!(body.detail.is_none());

        let body: DetailBody = serde_json::from_str(r#"{"detail": "Already signed up"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("Already signed up"));
    }
}
