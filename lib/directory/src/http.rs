//! HTTP implementation of the directory client.
//!
//! The directory service exposes a single URL; operations are selected with
//! an `endpoint` query parameter and answered with a uniform JSON envelope:
//! `{ "success": bool, "data": T | null, "errorMessage": string? }`.
//! Transport-level retry and backoff are the embedder's concern, not this
//! client's: failures are classified and surfaced, never retried here.

use crate::client::DirectoryClient;
use crate::config::DirectoryConfig;
use crate::error::DirectoryError;
use crate::types::{BootstrapCredential, Identity};
use async_trait::async_trait;
use rosterkit_core::Email;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

/// The uniform response envelope of the directory service.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEnvelope<T> {
    success: bool,
    data: Option<T>,
    #[serde(default)]
    error_message: Option<String>,
}

/// Payload of the `checkUser` endpoint.
#[derive(Debug, Deserialize)]
struct ExistsPayload {
    exists: bool,
}

/// Payload of the `provisioningCredential` endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BootstrapPayload {
    default_password: String,
    display_name: String,
}

/// Directory client over the HTTP wire contract.
#[derive(Debug, Clone)]
pub struct HttpDirectoryClient {
    http: reqwest::Client,
    config: DirectoryConfig,
}

impl HttpDirectoryClient {
    /// Creates a client from a directory configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Config`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: DirectoryConfig) -> Result<Self, DirectoryError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| DirectoryError::Config {
                reason: e.to_string(),
            })?;

        Ok(Self { http, config })
    }

    /// Performs one endpoint call and unwraps the response envelope.
    ///
    /// `Ok(None)` means the directory answered successfully with a null
    /// payload, which the endpoints use for "no such record".
    async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        email: &Email,
    ) -> Result<Option<T>, DirectoryError> {
        let response = self
            .http
            .get(self.config.base_url())
            .query(&[("endpoint", endpoint), ("email", email.as_str())])
            .send()
            .await
            .map_err(|e| DirectoryError::Transient {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if status.is_server_error() {
            return Err(DirectoryError::Transient {
                reason: format!("directory returned {status}"),
            });
        }
        if status.is_client_error() {
            return Err(DirectoryError::Permanent {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("client error")
                    .to_string(),
            });
        }
        let envelope: ApiEnvelope<T> =
            response
                .json()
                .await
                .map_err(|e| DirectoryError::Decode {
                    reason: e.to_string(),
                })?;

        if !envelope.success {
            return Err(DirectoryError::Rejected {
                message: envelope
                    .error_message
                    .unwrap_or_else(|| "unspecified directory error".to_string()),
            });
        }

        Ok(envelope.data)
    }
}

#[async_trait]
impl DirectoryClient for HttpDirectoryClient {
    #[instrument(skip(self), fields(email = %email))]
    async fn exists(&self, email: &Email) -> Result<bool, DirectoryError> {
        let payload: ExistsPayload = self
            .call("checkUser", email)
            .await?
            .ok_or_else(|| DirectoryError::Decode {
                reason: "checkUser returned no payload".to_string(),
            })?;

        debug!(exists = payload.exists, "directory existence check");
        Ok(payload.exists)
    }

    #[instrument(skip(self), fields(email = %email))]
    async fn fetch_identity(&self, email: &Email) -> Result<Option<Identity>, DirectoryError> {
        let identity: Option<Identity> = self.call("getUser", email).await?;
        debug!(found = identity.is_some(), "directory identity fetch");
        Ok(identity)
    }

    #[instrument(skip(self), fields(email = %email))]
    async fn fetch_bootstrap_credential(
        &self,
        email: &Email,
    ) -> Result<Option<BootstrapCredential>, DirectoryError> {
        let payload: Option<BootstrapPayload> =
            self.call("provisioningCredential", email).await?;
        debug!(
            unprovisioned = payload.is_some(),
            "directory bootstrap credential fetch"
        );

        Ok(payload.map(|p| BootstrapCredential {
            email: email.clone(),
            default_password: p.default_password,
            display_name: p.display_name,
        }))
    }
}
