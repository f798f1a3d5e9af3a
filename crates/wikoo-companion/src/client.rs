// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP transport for the companion service.
//!
//! One attempt per call: no retries, and no deadline unless one is configured.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use wikoo_config::model::CompanionConfig;
use wikoo_core::WikooError;

use crate::types::ErrorResponse;

/// JSON-over-HTTP client bound to one service base URL.
#[derive(Debug, Clone)]
pub struct CompanionClient {
    client: reqwest::Client,
    base_url: String,
}

impl CompanionClient {
    pub fn new(config: &CompanionConfig) -> Result<Self, WikooError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| WikooError::Service {
            message: format!("failed to build HTTP client: {e}"),
            status: None,
            source: Some(Box::new(e)),
        })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST `body` as JSON to `path` and decode the JSON response.
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, WikooError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(path, e))?;

        let status = response.status();
        debug!(path, status = %status, "companion response received");

        let text = response
            .text()
            .await
            .map_err(|e| transport_error(path, e))?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.detail)
                .unwrap_or(text);
            return Err(WikooError::Service {
                message: format!("{path} returned {status}: {detail}"),
                status: Some(status.as_u16()),
                source: None,
            });
        }

        serde_json::from_str(&text).map_err(|e| WikooError::Service {
            message: format!("{path} returned an unreadable body: {e}"),
            status: Some(status.as_u16()),
            source: Some(Box::new(e)),
        })
    }

    /// GET the service root. Any success status counts as reachable.
    pub async fn ping(&self) -> Result<(), WikooError> {
        let response = self
            .client
            .get(self.url("/"))
            .send()
            .await
            .map_err(|e| transport_error("/", e))?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(WikooError::Service {
                message: format!("health probe returned {status}"),
                status: Some(status.as_u16()),
                source: None,
            })
        }
    }
}

fn transport_error(path: &str, e: reqwest::Error) -> WikooError {
    WikooError::Service {
        message: format!("request to {path} failed: {e}"),
        status: None,
        source: Some(Box::new(e)),
    }
}
