// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP companion service adapter for Wikoo.
//!
//! Implements [`CompanionService`] against the report, chat, and reminder
//! endpoints of the Wikoo backend.

pub mod client;
pub mod types;

use async_trait::async_trait;
use tracing::{debug, instrument};
use wikoo_config::model::CompanionConfig;
use wikoo_core::{
    AdapterType, CalendarReminder, ChatRequest, CompanionService, EmailReminder, HealthStatus,
    PluginAdapter, ReportRequest, WikooError,
};

pub use client::CompanionClient;
use types::{ChatResponse, ReminderResponse, ReportResponse};

pub const REPORT_PATH: &str = "/api/report/generate";
pub const CHAT_PATH: &str = "/api/chat";
pub const CALENDAR_REMINDER_PATH: &str = "/api/reminder/calendar";
pub const EMAIL_REMINDER_PATH: &str = "/api/reminder/email";

/// Companion service reached over HTTP.
pub struct HttpCompanion {
    client: CompanionClient,
}

impl HttpCompanion {
    pub fn new(config: &CompanionConfig) -> Result<Self, WikooError> {
        Ok(Self {
            client: CompanionClient::new(config)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

#[async_trait]
impl PluginAdapter for HttpCompanion {
    fn name(&self) -> &str {
        "http-companion"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Companion
    }

    async fn health_check(&self) -> Result<HealthStatus, WikooError> {
        Ok(match self.client.ping().await {
            Ok(()) => HealthStatus::Healthy,
            Err(e) => HealthStatus::Unhealthy(e.to_string()),
        })
    }

    async fn shutdown(&self) -> Result<(), WikooError> {
        Ok(())
    }
}

#[async_trait]
impl CompanionService for HttpCompanion {
    #[instrument(skip_all, fields(lang = %request.lang, date = %request.date))]
    async fn generate_report(&self, request: &ReportRequest) -> Result<String, WikooError> {
        let resp: ReportResponse = self.client.post_json(REPORT_PATH, request).await?;
        if resp.report.trim().is_empty() {
            return Err(WikooError::Service {
                message: "report service returned an empty report".into(),
                status: None,
                source: None,
            });
        }
        debug!(chars = resp.report.chars().count(), "report generated");
        Ok(resp.report)
    }

    #[instrument(skip_all, fields(lang = %request.lang))]
    async fn chat_reply(&self, request: &ChatRequest) -> Result<String, WikooError> {
        let resp: ChatResponse = self.client.post_json(CHAT_PATH, request).await?;
        Ok(resp.reply)
    }

    async fn calendar_reminder(
        &self,
        reminder: &CalendarReminder,
    ) -> Result<String, WikooError> {
        let resp: ReminderResponse = self
            .client
            .post_json(CALENDAR_REMINDER_PATH, reminder)
            .await?;
        Ok(resp.message)
    }

    async fn email_reminder(&self, reminder: &EmailReminder) -> Result<String, WikooError> {
        let resp: ReminderResponse = self.client.post_json(EMAIL_REMINDER_PATH, reminder).await?;
        Ok(resp.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn companion(uri: &str) -> HttpCompanion {
        HttpCompanion::new(&CompanionConfig {
            base_url: uri.to_string(),
            request_timeout_secs: None,
            connect_timeout_secs: None,
        })
        .unwrap()
    }

    fn report_request() -> ReportRequest {
        ReportRequest {
            chat_context: "I feel great today\n\nI am happy".into(),
            date: "19/10/2026".into(),
            lang: "en".into(),
            mood_score: 1.0,
        }
    }

    #[tokio::test]
    async fn generate_report_posts_context() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(REPORT_PATH))
            .and(body_json(serde_json::json!({
                "chat_context": "I feel great today\n\nI am happy",
                "date": "19/10/2026",
                "lang": "en",
                "mood_score": 1.0
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"report": "You are doing well."})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let report = companion(&server.uri())
            .generate_report(&report_request())
            .await
            .unwrap();
        assert_eq!(report, "You are doing well.");
    }

    #[tokio::test]
    async fn empty_report_is_a_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(REPORT_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let err = companion(&server.uri())
            .generate_report(&report_request())
            .await
            .unwrap_err();
        assert!(err.is_service());
    }

    #[tokio::test]
    async fn report_server_error_is_attempted_once() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(REPORT_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let err = companion(&server.uri())
            .generate_report(&report_request())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn chat_reply_may_be_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(CHAT_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"reply": ""})))
            .mount(&server)
            .await;

        let reply = companion(&server.uri())
            .chat_reply(&ChatRequest {
                message: "hello".into(),
                lang: "ta".into(),
            })
            .await
            .unwrap();
        assert!(reply.is_empty());
    }

    #[tokio::test]
    async fn reminders_return_confirmation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(CALENDAR_REMINDER_PATH))
            .and(body_json(serde_json::json!({
                "title": "Daily Wellness Exercise",
                "description": "From your Wikoo report — take a walk or stretch!"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"message": "Calendar event created"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(EMAIL_REMINDER_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "Email sent"})),
            )
            .mount(&server)
            .await;

        let c = companion(&server.uri());
        assert_eq!(
            c.calendar_reminder(&CalendarReminder::default()).await.unwrap(),
            "Calendar event created"
        );
        assert_eq!(
            c.email_reminder(&EmailReminder::default()).await.unwrap(),
            "Email sent"
        );
    }

    #[tokio::test]
    async fn health_check_reports_unreachable() {
        let c = companion("http://127.0.0.1:9");
        assert!(matches!(
            c.health_check().await.unwrap(),
            HealthStatus::Unhealthy(_)
        ));
        assert_eq!(c.adapter_type(), AdapterType::Companion);
    }
}
