use std::time::Duration;

use reqwest::Client;

use crate::{
    config::SiteConfig,
    contact::{
        ContactDraft, ContactReply, ContactTransport, ErrorDetail, SubmissionError, CONTACT_PATH,
        DEFAULT_CONFIRMATION,
    },
    portfolio::{DataLoadError, PortfolioDocument, PORTFOLIO_PATH},
};

/// Thin reqwest wrapper around the two backend endpoints.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    http: Client,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn fetch_portfolio(&self) -> Result<PortfolioDocument, DataLoadError> {
        let url = self.endpoint(PORTFOLIO_PATH);
        tracing::debug!(%url, "fetching portfolio");

        let request_err = |e: reqwest::Error| DataLoadError::Request {
            url: url.clone(),
            message: e.to_string(),
        };
        let res = self.http.get(&url).send().await.map_err(request_err)?;
        let status = res.status();
        let body = res.text().await.map_err(request_err)?;

        if !status.is_success() {
            return Err(DataLoadError::Status {
                url,
                status: status.as_u16(),
                detail: error_detail(&body),
            });
        }
        PortfolioDocument::from_json(&url, &body)
    }
}

fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorDetail>(body)
        .ok()
        .map(|d| d.detail)
        .filter(|d| !d.is_empty())
}

impl ContactTransport for BackendClient {
    async fn send(&self, draft: &ContactDraft) -> Result<String, SubmissionError> {
        let url = self.endpoint(CONTACT_PATH);
        let res = self.http.post(&url).json(draft).send().await.map_err(|e| {
            tracing::warn!(%url, "contact request failed: {e}");
            SubmissionError::Unavailable
        })?;

        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        if status.is_success() {
            return Ok(serde_json::from_str::<ContactReply>(&body)
                .map(|r| r.message)
                .unwrap_or_else(|e| {
                    tracing::warn!(%url, "unexpected contact reply: {e}");
                    DEFAULT_CONFIRMATION.to_string()
                }));
        }

        tracing::warn!(%url, %status, "contact rejected by backend");
        Err(error_detail(&body)
            .map(SubmissionError::Rejected)
            .unwrap_or(SubmissionError::Unavailable))
    }
}

/// Stand-in used when no backend is configured: wait, then confirm.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedChannel {
    delay: Duration,
}

impl SimulatedChannel {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl ContactTransport for SimulatedChannel {
    async fn send(&self, draft: &ContactDraft) -> Result<String, SubmissionError> {
        tokio::time::sleep(self.delay).await;
        tracing::info!(email = %draft.email, "contact message accepted (simulated)");
        Ok(DEFAULT_CONFIRMATION.to_string())
    }
}

#[derive(Debug, Clone)]
pub enum ContactChannel {
    Backend(BackendClient),
    Simulated(SimulatedChannel),
}

impl ContactChannel {
    pub fn from_config(config: &SiteConfig) -> Result<Self, SubmissionError> {
        match &config.backend_url {
            Some(url) => BackendClient::new(url.as_str(), config.backend_timeout)
                .map(Self::Backend)
                .map_err(|e| {
                    tracing::error!("couldn't build backend client: {e}");
                    SubmissionError::Unavailable
                }),
            None => Ok(Self::Simulated(SimulatedChannel::new(config.contact_delay))),
        }
    }
}

impl ContactTransport for ContactChannel {
    async fn send(&self, draft: &ContactDraft) -> Result<String, SubmissionError> {
        match self {
            Self::Backend(client) => client.send(draft).await,
            Self::Simulated(channel) => channel.send(draft).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn client(server: &MockServer) -> BackendClient {
        BackendClient::new(server.base_url(), Duration::from_secs(5)).unwrap()
    }

    fn draft() -> ContactDraft {
        ContactDraft {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            message: "Hello there, I'd love to collaborate.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_portfolio() {
        let server = MockServer::start_async().await;
        let doc = PortfolioDocument::embedded().unwrap();
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/portfolio");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::to_value(&doc).unwrap());
            })
            .await;

        let fetched = client(&server).fetch_portfolio().await.unwrap();
        mock.assert_async().await;
        assert_eq!(fetched, doc);
    }

    #[tokio::test]
    async fn test_fetch_portfolio_status_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/portfolio");
                then.status(404)
                    .json_body(json!({"detail": "Portfolio data not found. Please seed the database."}));
            })
            .await;

        let err = client(&server).fetch_portfolio().await.unwrap_err();
        assert_eq!(
            err,
            DataLoadError::Status {
                url: server.url("/api/portfolio"),
                status: 404,
                detail: Some("Portfolio data not found. Please seed the database.".to_string()),
            }
        );
        assert_eq!(err.target_url(), Some(server.url("/api/portfolio").as_str()));
    }

    #[tokio::test]
    async fn test_fetch_portfolio_malformed() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/portfolio");
                then.status(200).json_body(json!({"personal": {"name": "Jane"}}));
            })
            .await;

        let err = client(&server).fetch_portfolio().await.unwrap_err();
        assert!(matches!(err, DataLoadError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_fetch_portfolio_unreachable() {
        let client = BackendClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = client.fetch_portfolio().await.unwrap_err();
        assert!(matches!(err, DataLoadError::Request { .. }));
        assert_eq!(err.target_url(), Some("http://127.0.0.1:9/api/portfolio"));
    }

    #[tokio::test]
    async fn test_contact_success_uses_reply_verbatim() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/contact").json_body(json!({
                    "name": "Jane",
                    "email": "jane@x.com",
                    "message": "Hello there, I'd love to collaborate."
                }));
                then.status(200).json_body(json!({"message": "Got it, Jane!"}));
            })
            .await;

        let reply = client(&server).send(&draft()).await.unwrap();
        mock.assert_async().await;
        assert_eq!(reply, "Got it, Jane!");
    }

    #[tokio::test]
    async fn test_contact_error_detail() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/contact");
                then.status(500).json_body(json!({"detail": "Mail server down"}));
            })
            .await;

        let err = client(&server).send(&draft()).await.unwrap_err();
        assert_eq!(err, SubmissionError::Rejected("Mail server down".to_string()));
    }

    #[tokio::test]
    async fn test_contact_error_without_detail() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/contact");
                then.status(502).body("Bad Gateway");
            })
            .await;

        let err = client(&server).send(&draft()).await.unwrap_err();
        assert_eq!(err, SubmissionError::Unavailable);
        assert_eq!(
            err.to_string(),
            "Failed to send message. Please try again later."
        );
    }

    #[tokio::test]
    async fn test_simulated_channel_confirms() {
        let config = SiteConfig {
            contact_delay: Duration::from_millis(5),
            ..SiteConfig::default()
        };
        let channel = ContactChannel::from_config(&config).unwrap();
        assert!(matches!(channel, ContactChannel::Simulated(_)));
        assert_eq!(
            channel.send(&draft()).await.unwrap(),
            DEFAULT_CONFIRMATION
        );
    }

    #[test]
    fn test_endpoint_joins_cleanly() {
        let client = BackendClient::new("https://api.example.com/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.endpoint(PORTFOLIO_PATH),
            "https://api.example.com/api/portfolio"
        );
    }
}
