//! HTTP client for the Hale REST API.
//!
//! One outstanding request at a time per surface: the form submits once, the
//! dashboard fetches once. There is no retry policy; a failed call surfaces
//! to the caller and user-initiated re-submission is the only recovery path.

use reqwest::{Client, Response, StatusCode};

use api_shared::model::{AssessmentAnswers, ChatReq, ChatRes, ResultRecord};
use hale_core::dashboard::{DashboardState, DashboardView};

/// Errors surfaced to the calling UI.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(StatusCode),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Bearer-authenticated client against one Hale server.
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
            token: token.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Submits the answers record for scoring.
    ///
    /// Borrows the answers so a failed submit leaves the form state
    /// untouched; the caller consumes the form only after success.
    pub async fn submit_assessment(&self, answers: &AssessmentAnswers) -> ClientResult<ResultRecord> {
        let response = self
            .http
            .post(self.endpoint("/api/health-assessment"))
            .bearer_auth(&self.token)
            .json(answers)
            .send()
            .await?;

        Ok(expect_success(response)?.json().await?)
    }

    /// Fetches the most recently scored record.
    pub async fn fetch_dashboard(&self) -> ClientResult<ResultRecord> {
        let response = self
            .http
            .get(self.endpoint("/api/dashboard"))
            .bearer_auth(&self.token)
            .send()
            .await?;

        Ok(expect_success(response)?.json().await?)
    }

    /// Sends a chat message and returns the bot reply.
    pub async fn send_chat(&self, message: &str) -> ClientResult<String> {
        let response = self
            .http
            .post(self.endpoint("/api/chatbot"))
            .bearer_auth(&self.token)
            .json(&ChatReq {
                message: message.to_owned(),
            })
            .send()
            .await?;

        let body: ChatRes = expect_success(response)?.json().await?;
        Ok(body.reply)
    }

    /// Drives one dashboard mount to its terminal state.
    ///
    /// A pre-supplied record skips the network entirely; otherwise a single
    /// fetch decides between `Ready` and `Error`. No partial rendering, no
    /// retry loop.
    pub async fn load_dashboard(&self, supplied: Option<ResultRecord>) -> DashboardState {
        let record = match supplied {
            Some(record) => record,
            None => match self.fetch_dashboard().await {
                Ok(record) => record,
                Err(err) => {
                    tracing::error!("dashboard fetch failed: {err}");
                    return DashboardState::Error(err.to_string());
                }
            },
        };

        DashboardState::Ready(Box::new(DashboardView::from_record(&record)))
    }
}

fn expect_success(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ClientError::Status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_shared::model::UserProfile;

    fn record_for(name: &str) -> ResultRecord {
        ResultRecord {
            user: UserProfile {
                name: name.into(),
                age: None,
                blood_type: None,
                height: None,
                weight: None,
            },
            health_assessment: None,
            recommendations: None,
            metrics: None,
            checkups: None,
        }
    }

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let client = ApiClient::new("http://localhost:3000/", "token");
        assert_eq!(
            client.endpoint("/api/dashboard"),
            "http://localhost:3000/api/dashboard"
        );
    }

    #[test]
    fn status_errors_are_readable() {
        let err = ClientError::Status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "server returned 404 Not Found");
    }

    #[tokio::test]
    async fn supplied_record_short_circuits_to_ready() {
        // Unroutable base URL: the supplied record must never hit the wire.
        let client = ApiClient::new("http://127.0.0.1:1", "token");
        let state = client.load_dashboard(Some(record_for("Ada"))).await;

        match state {
            DashboardState::Ready(view) => assert_eq!(view.greeting, "Welcome, Ada"),
            other => panic!("expected ready state, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_failure_lands_in_the_error_state() {
        let client = ApiClient::new("http://127.0.0.1:1", "token");
        let state = client.load_dashboard(None).await;

        assert!(matches!(state, DashboardState::Error(_)));
        assert!(state.is_terminal());
    }
}
