//! # HTTP Service
//!
//! Executes keyword and report requests against the backend.

use crate::config::Profile;
use crate::repl::error::RequestError;
use crate::repl::events::{Action, RequestToken};
use crate::repl::models::{HttpStatus, KeywordRequest};
use anyhow::Result;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use std::time::Instant;
use tokio::sync::mpsc;

/// Message type for async HTTP response handling
#[derive(Debug)]
pub enum HttpResponseMessage {
    /// Backend answered 2xx with a JSON body
    Success {
        token: RequestToken,
        action: Action,
        status: HttpStatus,
        body: Value,
    },
    /// Request failed; `message` is the banner text
    Error {
        token: RequestToken,
        action: Action,
        status: Option<HttpStatus>,
        message: String,
    },
}

impl HttpResponseMessage {
    pub fn token(&self) -> RequestToken {
        match self {
            HttpResponseMessage::Success { token, .. } | HttpResponseMessage::Error { token, .. } => {
                *token
            }
        }
    }
}

/// Outcome of one POST: the parsed body, or the error plus any status seen
type ExchangeResult = std::result::Result<(HttpStatus, Value), (Option<HttpStatus>, RequestError)>;

/// Milliseconds since `start`, saturating at `u64::MAX`
fn elapsed_millis(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Service for posting requests to the keyword backend
///
/// Requests can be awaited directly with [`KeywordService::post`] or spawned
/// with [`KeywordService::execute_async`], in which case the result arrives
/// through the internal channel.
pub struct KeywordService {
    client: Client,
    base_url: String,
    /// Channel for receiving async HTTP responses
    response_receiver: mpsc::Receiver<HttpResponseMessage>,
    /// Channel sender for async tasks to send responses
    response_sender: mpsc::Sender<HttpResponseMessage>,
}

impl KeywordService {
    /// Create a service for the profile's backend
    pub fn new(profile: &Profile) -> Result<Self> {
        tracing::debug!("Creating KeywordService for {}", profile.base_url);
        let (response_sender, response_receiver) = mpsc::channel(10);

        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = profile.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: profile.base_url.clone(),
            response_receiver,
            response_sender,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an action's endpoint
    pub fn endpoint_url(&self, action: Action) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), action.path())
    }

    /// POST the request and return the parsed JSON body
    pub async fn post(
        &self,
        action: Action,
        request: &KeywordRequest,
    ) -> std::result::Result<Value, RequestError> {
        Self::exchange(&self.client, self.endpoint_url(action), request)
            .await
            .map(|(_, body)| body)
            .map_err(|(_, error)| error)
    }

    async fn exchange(client: &Client, url: String, request: &KeywordRequest) -> ExchangeResult {
        tracing::info!("POST {}", url);
        let start_time = Instant::now();

        let response = client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| (None, RequestError::from(e)))?;

        let status = HttpStatus {
            status_code: response.status().as_u16(),
            duration_ms: elapsed_millis(start_time),
        };

        if !response.status().is_success() {
            tracing::warn!("{} answered {}", url, status.status_code);
            return Err((
                Some(status),
                RequestError::Status {
                    status: status.status_code,
                },
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|e| (Some(status), RequestError::from(e)))?;

        let body = serde_json::from_str::<Value>(&text)
            .map_err(|e| (Some(status), RequestError::from(e)))?;

        tracing::debug!(
            "Response from {}: status={}, duration={}ms, length={}",
            url,
            status.status_code,
            status.duration_ms,
            text.len()
        );

        Ok((status, body))
    }

    /// Execute a request on a spawned task
    ///
    /// The result is delivered through [`KeywordService::poll_response`] or
    /// [`KeywordService::next_response`], tagged with `token`.
    pub fn execute_async(&self, token: RequestToken, action: Action, request: KeywordRequest) {
        let client = self.client.clone();
        let url = self.endpoint_url(action);
        let result_sender = self.response_sender.clone();

        tokio::spawn(async move {
            let response_msg = match Self::exchange(&client, url, &request).await {
                Ok((status, body)) => HttpResponseMessage::Success {
                    token,
                    action,
                    status,
                    body,
                },
                Err((status, error)) => {
                    tracing::error!("{} request failed: {error}", action);
                    HttpResponseMessage::Error {
                        token,
                        action,
                        status,
                        message: error.to_string(),
                    }
                }
            };

            // Ignore send errors (receiver might have been dropped)
            let _ = result_sender.send(response_msg).await;
        });
    }

    /// Check if there are any pending HTTP responses (non-blocking)
    pub fn poll_response(&mut self) -> Option<HttpResponseMessage> {
        self.response_receiver.try_recv().ok()
    }

    /// Wait for the next HTTP response
    pub async fn next_response(&mut self) -> Option<HttpResponseMessage> {
        self.response_receiver.recv().await
    }
}
