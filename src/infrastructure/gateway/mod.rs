//! External API gateway
//!
//! One attempt per call, explicit timeout, JSON body decoded into the
//! caller's type.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use crate::application::errors::ResponderError;

/// Gateway failures
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<GatewayError> for ResponderError {
    fn from(e: GatewayError) -> Self {
        match e {
            GatewayError::Transport(_) | GatewayError::Timeout(_) => {
                ResponderError::Transport(e.to_string())
            }
            GatewayError::Status { .. } => ResponderError::Remote(e.to_string()),
            GatewayError::Decode(_) => ResponderError::Decode(e.to_string()),
        }
    }
}

/// Thin HTTP client shared by every responder
#[derive(Clone)]
pub struct ApiGateway {
    client: Client,
    timeout: Duration,
}

impl ApiGateway {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `url` with query parameters and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, GatewayError> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.decode(response).await
    }

    /// POST form values to `url` and decode the JSON body
    pub async fn post_form_json<T: DeserializeOwned>(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> Result<T, GatewayError> {
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.decode(response).await
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, GatewayError> {
        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: truncate(&body, 200),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn transport_error(&self, e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::Timeout(self.timeout)
        } else {
            GatewayError::Transport(e.to_string())
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        format!("{}...", s.chars().take(max).collect::<String>())
    } else {
        s.to_string()
    }
}
