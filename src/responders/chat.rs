//! Smalltalk chat command

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use crate::application::errors::ResponderError;
use crate::domain::entities::{CommandMatch, CommandSignature, Message};
use crate::domain::traits::Responder;
use crate::infrastructure::gateway::ApiGateway;

/// Replies with whatever the smalltalk API says back
pub struct ChatResponder {
    signature: CommandSignature,
    gateway: Arc<ApiGateway>,
    endpoint: String,
    api_key: String,
}

#[derive(Deserialize, Debug)]
struct SmalltalkResponse {
    status: i64,
    #[serde(default)]
    message: String,
    #[serde(default)]
    results: Vec<SmalltalkResult>,
}

#[derive(Deserialize, Debug)]
struct SmalltalkResult {
    #[serde(default)]
    perplexity: f64,
    reply: String,
}

impl ChatResponder {
    pub fn new(gateway: Arc<ApiGateway>, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            signature: CommandSignature::prefixed("talk"),
            gateway,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

fn first_reply(response: SmalltalkResponse) -> Result<String, ResponderError> {
    if response.status != 0 {
        return Err(ResponderError::Remote(format!(
            "status {}: {}",
            response.status, response.message
        )));
    }

    let result = response
        .results
        .into_iter()
        .next()
        .ok_or_else(|| ResponderError::Remote("no reply in response".to_string()))?;

    tracing::debug!("smalltalk reply, perplexity {}", result.perplexity);
    Ok(result.reply)
}

#[async_trait]
impl Responder for ChatResponder {
    fn name(&self) -> &str {
        "talk"
    }

    fn signature(&self) -> &CommandSignature {
        &self.signature
    }

    fn description(&self) -> &str {
        "Chat with the bot"
    }

    async fn respond(&self, _message: &Message, args: &CommandMatch) -> Result<Message, ResponderError> {
        let form = [("apikey", self.api_key.as_str()), ("query", args.first())];
        let response: SmalltalkResponse = self.gateway.post_form_json(&self.endpoint, &form).await?;

        first_reply(response).map(Message::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> SmalltalkResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_first_reply() {
        let reply = first_reply(parse(
            r#"{"status":0,"message":"ok","results":[{"perplexity":0.1,"reply":"hi"},{"reply":"yo"}]}"#,
        ))
        .unwrap();
        assert_eq!(reply, "hi");
    }

    #[test]
    fn test_non_zero_status() {
        let err = first_reply(parse(r#"{"status":1400,"message":"Bad Request"}"#)).unwrap_err();
        assert!(matches!(err, ResponderError::Remote(ref m) if m.contains("Bad Request")));
    }

    #[test]
    fn test_empty_results() {
        let err = first_reply(parse(r#"{"status":0,"results":[]}"#)).unwrap_err();
        assert!(matches!(err, ResponderError::Remote(_)));
    }
}
