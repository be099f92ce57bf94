//! Keyword extraction command

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;
use crate::application::errors::ResponderError;
use crate::domain::entities::{CommandMatch, CommandSignature, Message};
use crate::domain::traits::Responder;
use crate::infrastructure::gateway::ApiGateway;

const LABEL: &str = "キーワード：";

/// Extracts key phrases from the argument text
pub struct KeywordResponder {
    signature: CommandSignature,
    gateway: Arc<ApiGateway>,
    endpoint: String,
    app_id: String,
}

impl KeywordResponder {
    pub fn new(gateway: Arc<ApiGateway>, endpoint: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self {
            signature: CommandSignature::prefixed("keyword"),
            gateway,
            endpoint: endpoint.into(),
            app_id: app_id.into(),
        }
    }
}

/// Join keyword keys, or fail with the payload of an `Error` key
fn format_keywords(response: &Map<String, Value>) -> Result<String, ResponderError> {
    if let Some(payload) = response.get("Error") {
        let detail = match payload {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(ResponderError::Remote(detail));
    }

    let keywords: Vec<&str> = response.keys().map(|k| k.as_str()).collect();
    Ok(format!("{}{}", LABEL, keywords.join(", ")))
}

#[async_trait]
impl Responder for KeywordResponder {
    fn name(&self) -> &str {
        "keyword"
    }

    fn signature(&self) -> &CommandSignature {
        &self.signature
    }

    fn description(&self) -> &str {
        "Extract keywords from text"
    }

    async fn respond(&self, _message: &Message, args: &CommandMatch) -> Result<Message, ResponderError> {
        let query = [
            ("appid", self.app_id.as_str()),
            ("sentence", args.first()),
            ("output", "json"),
        ];
        let response: Map<String, Value> = self.gateway.get_json(&self.endpoint, &query).await?;

        format_keywords(&response).map(Message::new)
    }
}
