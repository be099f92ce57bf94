//! Hatena bookmark command

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use crate::application::errors::ResponderError;
use crate::domain::entities::{CommandMatch, CommandSignature, Message};
use crate::domain::traits::Responder;
use crate::infrastructure::gateway::ApiGateway;

/// Replies with the first bookmark comment left on a URL
pub struct BookmarkResponder {
    signature: CommandSignature,
    gateway: Arc<ApiGateway>,
    endpoint: String,
}

#[derive(Deserialize, Debug)]
struct BookmarkEntry {
    #[serde(default)]
    title: String,
    #[serde(default)]
    bookmarks: Vec<Bookmark>,
}

#[derive(Deserialize, Debug)]
struct Bookmark {
    #[serde(default)]
    comment: String,
}

impl BookmarkResponder {
    pub fn new(gateway: Arc<ApiGateway>, endpoint: impl Into<String>) -> Self {
        Self {
            signature: CommandSignature::prefixed("hatena"),
            gateway,
            endpoint: endpoint.into(),
        }
    }
}

/// First non-blank comment. The API answers `null` for URLs nobody bookmarked.
fn first_comment(entry: Option<BookmarkEntry>) -> String {
    let Some(entry) = entry else {
        return String::new();
    };

    tracing::debug!("{} bookmarks on \"{}\"", entry.bookmarks.len(), entry.title);
    entry
        .bookmarks
        .into_iter()
        .map(|b| b.comment)
        .find(|c| !c.trim().is_empty())
        .unwrap_or_default()
}

#[async_trait]
impl Responder for BookmarkResponder {
    fn name(&self) -> &str {
        "hatena"
    }

    fn signature(&self) -> &CommandSignature {
        &self.signature
    }

    fn description(&self) -> &str {
        "First Hatena bookmark comment on a URL"
    }

    fn usage(&self) -> String {
        "hatena <url>".to_string()
    }

    async fn respond(&self, _message: &Message, args: &CommandMatch) -> Result<Message, ResponderError> {
        let query = [("url", args.first())];
        let entry: Option<BookmarkEntry> = self.gateway.get_json(&self.endpoint, &query).await?;

        Ok(Message::new(first_comment(entry)))
    }
}
