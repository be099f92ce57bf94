//! YouTube search command

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use crate::application::errors::ResponderError;
use crate::domain::entities::{CommandMatch, CommandSignature, Message};
use crate::domain::traits::Responder;
use crate::infrastructure::gateway::ApiGateway;

/// Most videos shown in one reply
pub const MAX_RESULTS: usize = 3;

/// Searches videos and replies with an embedded player plus links
pub struct VideoResponder {
    signature: CommandSignature,
    gateway: Arc<ApiGateway>,
    endpoint: String,
    api_key: String,
}

#[derive(Deserialize, Debug)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize, Debug)]
struct SearchItem {
    id: ItemId,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ItemId {
    video_id: Option<String>,
}

impl VideoResponder {
    pub fn new(gateway: Arc<ApiGateway>, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            signature: CommandSignature::prefixed("youtube"),
            gateway,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

fn format_videos<'a>(ids: impl IntoIterator<Item = &'a str>) -> String {
    let mut body = String::new();
    for (i, id) in ids.into_iter().take(MAX_RESULTS).enumerate() {
        if i == 0 {
            body.push_str(&format!(
                "<iframe width=\"560\" height=\"315\" src=\"https://www.youtube.com/embed/{}\" frameborder=\"0\" allow=\"autoplay; encrypted-media\" allowfullscreen></iframe><br>",
                id
            ));
        } else {
            body.push_str(&format!(
                "<a href=\"https://www.youtube.com/watch?v={}\" target=\"_blank\">{}</a><br>",
                id, id
            ));
        }
    }
    body
}

#[async_trait]
impl Responder for VideoResponder {
    fn name(&self) -> &str {
        "youtube"
    }

    fn signature(&self) -> &CommandSignature {
        &self.signature
    }

    fn description(&self) -> &str {
        "Search YouTube"
    }

    async fn respond(&self, _message: &Message, args: &CommandMatch) -> Result<Message, ResponderError> {
        let query = [
            ("part", "id"),
            ("type", "video"),
            ("key", self.api_key.as_str()),
            ("q", args.first()),
        ];
        let response: SearchResponse = self.gateway.get_json(&self.endpoint, &query).await?;

        let ids = response
            .items
            .iter()
            .filter_map(|item| item.id.video_id.as_deref());
        Ok(Message::new(format_videos(ids)))
    }
}
