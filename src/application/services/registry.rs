//! Responder registry - builds the dispatcher from configuration

use std::sync::Arc;
use crate::application::errors::{BotError, ConfigError};
use crate::application::messaging::MessageDispatcher;
use crate::domain::traits::{RandomSource, Responder, ThreadRandom};
use crate::infrastructure::config::{CommandKind, Config};
use crate::infrastructure::exchange::{ExchangeClient, ExchangeEndpoints};
use crate::infrastructure::gateway::ApiGateway;
use crate::responders::{
    BookmarkResponder, ChatResponder, GreetingResponder, HelpResponder, KeywordResponder,
    RandomDrawResponder, SpreadResponder, TickerResponder, VideoResponder,
};

/// Builds responders for the commands enabled in a [`Config`]
pub struct ResponderRegistry {
    config: Config,
    gateway: Arc<ApiGateway>,
    rng: Arc<dyn RandomSource>,
    exchange: Option<Arc<ExchangeClient>>,
}

impl ResponderRegistry {
    pub fn new(config: Config) -> Result<Self, BotError> {
        let gateway = ApiGateway::new(config.http.timeout(), &config.http.user_agent)
            .map_err(|e| BotError::Internal(format!("HTTP client: {}", e)))?;

        Ok(Self {
            config,
            gateway: Arc::new(gateway),
            rng: Arc::new(ThreadRandom),
            exchange: None,
        })
    }

    /// Use a specific random source for the draw commands
    pub fn with_random(mut self, rng: Arc<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    /// Build a dispatcher with every enabled command, in configured order.
    ///
    /// Commands that lack a credential are skipped with a warning.
    pub fn build(mut self) -> MessageDispatcher {
        let kinds = dedup(&self.config.commands);

        let mut slots: Vec<Option<Arc<dyn Responder>>> = Vec::with_capacity(kinds.len());
        let mut help_slot = None;

        for kind in &kinds {
            if *kind == CommandKind::Help {
                help_slot = Some(slots.len());
                slots.push(None);
                continue;
            }
            match self.build_one(*kind) {
                Ok(responder) => slots.push(Some(responder)),
                Err(e) => tracing::warn!("Skipping command {}: {}", kind.as_str(), e),
            }
        }

        if let Some(index) = help_slot {
            let mut entries: Vec<(String, String)> = Vec::new();
            for (i, slot) in slots.iter().enumerate() {
                if i == index {
                    entries.push(("help".to_string(), "Show this message".to_string()));
                } else if let Some(r) = slot {
                    entries.push((r.usage(), r.description().to_string()));
                }
            }
            if let Some(slot) = slots.get_mut(index) {
                *slot = Some(Arc::new(HelpResponder::new(&entries)));
            }
        }

        let mut dispatcher = MessageDispatcher::new();
        for responder in slots.into_iter().flatten() {
            dispatcher.register(responder);
        }

        tracing::info!(
            "Registered {} commands: {}",
            dispatcher.len(),
            dispatcher
                .responders()
                .iter()
                .map(|r| r.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        dispatcher
    }

    fn build_one(&mut self, kind: CommandKind) -> Result<Arc<dyn Responder>, ConfigError> {
        let responder: Arc<dyn Responder> = match kind {
            CommandKind::Btc => Arc::new(TickerResponder::new(self.exchange_client())),
            CommandKind::Spread => Arc::new(SpreadResponder::new(self.exchange_client())),
            CommandKind::Hello => Arc::new(GreetingResponder::new()),
            CommandKind::Omikuji => Arc::new(RandomDrawResponder::fortune(self.rng.clone())),
            CommandKind::Gacha => Arc::new(RandomDrawResponder::gacha(self.rng.clone())),
            CommandKind::Keyword => {
                let app_id = required(&self.config.credentials.keyword_app_id, "credentials.keyword-app-id")?;
                Arc::new(KeywordResponder::new(
                    self.gateway.clone(),
                    self.config.endpoints.keyword.clone(),
                    app_id,
                ))
            }
            CommandKind::Talk => {
                let key = required(&self.config.credentials.chat_api_key, "credentials.chat-api-key")?;
                Arc::new(ChatResponder::new(
                    self.gateway.clone(),
                    self.config.endpoints.chat.clone(),
                    key,
                ))
            }
            CommandKind::Youtube => {
                let key = required(&self.config.credentials.youtube_api_key, "credentials.youtube-api-key")?;
                Arc::new(VideoResponder::new(
                    self.gateway.clone(),
                    self.config.endpoints.youtube.clone(),
                    key,
                ))
            }
            CommandKind::Hatena => Arc::new(BookmarkResponder::new(
                self.gateway.clone(),
                self.config.endpoints.bookmark.clone(),
            )),
            CommandKind::Help => {
                return Err(ConfigError::InvalidValue("help is built last".to_string()))
            }
        };
        Ok(responder)
    }

    /// Ticker client shared by btc and spread
    fn exchange_client(&mut self) -> Arc<ExchangeClient> {
        let gateway = self.gateway.clone();
        let endpoints = ExchangeEndpoints::from(&self.config.endpoints);
        self.exchange
            .get_or_insert_with(|| Arc::new(ExchangeClient::new(gateway, endpoints)))
            .clone()
    }
}

fn required(value: &Option<String>, field: &str) -> Result<String, ConfigError> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.to_string())
        .ok_or_else(|| ConfigError::MissingField(field.to_string()))
}

/// Keep the first occurrence of each command
fn dedup(kinds: &[CommandKind]) -> Vec<CommandKind> {
    let mut seen = std::collections::HashSet::new();
    kinds.iter().copied().filter(|k| seen.insert(*k)).collect()
}
