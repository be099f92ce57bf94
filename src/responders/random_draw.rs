//! Random draw commands (fortune and gacha)

use async_trait::async_trait;
use std::sync::Arc;
use crate::application::errors::ResponderError;
use crate::domain::entities::{CommandMatch, CommandSignature, Message};
use crate::domain::traits::{RandomSource, Responder};

/// Fortune tiers, best first
pub const FORTUNES: [&str; 6] = ["大吉", "吉", "中吉", "小吉", "末吉", "凶"];

/// Gacha rarity tiers, rarest first
pub const GACHA_RARITIES: [&str; 4] = ["SSR", "SR", "R", "N"];

/// Picks one outcome uniformly at random
pub struct RandomDrawResponder {
    name: String,
    description: String,
    signature: CommandSignature,
    outcomes: Vec<String>,
    rng: Arc<dyn RandomSource>,
}

impl RandomDrawResponder {
    /// `outcomes` must not be empty; an empty list draws an empty body.
    pub fn new(
        token: impl Into<String>,
        description: impl Into<String>,
        outcomes: Vec<String>,
        rng: Arc<dyn RandomSource>,
    ) -> Self {
        let name = token.into();
        Self {
            signature: CommandSignature::exact(name.clone()),
            name,
            description: description.into(),
            outcomes,
            rng,
        }
    }

    pub fn fortune(rng: Arc<dyn RandomSource>) -> Self {
        Self::new("omikuji", "Draw a fortune", to_owned(&FORTUNES), rng)
    }

    pub fn gacha(rng: Arc<dyn RandomSource>) -> Self {
        Self::new("gacha", "Pull the gacha", to_owned(&GACHA_RARITIES), rng)
    }

    pub fn outcomes(&self) -> &[String] {
        &self.outcomes
    }

    pub fn draw(&self) -> &str {
        if self.outcomes.is_empty() {
            return "";
        }
        let index = self.rng.next_index(self.outcomes.len());
        self.outcomes.get(index).map(|s| s.as_str()).unwrap_or("")
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[async_trait]
impl Responder for RandomDrawResponder {
    fn name(&self) -> &str {
        &self.name
    }

    fn signature(&self) -> &CommandSignature {
        &self.signature
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn respond(&self, _message: &Message, _args: &CommandMatch) -> Result<Message, ResponderError> {
        Ok(Message::new(self.draw()))
    }
}
