//! Bitcoin price commands

use async_trait::async_trait;
use std::sync::Arc;
use crate::application::errors::ResponderError;
use crate::domain::entities::{CommandMatch, CommandSignature, Message};
use crate::domain::traits::Responder;
use crate::infrastructure::exchange::{Exchange, ExchangeClient, Ticker};

/// Format a yen amount with at most two decimals and no trailing zeros
pub fn format_yen(amount: f64) -> String {
    let s = format!("{:.2}", amount);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn format_ticker(ticker: &Ticker) -> String {
    format!(
        "{}の{}価格は{}円",
        ticker.exchange,
        ticker.symbol_or_default(),
        format_yen(ticker.price)
    )
}

/// `btc <exchange>`: current price on one exchange
pub struct TickerResponder {
    signature: CommandSignature,
    client: Arc<ExchangeClient>,
}

impl TickerResponder {
    pub fn new(client: Arc<ExchangeClient>) -> Self {
        Self {
            signature: CommandSignature::prefixed("btc"),
            client,
        }
    }
}

#[async_trait]
impl Responder for TickerResponder {
    fn name(&self) -> &str {
        "btc"
    }

    fn signature(&self) -> &CommandSignature {
        &self.signature
    }

    fn description(&self) -> &str {
        "BTC price on bitflyer, coincheck or zaif"
    }

    fn usage(&self) -> String {
        "btc <exchange>".to_string()
    }

    async fn respond(&self, _message: &Message, args: &CommandMatch) -> Result<Message, ResponderError> {
        let exchange: Exchange = args.first().parse()?;
        let ticker = self.client.ticker(exchange).await?;
        Ok(Message::new(format_ticker(&ticker)))
    }
}

/// `spread <a> <b>`: price on `a` minus price on `b`
pub struct SpreadResponder {
    signature: CommandSignature,
    client: Arc<ExchangeClient>,
}

impl SpreadResponder {
    pub fn new(client: Arc<ExchangeClient>) -> Self {
        Self {
            signature: CommandSignature::with_arity("spread", 2),
            client,
        }
    }
}

#[async_trait]
impl Responder for SpreadResponder {
    fn name(&self) -> &str {
        "spread"
    }

    fn signature(&self) -> &CommandSignature {
        &self.signature
    }

    fn description(&self) -> &str {
        "BTC price difference between two exchanges"
    }

    fn usage(&self) -> String {
        "spread <exchange> <exchange>".to_string()
    }

    async fn respond(&self, _message: &Message, args: &CommandMatch) -> Result<Message, ResponderError> {
        let first: Exchange = args.arg(0).unwrap_or_default().parse()?;
        let second: Exchange = args.arg(1).unwrap_or_default().parse()?;

        let (a, b) = tokio::try_join!(self.client.ticker(first), self.client.ticker(second))?;

        Ok(Message::new(format!(
            "{}, {}のBTC価格差は{}円",
            first,
            second,
            format_yen(a.price - b.price)
        )))
    }
}
