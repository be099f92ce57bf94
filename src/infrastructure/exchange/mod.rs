//! Exchange ticker client
//!
//! Fetches public BTC/JPY tickers and normalizes each exchange's JSON
//! shape into a [`Ticker`].

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::application::errors::ResponderError;
use crate::infrastructure::config::EndpointsConfig;
use crate::infrastructure::gateway::ApiGateway;

/// Supported exchanges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exchange {
    Bitflyer,
    Coincheck,
    Zaif,
}

impl Exchange {
    pub const ALL: [Exchange; 3] = [Exchange::Bitflyer, Exchange::Coincheck, Exchange::Zaif];

    pub fn as_str(&self) -> &'static str {
        match self {
            Exchange::Bitflyer => "bitflyer",
            Exchange::Coincheck => "coincheck",
            Exchange::Zaif => "zaif",
        }
    }
}

impl FromStr for Exchange {
    type Err = ResponderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Exchange::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| ResponderError::UnsupportedExchange(s.to_string()))
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized ticker
#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    pub exchange: Exchange,
    /// Product symbol, when the exchange reports one
    pub symbol: Option<String>,
    pub price: f64,
}

impl Ticker {
    pub fn symbol_or_default(&self) -> &str {
        self.symbol.as_deref().unwrap_or("BTC")
    }
}

#[derive(Deserialize)]
struct BitflyerTicker {
    product_code: Option<String>,
    best_ask: f64,
}

#[derive(Deserialize)]
struct CoincheckTicker {
    ask: f64,
}

#[derive(Deserialize)]
struct ZaifTicker {
    last_price: f64,
}

/// Ticker endpoints per exchange
#[derive(Debug, Clone)]
pub struct ExchangeEndpoints {
    pub bitflyer: String,
    pub coincheck: String,
    pub zaif: String,
}

impl ExchangeEndpoints {
    pub fn url(&self, exchange: Exchange) -> &str {
        match exchange {
            Exchange::Bitflyer => &self.bitflyer,
            Exchange::Coincheck => &self.coincheck,
            Exchange::Zaif => &self.zaif,
        }
    }
}

impl From<&EndpointsConfig> for ExchangeEndpoints {
    fn from(config: &EndpointsConfig) -> Self {
        Self {
            bitflyer: config.bitflyer.clone(),
            coincheck: config.coincheck.clone(),
            zaif: config.zaif.clone(),
        }
    }
}

/// Ticker client shared by the btc and spread commands
pub struct ExchangeClient {
    gateway: Arc<ApiGateway>,
    endpoints: ExchangeEndpoints,
}

impl ExchangeClient {
    pub fn new(gateway: Arc<ApiGateway>, endpoints: ExchangeEndpoints) -> Self {
        Self { gateway, endpoints }
    }

    /// Fetch the current ticker. Failures are returned, never replaced by a zero price.
    pub async fn ticker(&self, exchange: Exchange) -> Result<Ticker, ResponderError> {
        let url = self.endpoints.url(exchange);

        let ticker = match exchange {
            Exchange::Bitflyer => {
                let t: BitflyerTicker = self.gateway.get_json(url, &[]).await?;
                Ticker {
                    exchange,
                    symbol: t.product_code,
                    price: t.best_ask,
                }
            }
            Exchange::Coincheck => {
                let t: CoincheckTicker = self.gateway.get_json(url, &[]).await?;
                Ticker {
                    exchange,
                    symbol: None,
                    price: t.ask,
                }
            }
            Exchange::Zaif => {
                let t: ZaifTicker = self.gateway.get_json(url, &[]).await?;
                Ticker {
                    exchange,
                    symbol: None,
                    price: t.last_price,
                }
            }
        };

        tracing::debug!("{} ticker: {} {}", exchange, ticker.symbol_or_default(), ticker.price);
        Ok(ticker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_from_str() {
        assert_eq!("zaif".parse::<Exchange>().unwrap(), Exchange::Zaif);
        assert!(matches!(
            "binance".parse::<Exchange>(),
            Err(ResponderError::UnsupportedExchange(name)) if name == "binance"
        ));
        // Case-sensitive like every other command argument
        assert!("Bitflyer".parse::<Exchange>().is_err());
    }

    #[test]
    fn test_symbol_default() {
        let t = Ticker { exchange: Exchange::Zaif, symbol: None, price: 1.0 };
        assert_eq!(t.symbol_or_default(), "BTC");
    }

    #[test]
    fn test_bitflyer_shape() {
        let t: BitflyerTicker =
            serde_json::from_str(r#"{"product_code":"BTC_JPY","best_ask":123.45,"ltp":1}"#).unwrap();
        assert_eq!(t.product_code.as_deref(), Some("BTC_JPY"));
        assert_eq!(t.best_ask, 123.45);
    }
}
