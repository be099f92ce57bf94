//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use crate::application::errors::ConfigError;

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub bot: BotConfig,
    pub http: HttpConfig,
    pub credentials: CredentialsConfig,
    pub endpoints: EndpointsConfig,
    /// Enabled commands, in dispatch order
    pub commands: Vec<CommandKind>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BotConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// API keys. A command whose key is missing is not registered.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CredentialsConfig {
    pub keyword_app_id: Option<String>,
    pub chat_api_key: Option<String>,
    pub youtube_api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EndpointsConfig {
    pub keyword: String,
    pub chat: String,
    pub youtube: String,
    pub bookmark: String,
    pub bitflyer: String,
    pub coincheck: String,
    pub zaif: String,
}

/// Commands the registry knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Hello,
    Omikuji,
    Gacha,
    Keyword,
    Talk,
    Btc,
    Spread,
    Youtube,
    Hatena,
    Help,
}

impl CommandKind {
    pub const ALL: [CommandKind; 10] = [
        CommandKind::Hello,
        CommandKind::Omikuji,
        CommandKind::Gacha,
        CommandKind::Keyword,
        CommandKind::Talk,
        CommandKind::Btc,
        CommandKind::Spread,
        CommandKind::Youtube,
        CommandKind::Hatena,
        CommandKind::Help,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Hello => "hello",
            CommandKind::Omikuji => "omikuji",
            CommandKind::Gacha => "gacha",
            CommandKind::Keyword => "keyword",
            CommandKind::Talk => "talk",
            CommandKind::Btc => "btc",
            CommandKind::Spread => "spread",
            CommandKind::Youtube => "youtube",
            CommandKind::Hatena => "hatena",
            CommandKind::Help => "help",
        }
    }
}

impl FromStr for CommandKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        CommandKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidValue(format!("unknown command: {}", s)))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig::default(),
            http: HttpConfig::default(),
            credentials: CredentialsConfig::default(),
            endpoints: EndpointsConfig::default(),
            commands: CommandKind::ALL.to_vec(),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "dojo-bot".to_string(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            user_agent: format!("dojo-bot/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            keyword: "https://jlp.yahooapis.jp/KeyphraseService/V1/extract".to_string(),
            chat: "https://api.a3rt.recruit-tech.co.jp/talk/v1/smalltalk".to_string(),
            youtube: "https://www.googleapis.com/youtube/v3/search".to_string(),
            bookmark: "https://b.hatena.ne.jp/entry/jsonlite/".to_string(),
            bitflyer: "https://api.bitflyer.jp/v1/ticker".to_string(),
            coincheck: "https://coincheck.com/api/ticker".to_string(),
            zaif: "https://api.zaif.jp/api/1/last_price/btc_jpy".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue(
                "http.timeout-seconds must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Defaults with environment overrides applied
    pub fn load_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Apply environment variable overrides on top of this config
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(id) = std::env::var("KEYWORD_API_APP_ID") {
            self.credentials.keyword_app_id = Some(id);
        }
        if let Ok(key) = std::env::var("CHAT_API_KEY") {
            self.credentials.chat_api_key = Some(key);
        }
        if let Ok(key) = std::env::var("YOUTUBE_API_KEY") {
            self.credentials.youtube_api_key = Some(key);
        }

        if let Ok(commands) = std::env::var("BOT_COMMANDS") {
            self.commands = parse_command_list(&commands)?;
        }

        if let Ok(timeout) = std::env::var("HTTP_TIMEOUT_SECS") {
            self.http.timeout_seconds = timeout
                .parse()
                .map_err(|_| ConfigError::InvalidValue(format!("HTTP_TIMEOUT_SECS: {}", timeout)))?;
        }

        self.validate()
    }
}

/// Parse a comma-separated command list such as `hello,omikuji,btc`
pub fn parse_command_list(s: &str) -> Result<Vec<CommandKind>, ConfigError> {
    s.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(CommandKind::from_str)
        .collect()
}
