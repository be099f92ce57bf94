use clap::{Parser, Subcommand};
use std::process::ExitCode;

use dojo_bot::infrastructure::adapters::ConsoleAdapter;
use dojo_bot::infrastructure::config::Config;
use dojo_bot::{BotError, MessageDispatcher, Responder, ResponderRegistry};

#[derive(Parser)]
#[command(name = "dojo-bot")]
#[command(about = "Prefix-command chat bot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Read messages from stdin and reply on stdout
    Run,
    /// Process a single message
    Send {
        /// Message text, e.g. "btc bitflyer"
        text: String,
    },
    /// List enabled commands
    Commands,
    /// Print the default config
    InitConfig,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => run_console(&cli.config).await,
        Commands::Send { text } => send_one(&cli.config, &text).await,
        Commands::Commands => list_commands(&cli.config),
        Commands::InitConfig => init_config(),
        Commands::Version => {
            println!("dojo-bot v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(config_path: &str) -> Result<Config, BotError> {
    let config = if std::path::Path::new(config_path).exists() {
        let mut config = Config::load(config_path)?;
        config.apply_env()?;
        config
    } else {
        tracing::debug!("No config at {}, using defaults", config_path);
        Config::load_env()?
    };

    tracing::info!("Starting {}", config.bot.name);
    Ok(config)
}

fn build_dispatcher(config_path: &str) -> Result<MessageDispatcher, BotError> {
    let config = load_config(config_path)?;
    Ok(ResponderRegistry::new(config)?.build())
}

async fn run_console(config_path: &str) -> Result<(), BotError> {
    let dispatcher = build_dispatcher(config_path)?;
    ConsoleAdapter::stdio().run(&dispatcher).await
}

async fn send_one(config_path: &str, text: &str) -> Result<(), BotError> {
    let dispatcher = build_dispatcher(config_path)?;

    match dispatcher.process_text(text).await? {
        Some(reply) => println!("{}", reply.body),
        None => tracing::warn!("No command matched: {}", text),
    }
    Ok(())
}

fn list_commands(config_path: &str) -> Result<(), BotError> {
    let dispatcher = build_dispatcher(config_path)?;
    for responder in dispatcher.responders() {
        println!("{:<32} {}", responder.usage(), responder.description());
    }
    Ok(())
}

fn init_config() -> Result<(), BotError> {
    let yaml = Config::default().to_yaml()?;
    println!("{}", yaml);
    println!("# Save this to config.yaml and adjust as needed.");
    Ok(())
}
