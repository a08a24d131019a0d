//! wabot CLI: run the bot loop or clear a stored conversation. Config from env.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tokio::io::AsyncBufReadExt;
use tracing::{error, info, warn};

use llm_client::{GeminiConfig, GeminiLlmClient, LlmClient};
use storage::ChatHistoryRepository;
use wa_gateway::{FonnteChannel, GatewayConfig, OutboundChannel};
use wabot_cli::{assembly, facade, BotConfig};
use wabot_core::init_tracing;

#[derive(Parser)]
#[command(name = "wabot")]
#[command(about = "WhatsApp bot CLI: run, clear-history", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the bot: read "<phone> <message>" lines from stdin, deliver replies via the gateway.
    Run {
        /// Print replies instead of delivering through the gateway (no FONNTETOKEN needed).
        #[arg(long)]
        dry_run: bool,
    },
    /// Delete the stored conversation history for a phone number.
    ClearHistory { phone: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { dry_run } => run(dry_run).await,
        Commands::ClearHistory { phone } => clear_history(&phone).await,
    }
}

async fn run(dry_run: bool) -> Result<()> {
    let config = BotConfig::from_env()?;
    init_tracing(config.log_file.as_deref())?;

    let llm_client: Arc<dyn LlmClient> = Arc::new(GeminiLlmClient::new(GeminiConfig::from_env()?));
    let channel: Option<Arc<dyn OutboundChannel>> = if dry_run {
        None
    } else {
        Some(Arc::new(FonnteChannel::new(GatewayConfig::from_env()?)))
    };

    let components = assembly::build_components(&config, llm_client).await?;

    info!(dry_run, "wabot ready; reading \"<phone> <message>\" lines from stdin");

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((phone, text)) = line.split_once(char::is_whitespace) else {
            warn!(input = %line, "Expected \"<phone> <message>\"");
            continue;
        };

        match facade::process_message(&components.chain, phone, text.trim()).await {
            Ok(Some(reply)) => {
                println!("{}", reply);
                if let Some(channel) = &channel {
                    if let Err(e) = channel.send_message(phone, &reply).await {
                        error!(phone = %phone, error = %e, "Failed to deliver reply");
                    }
                }
            }
            Ok(None) => {}
            // The turn is lost but the loop keeps serving other messages.
            Err(e) => error!(phone = %phone, error = %e, "Failed to process message"),
        }
    }

    Ok(())
}

async fn clear_history(phone: &str) -> Result<()> {
    let config = BotConfig::from_env()?;
    init_tracing(config.log_file.as_deref())?;

    let repo = ChatHistoryRepository::new(&config.database_url).await?;
    repo.clear(phone).await?;

    println!("History cleared for {}", phone);
    Ok(())
}
