use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gighub_infrastructure::ConfigService;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "gighub")]
#[command(about = "Gighub CLI - marketplace messaging with content moderation", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to ~/.config/gighub/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a message and print the moderation verdict
    Classify {
        /// Message text
        text: String,
        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },
    /// List conversations
    Conversations {
        /// TOML conversation fixture to read instead of the demo threads
        #[arg(long)]
        fixture: Option<PathBuf>,
    },
    /// Chat in a conversation from the terminal
    Chat {
        /// Conversation to open first
        #[arg(long)]
        conversation: Option<String>,
        /// TOML conversation fixture to read instead of the demo threads
        #[arg(long)]
        fixture: Option<PathBuf>,
    },
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new()?,
    };
    let config = config_service.get_config()?;
    init_tracing(&config.logging.level);

    match cli.command {
        Commands::Classify { text, json } => commands::classify::run(&config, &text, json)?,
        Commands::Conversations { fixture } => {
            let manager = commands::build_manager(&config_service, &config, fixture)?;
            commands::conversations::run(&manager).await?
        }
        Commands::Chat {
            conversation,
            fixture,
        } => {
            let manager = commands::build_manager(&config_service, &config, fixture)?;
            commands::chat::run(manager, conversation).await?
        }
    }

    Ok(())
}
