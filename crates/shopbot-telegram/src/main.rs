//! Resume shop Telegram bot binary.
//!
//! Start the bot with:
//! ```bash
//! BOT_TOKEN=xxx GROQ_API_KEY=yyy cargo run -p shopbot-telegram
//! ```

use std::sync::Arc;

use clap::Parser;
use shopbot_agent::{CompletionSettings, ContextBuilder, GroqClient};
use shopbot_telegram::{DispatchEngine, ShopBot};
use tracing_subscriber::EnvFilter;

/// Resume shop bot - answers customers on Telegram with an AI consultant
#[derive(Parser, Debug)]
#[command(name = "shopbot-telegram")]
#[command(about = "Telegram bot for the resume shop")]
struct Args {
    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Local .env.local or .env, if present
    let _ = dotenvy::from_filename(".env.local").or_else(|_| dotenvy::dotenv());

    let filter = match args.verbose {
        0 => "shopbot_telegram=info,shopbot_agent=info,teloxide=warn",
        1 => "shopbot_telegram=debug,shopbot_agent=debug,teloxide=info",
        2 => "shopbot_telegram=trace,shopbot_agent=trace,teloxide=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client = GroqClient::from_env()?;
    let settings = CompletionSettings::from_env();
    tracing::info!(model = %settings.model_id, endpoint = %client.api_url(), "Completion client ready");

    let engine = DispatchEngine::new(ContextBuilder::new(settings), Arc::new(client));
    let bot = ShopBot::from_env(engine)?;

    match bot.get_me().await {
        Ok(username) => {
            tracing::info!(username = %username, "Bot initialized successfully");
            println!("\n[robot] Resume Shop Bot");
            println!("   Bot: @{}", username);
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to get bot info");
            return Err(e.into());
        }
    }

    println!("   Press Ctrl+C to stop\n");

    bot.start_polling().await?;

    Ok(())
}
