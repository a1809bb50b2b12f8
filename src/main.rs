// src/main.rs
// bfhl - single-endpoint operation dispatcher

use anyhow::{Context, Result};
use bfhl::{
    ResponseEnvelope,
    config::{self, AppConfig},
    llm::{AnswerProvider, GeminiClient},
    web::{self, state::AppState},
};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "bfhl")]
#[command(about = "Single-endpoint dispatcher for fibonacci, prime, lcm, hcf and AI operations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve {
        /// Host to bind (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run one JSON payload through the dispatcher and print the envelope
    Dispatch {
        /// Payload, e.g. '{"fibonacci": 5}'
        payload: String,
    },
}

fn build_state(config: AppConfig) -> Result<AppState> {
    let gemini = GeminiClient::from_config(&config.ai).context("Failed to build HTTP client")?;

    if gemini.has_credential() {
        info!(model = gemini.model(), "AI operation enabled (Gemini API key found)");
    } else {
        warn!("No GEMINI_API_KEY - AI operation will report service unavailable");
    }

    let provider: Arc<dyn AnswerProvider> = Arc::new(gemini);
    Ok(AppState::new(Arc::new(config), provider))
}

async fn run_server(mut config: AppConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let addr = config.bind_address();
    let state = build_state(config)?;
    info!(official_email = state.official_email(), "Reply email configured");

    let app = web::create_router(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server running on http://{}", addr);
    info!("Endpoints: POST /bfhl, GET /health");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn run_dispatch(config: AppConfig, payload: &str) -> Result<bool> {
    let state = build_state(config)?;

    let envelope = match serde_json::from_str::<serde_json::Value>(payload) {
        Ok(value) => {
            let outcome = state.dispatcher.dispatch(&value).await;
            ResponseEnvelope::from_outcome(state.official_email(), outcome)
        }
        Err(_) => ResponseEnvelope::failure(state.official_email(), "Invalid JSON payload"),
    };

    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(envelope.is_success)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env from current directory if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config::log_level_from_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = AppConfig::from_env();

    match cli.command {
        None => run_server(config, None, None).await?,
        Some(Commands::Serve { host, port }) => run_server(config, host, port).await?,
        Some(Commands::Dispatch { payload }) => {
            if !run_dispatch(config, &payload).await? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
