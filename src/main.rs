// Dragon's Den - AI pitch evaluation backend
// Main entry point

use anyhow::Result;

use dragonden::claude::ClaudeClient;
use dragonden::config::load_config;
use dragonden::dragons::{DragonRegistry, PitchEvaluator};
use dragonden::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_config()?;

    // Build the dragon panel
    let registry = DragonRegistry::builtin()?;
    tracing::info!("Loaded {} dragons", registry.len());

    // Create Claude client
    let mut client = ClaudeClient::new(config.api_key.clone())?;
    if let Some(base_url) = &config.api_base_url {
        client = client.with_base_url(base_url);
    }

    let evaluator = PitchEvaluator::new(
        client,
        registry,
        config.class_password.clone(),
        config.model.clone(),
    );

    server::serve(AppState::new(evaluator), &config.bind_address).await
}
