//! Dungeon game client binary.
//!
//! Runs one session with the autopilot until game over. UI text goes to
//! stdout; render and audio sinks log through `tracing`.
//!
//! # Examples
//!
//! ```bash
//! DUNGEON_SEED=42 RUST_LOG=debug cargo run -p dungeon-client
//!
//! # Custom tuning, logs to a file
//! DUNGEON_CONFIG=my-config.toml DUNGEON_LOG_DIR=/tmp/dungeon cargo run -p dungeon-client
//! ```

use anyhow::Result;
use dungeon_client::sinks::{AudioSink, RenderSink, UiSink};
use dungeon_client::{AutopilotProvider, Client, ClientConfig, logging};
use game_content::ConfigLoader;
use runtime::Runtime;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!(
        seed = config.seed,
        frame_rate = config.frame_rate,
        "Starting Dungeon client"
    );

    let game_config = ConfigLoader::load_or_default(config.config_path.as_deref())?;

    let runtime = Runtime::builder()
        .game_config(game_config)
        .seed(config.seed)
        .frame_rate(config.frame_rate)
        .input_provider(AutopilotProvider)
        .build()
        .await?;

    let client = Client::builder()
        .runtime(runtime)
        .sink(RenderSink)
        .sink(AudioSink::new(config.seed))
        .sink(UiSink::new(std::io::stdout()))
        .build()?;

    let summary = client.run().await?;

    tracing::info!(days = summary.days, reason = %summary.reason, "Client shutdown complete");
    Ok(())
}
