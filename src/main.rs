use anyhow::{anyhow, Result};
use quickrecipe::bridge::transport::NullTransport;
use quickrecipe::bridge::ConvaiBridge;
use quickrecipe::config::AppConfig;
use quickrecipe::ui::{AppState, QuickRecipeApp};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quickrecipe=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting QuickRecipe");

    let config = AppConfig::default();
    config.validate().map_err(|e| anyhow!(e))?;

    // Wire the voice bridge. The real widget attaches through its own
    // transport; without one the bridge discards outbound frames.
    let bridge = ConvaiBridge::new(config.bridge.clone());
    let mut state = AppState::with_config(config);
    state.bridge_tx = Some(bridge.command_sender());
    state.bridge_rx = Some(bridge.event_receiver());
    bridge
        .start_worker(Box::new(NullTransport::new()))
        .map_err(|e| anyhow!("Failed to start voice bridge: {e}"))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("QuickRecipe")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "QuickRecipe",
        options,
        Box::new(|cc| Ok(Box::new(QuickRecipeApp::new(cc, state)))),
    )
    .map_err(|e| anyhow!("Failed to launch UI: {e}"))?;

    Ok(())
}
