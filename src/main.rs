use profitpoke::application::client::spawn_worker;
use profitpoke::config::Config;
use profitpoke::infrastructure::api::RecommendationApi;
use profitpoke::infrastructure::saved_store::SavedStore;
use profitpoke::interfaces::app::RecommendationApp;
use profitpoke::interfaces::design_system::DesignSystem;

use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // Load Env (before starting anything)
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("ProfitPoke client {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!("Recommendation service: {}", config.base_url);

    // Background fetch worker (owns the tokio runtime). The UI thread only
    // ever talks to it through the RecommendationClient channels.
    let api = RecommendationApi::new(&config.base_url, config.csrf_token.clone());
    let client = spawn_worker(Arc::new(api));

    let store = match &config.data_dir {
        Some(dir) => SavedStore::at_dir(dir.clone())?,
        None => SavedStore::new()?,
    };

    let app = RecommendationApp::new(client, store);

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([900.0, 720.0])
            .with_title("ProfitPoke"),
        ..Default::default()
    };

    eframe::run_native(
        "ProfitPoke",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(DesignSystem::theme());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
