//! Wiring & DI. Entry point: bootstrap adapters, load reference data, run the chat UI.
//! No business logic here; replies come from the DialogueSession.

use barberbot::adapters::provider::{JsonFileProvider, RestProvider};
use barberbot::adapters::ui::console::{TerminalNavigator, TerminalNotifier};
use barberbot::adapters::ui::progress::spinner;
use barberbot::adapters::ui::tui::TuiChat;
use barberbot::ports::{BookingNavigator, DataProvider, InputPort};
use barberbot::shared::config::AppConfig;
use barberbot::usecases::{DialogueSession, SessionTiming};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    // Default to warn so log lines do not interleave with the chat.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration; using defaults");
        AppConfig::default()
    });

    barberbot::adapters::ui::init_ui();

    // --- Reference data source: REST API when configured, bundled JSON otherwise ---
    let provider: Arc<dyn DataProvider> = if cfg.is_api_configured() {
        let url = cfg.api_url.clone().unwrap_or_default();
        info!(url = %url, "reference data from REST API");
        Arc::new(RestProvider::new(url, cfg.api_key.clone().unwrap_or_default()))
    } else {
        let path = cfg.data_file_or_default();
        info!(path = %path, "reference data from JSON file");
        Arc::new(JsonFileProvider::new(path))
    };

    let navigator: Arc<dyn BookingNavigator> =
        Arc::new(TerminalNavigator::new(cfg.booking_url_or_default()));
    let timing = SessionTiming::from_config(&cfg);
    info!(?timing, "reply pacing");

    let session = Arc::new(DialogueSession::new(navigator, timing));

    let pb = spinner("Loading shop data...");
    let report = session
        .load_reference_data(provider.as_ref(), &TerminalNotifier)
        .await;
    pb.finish_and_clear();
    if !report.is_complete() {
        warn!(summary = %report.summary(), "starting with partial reference data");
    }

    let chat: Arc<dyn InputPort> = Arc::new(TuiChat::new(Arc::clone(&session)));
    let result = chat.run().await;

    session.shutdown();
    result.map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
