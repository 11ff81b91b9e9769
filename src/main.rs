mod application;
mod domain;
mod infrastructure;
mod presentation;

use application::UseCaseContainer;
use domain::repositories::{AnalyticsSink, SearchRepository};
use infrastructure::ConfigRepository;
use infrastructure::http::{HttpSearchRepository, TracingAnalyticsSink};
use presentation::services::AsyncExecutor;
use presentation::services::log_capture::init_log_capture;
use presentation::style::configure_style;
use presentation::ui::AnisongApp;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let log_rx = init_log_capture()?;

    let config_repository = ConfigRepository::new();
    let config = config_repository.load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {:#}", e);
        Default::default()
    });

    let repository: Arc<dyn SearchRepository> = Arc::new(HttpSearchRepository::from_config(&config)?);
    let use_cases = Arc::new(UseCaseContainer::new(repository));
    let analytics: Arc<dyn AnalyticsSink> = Arc::new(TracingAnalyticsSink::new());
    let executor = AsyncExecutor::new()?;

    tracing::info!("Starting Anisong Finder against {}", config.api_base_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    let theme = config.theme;
    eframe::run_native(
        "Anisong Finder",
        options,
        Box::new(move |cc| {
            configure_style(&cc.egui_ctx, theme);
            Ok(Box::new(AnisongApp::new(
                use_cases,
                analytics,
                executor,
                config,
                config_repository,
                log_rx,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
