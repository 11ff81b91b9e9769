use crate::application::{SearchSession, SearchTicket, UseCaseContainer};
use crate::domain::entities::{AppConfig, SearchFilters};
use crate::domain::errors::SearchError;
use crate::domain::repositories::AnalyticsSink;
use crate::domain::services::{INITIAL_DOWNLOAD_NAME, download_file_name};
use crate::infrastructure::ConfigRepository;
use crate::infrastructure::http::HttpSearchRepository;
use crate::presentation::components::{FilterState, LogManager, SongTable, Tab, TabManager};
use crate::presentation::services::{
    AppEvent, AsyncExecutor, CompletedSearch, EventBus, SearchTaskManager,
};
use crate::presentation::style::configure_style;
use crate::presentation::ui::tabs::{
    LogAction, LogTab, SearchAction, SearchTab, SettingsAction, SettingsTab,
};
use chrono::Utc;
use eframe::egui;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, channel};
use std::thread;
use std::time::Duration;

pub struct AnisongApp {
    tab_manager: TabManager,
    filter_state: FilterState,
    song_table: SongTable,
    log_manager: LogManager,
    log_rx: Receiver<String>,

    session: SearchSession,
    task_manager: SearchTaskManager,
    use_cases: Arc<UseCaseContainer>,
    executor: AsyncExecutor,

    event_bus: EventBus,
    event_rx: Receiver<AppEvent>,

    config: AppConfig,
    config_repository: ConfigRepository,

    initialized: bool,
    loading_search: bool,
    download_name: String,
    status_message: String,
}

impl AnisongApp {
    pub fn new(
        use_cases: Arc<UseCaseContainer>,
        analytics: Arc<dyn AnalyticsSink>,
        executor: AsyncExecutor,
        config: AppConfig,
        config_repository: ConfigRepository,
        log_rx: Receiver<String>,
    ) -> Self {
        let event_bus = EventBus::new();
        let (event_tx, event_rx) = channel();
        event_bus.subscribe(move |event| {
            let _ = event_tx.send(event.clone());
        });

        Self {
            tab_manager: TabManager::new(),
            filter_state: FilterState::new(),
            song_table: SongTable::new(),
            log_manager: LogManager::new(),
            log_rx,
            session: SearchSession::new(analytics, Utc::now()),
            task_manager: SearchTaskManager::new(),
            use_cases,
            executor,
            event_bus,
            event_rx,
            config,
            config_repository,
            initialized: false,
            loading_search: false,
            download_name: INITIAL_DOWNLOAD_NAME.to_string(),
            status_message: String::new(),
        }
    }

    fn load_initial_songs(&mut self) {
        self.status_message = "Loading latest songs...".to_string();
        tracing::info!("Loading initial song list");
        let ticket = self.session.begin_initial_load();
        self.dispatch(ticket);
    }

    fn handle_search(&mut self) {
        match self
            .session
            .trigger(self.filter_state.filters_mut(), Utc::now())
        {
            Ok(Some(ticket)) => {
                self.status_message = "Searching...".to_string();
                self.dispatch(ticket);
            }
            Ok(None) => {
                tracing::debug!("Search unchanged, keeping current results");
            }
            Err(e) => {
                tracing::warn!("Search not sent: {}", e);
                let message = trigger_failure_message(&e, self.filter_state.filters());
                self.event_bus.publish(AppEvent::SearchFailed(message));
            }
        }
    }

    fn dispatch(&mut self, ticket: SearchTicket) {
        self.loading_search = true;
        self.task_manager.dispatch(
            ticket,
            Arc::clone(&self.use_cases.run_request),
            self.executor.clone(),
        );
    }

    fn poll_search_tasks(&mut self) {
        for completed in self.task_manager.poll() {
            self.apply_completed(completed);
        }

        self.loading_search = self.task_manager.has_pending();
    }

    fn apply_completed(&mut self, completed: CompletedSearch) {
        if !self.session.accept(completed.sequence) {
            return;
        }

        match completed.result {
            Ok(songs) => {
                tracing::info!(
                    "Request #{} returned {} songs in {:?}",
                    completed.sequence,
                    songs.len(),
                    completed.elapsed
                );
                self.event_bus
                    .publish(AppEvent::SongListReady(Arc::new(songs)));
            }
            Err(e) => {
                tracing::error!("Request #{} failed: {}", completed.sequence, e);
                self.session.fail(completed.sequence);
                self.event_bus.publish(AppEvent::SearchFailed(e.to_string()));
            }
        }
    }

    fn poll_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                AppEvent::SongListReady(songs) => {
                    self.status_message = format!("{} songs loaded", songs.len());
                    self.song_table.update_songs(songs);
                }
                AppEvent::StatusUpdate(message) => {
                    self.status_message = message;
                }
                AppEvent::SearchFailed(message) => {
                    self.status_message = format!("Search failed: {}", message);
                }
            }
        }
    }

    fn poll_logs(&mut self) {
        while let Ok(line) = self.log_rx.try_recv() {
            self.log_manager.push(line);
        }
    }

    fn handle_download(&mut self) {
        self.download_name = download_file_name(self.filter_state.filters());

        let Some(path) = rfd::FileDialog::new()
            .set_file_name(self.download_name.as_str())
            .add_filter("JSON", &["json"])
            .save_file()
        else {
            return;
        };

        let songs = self.song_table.songs();
        let use_case = Arc::clone(&self.use_cases.export_songs);
        let executor = self.executor.clone();
        let event_bus = self.event_bus.clone();

        thread::spawn(move || {
            match executor.execute(async move { use_case.execute(&path, &songs).await }) {
                Ok(count) => {
                    event_bus.publish(AppEvent::StatusUpdate(format!("Exported {} songs", count)));
                }
                Err(e) => {
                    tracing::error!("Export failed: {:#}", e);
                    event_bus.publish(AppEvent::StatusUpdate(format!("Export failed: {}", e)));
                }
            }
        });
    }

    fn save_config(&mut self) {
        if let Err(e) = self.config_repository.save(&self.config) {
            tracing::error!("Failed to save config: {:#}", e);
            self.status_message = format!("Failed to save settings: {}", e);
            return;
        }

        match HttpSearchRepository::from_config(&self.config) {
            Ok(repository) => {
                self.use_cases = Arc::new(UseCaseContainer::new(Arc::new(repository)));
                // A new endpoint must not be short-circuited by the last body.
                self.session.reset_previous_body();
                self.status_message = "Settings saved".to_string();
            }
            Err(e) => {
                tracing::error!("Failed to apply API settings: {:#}", e);
                self.status_message = format!("Failed to apply API settings: {}", e);
            }
        }
    }
}

/// Artist limits are hidden outside the advanced section, so point there.
fn trigger_failure_message(error: &SearchError, filters: &SearchFilters) -> String {
    match error {
        SearchError::InvalidFilterValue { .. } if !filters.show_advanced_filters => {
            format!("{} (edit it under Advanced filters)", error)
        }
        _ => error.to_string(),
    }
}

impl eframe::App for AnisongApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_logs();
        self.poll_search_tasks();
        self.poll_events();

        if self.loading_search {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        if !self.initialized {
            self.initialized = true;
            self.load_initial_songs();
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Anisong Finder");
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                ui.separator();

                for (tab, label) in [
                    (Tab::Search, "Search"),
                    (Tab::Settings, "Settings"),
                    (Tab::Log, "Log"),
                ] {
                    if ui
                        .selectable_label(self.tab_manager.is_current(tab), label)
                        .clicked()
                    {
                        self.tab_manager.switch_to(tab);
                    }
                }
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.loading_search {
                    ui.spinner();
                }
                ui.label(self.status_message.as_str());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.tab_manager.current() {
            Tab::Search => {
                let actions = SearchTab::show(
                    ui,
                    &mut self.filter_state,
                    &mut self.song_table,
                    self.session.ranked_status(),
                    self.loading_search,
                    &self.download_name,
                );
                for action in actions {
                    match action {
                        SearchAction::Search => self.handle_search(),
                        SearchAction::Download => self.handle_download(),
                    }
                }
            }
            Tab::Settings => {
                let actions = SettingsTab::show(ui, &mut self.config, &mut self.log_manager);
                for action in actions {
                    match action {
                        SettingsAction::SaveConfig => self.save_config(),
                        SettingsAction::ApplyTheme => configure_style(ctx, self.config.theme),
                    }
                }
            }
            Tab::Log => {
                for action in LogTab::show(ui, &self.log_manager) {
                    match action {
                        LogAction::CopyAll => {
                            let output = self
                                .log_manager
                                .all_logs()
                                .map(|entry| format!("[{}] {}", entry.format_timestamp(), entry.message))
                                .collect::<Vec<_>>()
                                .join("\n");
                            ctx.copy_text(output);
                        }
                        LogAction::Clear => self.log_manager.clear(),
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::build_request_body;

    #[test]
    fn hidden_artist_limit_error_names_field_and_section() {
        let mut filters = SearchFilters::default();
        filters.minimal_members_filter = "two".to_string();
        filters.main_filter = "Aimer".to_string();

        let error = build_request_body(&filters, false).unwrap_err();
        let message = trigger_failure_message(&error, &filters);

        assert!(message.contains("minimal members"));
        assert!(message.contains("\"two\""));
        assert!(message.ends_with("(edit it under Advanced filters)"));
    }

    #[test]
    fn visible_errors_are_reported_as_is() {
        let mut filters = SearchFilters::default();
        filters.show_advanced_filters = true;
        let error = SearchError::InvalidFilterValue {
            field: "maximum other artists",
            value: "lots".to_string(),
        };

        assert_eq!(
            trigger_failure_message(&error, &filters),
            "Invalid value for maximum other artists: \"lots\""
        );
    }
}
