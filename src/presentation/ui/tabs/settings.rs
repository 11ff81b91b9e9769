use crate::domain::entities::{AppConfig, ThemeMode};
use crate::presentation::components::{LogLevel, LogManager};
use eframe::egui;

pub enum SettingsAction {
    SaveConfig,
    ApplyTheme,
}

pub struct SettingsTab;

impl SettingsTab {
    pub fn show(
        ui: &mut egui::Ui,
        config: &mut AppConfig,
        log_manager: &mut LogManager,
    ) -> Vec<SettingsAction> {
        let mut actions = Vec::new();

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Settings");
            ui.separator();

            ui.columns(2, |columns| {
                columns[0].vertical(|ui| {
                    ui.group(|ui| {
                        ui.heading("General");

                        ui.horizontal(|ui| {
                            ui.label("Theme:");
                            egui::ComboBox::new("theme_combo", "")
                                .selected_text(format!("{:?}", config.theme))
                                .show_ui(ui, |ui| {
                                    for (mode, label) in [
                                        (ThemeMode::System, "System"),
                                        (ThemeMode::Light, "Light"),
                                        (ThemeMode::Dark, "Dark"),
                                    ] {
                                        if ui.selectable_value(&mut config.theme, mode, label).clicked() {
                                            actions.push(SettingsAction::SaveConfig);
                                            actions.push(SettingsAction::ApplyTheme);
                                        }
                                    }
                                });
                        });
                    });

                    ui.add_space(10.0);

                    ui.group(|ui| {
                        ui.heading("Log Levels");
                        for (level, label) in [
                            (LogLevel::Debug, "Debug"),
                            (LogLevel::Info, "Info"),
                            (LogLevel::Warn, "Warn"),
                            (LogLevel::Error, "Error"),
                        ] {
                            let mut visible = log_manager.is_level_visible(level);
                            if ui.checkbox(&mut visible, label).changed() {
                                log_manager.set_level_visible(level, visible);
                            }
                        }
                    });
                });

                columns[1].vertical(|ui| {
                    ui.group(|ui| {
                        ui.heading("Search API");

                        ui.horizontal(|ui| {
                            ui.label("Base URL:");
                            ui.text_edit_singleline(&mut config.api_base_url);
                        });
                        ui.horizontal(|ui| {
                            ui.label("Search path:");
                            ui.text_edit_singleline(&mut config.search_path);
                        });
                        ui.horizontal(|ui| {
                            ui.label("Initial results path:");
                            ui.text_edit_singleline(&mut config.initial_results_path);
                        });
                        ui.horizontal(|ui| {
                            ui.label("Timeout (s):");
                            ui.add(egui::DragValue::new(&mut config.request_timeout_secs).range(1..=300));
                        });

                        if ui.button("Save").clicked() {
                            actions.push(SettingsAction::SaveConfig);
                        }
                    });
                });
            });
        });

        actions
    }
}
