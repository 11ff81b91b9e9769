use crate::presentation::components::{LogLevel, LogManager};
use eframe::egui;

pub enum LogAction {
    CopyAll,
    Clear,
}

pub struct LogTab;

impl LogTab {
    pub fn show(ui: &mut egui::Ui, log_manager: &LogManager) -> Vec<LogAction> {
        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            ui.heading("Log");
            if ui.button("📋 Copy All").clicked() {
                actions.push(LogAction::CopyAll);
            }
            if ui.button("🗑 Clear").clicked() {
                actions.push(LogAction::Clear);
            }
        });

        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                egui::Frame::default()
                    .fill(egui::Color32::BLACK)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());

                        for entry in log_manager.filtered_logs_reversed() {
                            let color = match entry.level {
                                LogLevel::Debug => egui::Color32::GRAY,
                                LogLevel::Info => egui::Color32::from_rgb(0, 255, 0),
                                LogLevel::Warn => egui::Color32::from_rgb(255, 165, 0),
                                LogLevel::Error => egui::Color32::from_rgb(255, 80, 80),
                            };
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new(format!("[{}]", entry.format_timestamp()))
                                        .color(egui::Color32::GRAY)
                                        .monospace(),
                                );
                                ui.label(egui::RichText::new(&entry.message).color(color).monospace());
                            });
                        }
                    });
            });

        actions
    }
}
