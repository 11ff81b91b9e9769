use crate::domain::entities::FilterCombination;
use crate::domain::services::{RankedRegion, RankedStatus};
use crate::presentation::components::{FilterCategory, FilterState, SongTable};
use eframe::egui;

pub enum SearchAction {
    Search,
    Download,
}

pub struct SearchTab;

impl SearchTab {
    pub fn show(
        ui: &mut egui::Ui,
        filter_state: &mut FilterState,
        song_table: &mut SongTable,
        ranked: RankedStatus,
        loading_search: bool,
        download_name: &str,
    ) -> Vec<SearchAction> {
        let mut actions = Vec::new();

        if ranked.active {
            ui.label(
                egui::RichText::new(ranked_banner(ranked))
                    .color(egui::Color32::from_rgb(255, 165, 0)),
            );
        }

        if ranked.active {
            egui::Grid::new("ranked_filters").show(ui, |ui| {
                Self::category_row(ui, filter_state, FilterCategory::Anime, &mut actions);
            });
        } else if filter_state.show_advanced_filters() {
            Self::advanced_filters(ui, filter_state, &mut actions);
        } else {
            ui.horizontal(|ui| {
                ui.label("Search:");
                let response = ui.add(
                    egui::TextEdit::singleline(filter_state.main_filter_mut())
                        .hint_text("Anime, song, artist or composer")
                        .desired_width(320.0),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    actions.push(SearchAction::Search);
                }
            });
        }

        ui.horizontal(|ui| {
            let filters = filter_state.filters_mut();
            ui.checkbox(&mut filters.show_openings, "Openings");
            ui.checkbox(&mut filters.show_endings, "Endings");
            ui.checkbox(&mut filters.show_inserts, "Inserts");
            ui.checkbox(&mut filters.ignore_duplicate, "Ignore duplicates");
            ui.separator();

            let mut advanced = filter_state.show_advanced_filters();
            if ui
                .add_enabled(!ranked.active, egui::Checkbox::new(&mut advanced, "Advanced filters"))
                .changed()
            {
                filter_state.set_show_advanced_filters(advanced);
            }
        });

        ui.horizontal(|ui| {
            if ui.button("Search").clicked() {
                actions.push(SearchAction::Search);
            }
            if ui
                .button("Download JSON")
                .on_hover_text(download_name)
                .clicked()
            {
                actions.push(SearchAction::Download);
            }
            if loading_search {
                ui.spinner();
                ui.label("Searching...");
            }
        });

        ui.separator();

        if let Some(song) = song_table.selected() {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(song.display_anime_name()).strong());
                if let Some(jp_name) = &song.anime_jp_name {
                    ui.label(jp_name.as_str());
                }
                if let Some(vintage) = &song.anime_vintage {
                    ui.label(vintage.as_str());
                }
                if let Some(arranger) = &song.song_arranger {
                    ui.label(format!("Arranged by {}", arranger));
                }
            });
            ui.separator();
        }

        song_table.show(ui);

        actions
    }

    fn advanced_filters(
        ui: &mut egui::Ui,
        filter_state: &mut FilterState,
        actions: &mut Vec<SearchAction>,
    ) {
        egui::Grid::new("advanced_filters")
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                for category in FilterCategory::ALL {
                    Self::category_row(ui, filter_state, category, actions);
                }
            });

        ui.horizontal(|ui| {
            let filters = filter_state.filters_mut();
            ui.label("Minimal members:");
            ui.add(egui::TextEdit::singleline(&mut filters.minimal_members_filter).desired_width(40.0));
            ui.label("Maximum other artists:");
            ui.add(egui::TextEdit::singleline(&mut filters.maximum_randoms_filter).desired_width(40.0));
            ui.checkbox(&mut filters.composer_arrangement, "Include arrangers");
        });

        ui.horizontal(|ui| {
            ui.label("Combine filters with:");
            let mut combination = filter_state.combination();
            egui::ComboBox::new("combination_combo", "")
                .selected_text(combination.to_string())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut combination, FilterCombination::Union, "Union");
                    ui.selectable_value(
                        &mut combination,
                        FilterCombination::Intersection,
                        "Intersection",
                    );
                });
            filter_state.set_combination(combination);
        });
    }

    fn category_row(
        ui: &mut egui::Ui,
        filter_state: &mut FilterState,
        category: FilterCategory,
        actions: &mut Vec<SearchAction>,
    ) {
        let (text, options) = filter_state.category_mut(category);

        ui.label(format!("{}:", category.label()));
        let response = ui.add(egui::TextEdit::singleline(text).desired_width(240.0));
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            actions.push(SearchAction::Search);
        }
        ui.checkbox(&mut options.partial_match, "Partial match");
        ui.checkbox(&mut options.ignore_special_characters, "Ignore special characters");
        ui.checkbox(&mut options.case_sensitive, "Case sensitive");
        ui.end_row();
    }
}

/// Status as of the last evaluation; it is not refreshed between searches.
fn ranked_banner(ranked: RankedStatus) -> String {
    let region = ranked
        .region
        .map(|region: RankedRegion| format!(" ({})", region.label()))
        .unwrap_or_default();
    format!(
        "Ranked time{} as of the last search: only anime search is available, {} minutes left",
        region, ranked.minutes_left
    )
}
