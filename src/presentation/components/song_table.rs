use crate::domain::entities::{Song, SongList};
use egui::{RichText, ScrollArea};
use std::sync::Arc;

pub struct SongTable {
    songs: Arc<SongList>,
    selected_song: Option<usize>,
}

impl SongTable {
    pub fn new() -> Self {
        Self {
            songs: Arc::new(Vec::new()),
            selected_song: None,
        }
    }

    pub fn update_songs(&mut self, songs: Arc<SongList>) {
        self.songs = songs;
        self.selected_song = None;
    }

    pub fn songs(&self) -> Arc<SongList> {
        Arc::clone(&self.songs)
    }

    pub fn selected(&self) -> Option<&Song> {
        self.selected_song.and_then(|index| self.songs.get(index))
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.label(format!("{} songs", self.songs.len()));

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("song_grid")
                    .striped(true)
                    .spacing([10.0, 8.0])
                    .min_col_width(ui.available_width() / 6.0)
                    .show(ui, |ui| {
                        ui.heading("Anime");
                        ui.heading("Type");
                        ui.heading("Song");
                        ui.heading("Artist");
                        ui.heading("Composer");
                        ui.heading("Media");
                        ui.end_row();

                        for (index, song) in self.songs.iter().enumerate() {
                            let is_selected = self.selected_song == Some(index);
                            if ui
                                .selectable_label(is_selected, song.display_anime_name())
                                .clicked()
                            {
                                self.selected_song = Some(index);
                            }

                            ui.label(song.song_type.as_deref().unwrap_or(""));
                            ui.label(RichText::new(song.song_name.as_deref().unwrap_or("")).strong());
                            ui.label(song.song_artist.as_deref().unwrap_or(""));
                            ui.label(song.song_composer.as_deref().unwrap_or(""));

                            match song.best_media_link() {
                                Some(link) => {
                                    ui.hyperlink_to("Open", link);
                                }
                                None => {
                                    ui.label("N/A");
                                }
                            }

                            ui.end_row();
                        }
                    });
            });
    }
}

impl Default for SongTable {
    fn default() -> Self {
        Self::new()
    }
}
