use crate::domain::entities::SongList;
use anyhow::{Context, Result};
use std::path::Path;

pub struct ExportSongList;

impl ExportSongList {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(&self, path: &Path, songs: &SongList) -> Result<usize> {
        let json = serde_json::to_string_pretty(songs)
            .context("Failed to serialize song list to JSON")?;

        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write song list to {}", path.display()))?;

        tracing::info!("Exported {} songs to {}", songs.len(), path.display());
        Ok(songs.len())
    }
}

impl Default for ExportSongList {
    fn default() -> Self {
        Self::new()
    }
}
