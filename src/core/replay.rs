use crate::core::gallery::WallpaperGallery;
use crate::core::{CatalogSource, PhotoLibrary, SavedImage, TouchInput};
use crate::utils::error::{Result, WallsError};
use serde::Deserialize;

/// One line of a touch log: a touch phase or a carousel scroll.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ReplayLine {
    Touch(TouchInput),
    Scroll { scroll_to: usize },
}

#[derive(Debug, Default)]
pub struct ReplaySummary {
    pub lines: usize,
    pub saved: Vec<SavedImage>,
    pub failed_saves: usize,
}

/// Parses a JSON-lines touch log. Blank lines and `#` comments are skipped.
pub fn parse_touch_log(content: &str) -> Result<Vec<ReplayLine>> {
    content
        .lines()
        .enumerate()
        .map(|(line_no, line)| (line_no + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, text)| {
            serde_json::from_str(text).map_err(|source| WallsError::InvalidTouchLog { line, source })
        })
        .collect()
}

/// Feeds a touch log through the gallery. Save failures are counted and the
/// replay carries on.
pub async fn replay_touch_log<C: CatalogSource, L: PhotoLibrary>(
    gallery: &mut WallpaperGallery<C, L>,
    content: &str,
) -> Result<ReplaySummary> {
    let entries = parse_touch_log(content)?;
    let mut summary = ReplaySummary {
        lines: entries.len(),
        ..ReplaySummary::default()
    };

    for entry in entries {
        match entry {
            ReplayLine::Scroll { scroll_to } => gallery.on_momentum_scroll_end(scroll_to),
            ReplayLine::Touch(TouchInput::End(event)) => gallery.handle_touch_end(event),
            ReplayLine::Touch(TouchInput::Start(event)) => {
                match gallery.handle_touch_start(event).await {
                    Ok(Some(saved)) => summary.saved.push(saved),
                    Ok(None) => {}
                    Err(_) => summary.failed_saves += 1,
                }
            }
        }
    }

    tracing::info!(
        "Replayed {} touch log entries: {} saved, {} failed",
        summary.lines,
        summary.saved.len(),
        summary.failed_saves
    );
    Ok(summary)
}
