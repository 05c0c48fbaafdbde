use crate::core::gesture::GestureClassifier;
use crate::core::sampler::unique_random_numbers;
use crate::core::{
    CatalogEntry, CatalogSource, ConfigProvider, PhotoLibrary, SavedImage, TouchEvent,
    WallpaperCard,
};
use crate::utils::error::{Result, WallsError};

/// Headless state of the wallpaper carousel.
///
/// Holds the sampled walls, which one is on screen, the loading and HUD
/// flags, and the gesture classifier that turns double taps into saves.
pub struct WallpaperGallery<C: CatalogSource, L: PhotoLibrary> {
    catalog: C,
    library: L,
    image_base_url: String,
    wallpaper_count: usize,
    walls: Vec<CatalogEntry>,
    current_index: usize,
    is_loading: bool,
    is_hud_visible: bool,
    classifier: GestureClassifier,
}

impl<C: CatalogSource, L: PhotoLibrary> WallpaperGallery<C, L> {
    pub fn new<P: ConfigProvider>(catalog: C, library: L, config: &P) -> Self {
        Self {
            catalog,
            library,
            image_base_url: config.image_base_url().to_string(),
            wallpaper_count: config.wallpaper_count(),
            walls: Vec::new(),
            current_index: 0,
            is_loading: true,
            is_hud_visible: false,
            classifier: GestureClassifier::new(config.gesture_config()),
        }
    }

    pub fn walls(&self) -> &[CatalogEntry] {
        &self.walls
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_wall(&self) -> Option<&CatalogEntry> {
        self.walls.get(self.current_index)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_hud_visible(&self) -> bool {
        self.is_hud_visible
    }

    pub fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }

    pub fn cards(&self) -> Vec<WallpaperCard> {
        self.walls
            .iter()
            .map(|wall| WallpaperCard {
                image_url: wall.image_url(&self.image_base_url),
                label: "Photo by",
                author: wall.author.clone(),
            })
            .collect()
    }

    /// Back to the state before the first fetch.
    pub fn initialize(&mut self) {
        self.walls.clear();
        self.is_loading = true;
        self.is_hud_visible = false;
        self.current_index = 0;
        self.classifier.reset();
    }

    /// Fetches the catalog and keeps a random selection of it.
    ///
    /// On failure nothing is changed.
    pub async fn fetch_walls(&mut self) -> Result<usize> {
        let entries = self.catalog.fetch_catalog().await?;
        let sample = unique_random_numbers(self.wallpaper_count, 0, entries.len())?;

        self.walls = sample.select(&entries);
        self.is_loading = false;

        tracing::info!(
            "Showing {} of {} wallpapers",
            self.walls.len(),
            entries.len()
        );
        Ok(self.walls.len())
    }

    /// Shake-to-refresh: reset and fetch again. Errors are only logged.
    pub async fn refresh(&mut self) {
        tracing::info!("Refreshing wallpapers");
        self.initialize();
        if let Err(e) = self.fetch_walls().await {
            tracing::warn!("Fetch error: {}", e);
        }
    }

    pub fn on_momentum_scroll_end(&mut self, index: usize) {
        if index < self.walls.len() {
            self.current_index = index;
        } else {
            tracing::warn!(
                "Ignoring scroll to index {} (gallery holds {})",
                index,
                self.walls.len()
            );
        }
    }

    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.walls.len() {
            return Err(WallsError::IndexOutOfRange {
                index,
                len: self.walls.len(),
            });
        }
        self.current_index = index;
        Ok(())
    }

    /// Saves the current wallpaper when `event` completes a double tap.
    pub async fn handle_touch_start(&mut self, event: TouchEvent) -> Result<Option<SavedImage>> {
        if self.classifier.on_touch_start(event) {
            self.save_current().await.map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn handle_touch_end(&self, event: TouchEvent) {
        self.classifier.on_touch_end(event);
    }

    pub async fn save_current(&mut self) -> Result<SavedImage> {
        let wall = self.current_wall().cloned().ok_or(WallsError::EmptyGallery)?;
        let url = wall.image_url(&self.image_base_url);

        self.is_hud_visible = true;
        tracing::debug!("Saving {} to the photo library", url);
        let result = self.library.save_image(&url, &wall.file_stem()).await;
        self.is_hud_visible = false;

        match &result {
            Ok(saved) => tracing::info!("Wallpaper saved to camera roll: {}", saved.path),
            Err(e) => tracing::error!("Error saving to camera roll: {}", e),
        }
        result
    }
}
