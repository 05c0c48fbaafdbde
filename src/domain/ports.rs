use crate::core::gesture::GestureConfig;
use crate::domain::model::{CatalogEntry, SavedImage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the list of wallpapers comes from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>>;
}

/// Destination for saved wallpapers ("camera roll").
pub trait PhotoLibrary: Send + Sync {
    fn save_image(
        &self,
        url: &str,
        name: &str,
    ) -> impl std::future::Future<Output = Result<SavedImage>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_endpoint(&self) -> &str;
    fn image_base_url(&self) -> &str;
    fn wallpaper_count(&self) -> usize;
    fn gesture_config(&self) -> GestureConfig;
    fn library_path(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
}
