pub mod catalog;
pub mod gallery;
pub mod gesture;
pub mod replay;
pub mod sampler;

pub use crate::domain::model::{
    CatalogEntry, GestureState, SampleSet, SavedImage, TouchEvent, TouchInput, WallpaperCard,
};
pub use crate::domain::ports::{CatalogSource, ConfigProvider, PhotoLibrary};
pub use crate::utils::error::Result;
