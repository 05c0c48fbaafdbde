pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalLibrary, toml_config::TomlConfig};
pub use core::{
    catalog::HttpCatalog,
    gallery::WallpaperGallery,
    gesture::{GestureClassifier, GestureConfig},
    sampler::unique_random_numbers,
};
pub use utils::error::{Result, WallsError};
