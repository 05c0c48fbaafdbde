pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::catalog::DEFAULT_CATALOG_ENDPOINT;
#[cfg(feature = "cli")]
use crate::core::gesture::GestureConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_IMAGE_BASE_URL: &str = "https://unsplash.it";
pub const DEFAULT_WALLPAPER_COUNT: usize = 10;
pub const DEFAULT_LIBRARY_PATH: &str = "./camera-roll";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "splash-walls")]
#[command(about = "Browse random wallpapers and save them to a local photo library")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_CATALOG_ENDPOINT)]
    pub catalog_endpoint: String,

    #[arg(long, default_value = DEFAULT_IMAGE_BASE_URL)]
    pub image_base_url: String,

    #[arg(long, default_value_t = DEFAULT_WALLPAPER_COUNT)]
    pub wallpaper_count: usize,

    #[arg(long, default_value_t = crate::core::gesture::DEFAULT_DOUBLE_TAP_DELAY_MS)]
    pub double_tap_delay_ms: u64,

    #[arg(long, default_value_t = crate::core::gesture::DEFAULT_DOUBLE_TAP_RADIUS_PX)]
    pub double_tap_radius_px: f64,

    #[arg(long, default_value = DEFAULT_LIBRARY_PATH)]
    pub library_path: String,

    #[arg(long, help = "HTTP request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, help = "TOML configuration file; replaces the flags above")]
    pub config: Option<String>,

    #[arg(long, help = "Save the wallpaper at this carousel index")]
    pub save: Option<usize>,

    #[arg(long, help = "Replay touch events from a JSON-lines file")]
    pub touch_log: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn catalog_endpoint(&self) -> &str {
        &self.catalog_endpoint
    }

    fn image_base_url(&self) -> &str {
        &self.image_base_url
    }

    fn wallpaper_count(&self) -> usize {
        self.wallpaper_count
    }

    fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            double_tap_delay_ms: self.double_tap_delay_ms,
            double_tap_radius_px: self.double_tap_radius_px,
        }
    }

    fn library_path(&self) -> &str {
        &self.library_path
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

/// Checks shared by every configuration source.
pub fn validate_provider<P: ConfigProvider>(config: &P) -> Result<()> {
    validate_url("catalog_endpoint", config.catalog_endpoint())?;
    validate_url("image_base_url", config.image_base_url())?;
    validate_positive_number("wallpaper_count", config.wallpaper_count(), 1)?;
    validate_path("library_path", config.library_path())?;
    if let Some(timeout) = config.timeout_seconds() {
        validate_positive_number("timeout_seconds", timeout, 1)?;
    }
    config.gesture_config().validate()
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["splash-walls"]);
        assert_eq!(config.catalog_endpoint, "https://unsplash.it/list");
        assert_eq!(config.wallpaper_count, 10);
        assert_eq!(config.gesture_config(), GestureConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_gesture_overrides() {
        let config = CliConfig::parse_from([
            "splash-walls",
            "--double-tap-delay-ms",
            "250",
            "--double-tap-radius-px",
            "12.5",
            "--save",
            "3",
        ]);
        let gesture = config.gesture_config();
        assert_eq!(gesture.double_tap_delay_ms, 250);
        assert_eq!(gesture.double_tap_radius_px, 12.5);
        assert_eq!(config.save, Some(3));
    }

    #[test]
    fn test_cli_validation_rejects_zero_count() {
        let config = CliConfig::parse_from(["splash-walls", "--wallpaper-count", "0"]);
        assert!(config.validate().is_err());
    }
}
