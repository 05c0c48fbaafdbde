use anyhow::Context;
use clap::Parser;
use splash_walls::core::replay::replay_touch_log;
use splash_walls::core::{CatalogSource, ConfigProvider, PhotoLibrary};
use splash_walls::utils::{logger, validation::Validate};
use splash_walls::{CliConfig, HttpCatalog, LocalLibrary, TomlConfig, WallpaperGallery, WallsError};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    let file_config = match &args.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let verbose = args.verbose || file_config.as_ref().is_some_and(|c| c.verbose());
    if args.json_logs || file_config.as_ref().is_some_and(|c| c.json_logs()) {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting splash-walls");
    if verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    let outcome = match &file_config {
        Some(config) => run(config, &args).await,
        None => run(&args, &args).await,
    };

    if let Err(e) = outcome {
        match e.downcast_ref::<WallsError>() {
            Some(walls_error) => {
                tracing::error!(
                    "❌ {} (Category: {:?}, Severity: {:?})",
                    walls_error,
                    walls_error.category(),
                    walls_error.severity()
                );
                eprintln!("❌ {}", walls_error.user_friendly_message());
                eprintln!("💡 {}", walls_error.recovery_suggestion());
                std::process::exit(walls_error.exit_code());
            }
            None => {
                tracing::error!("❌ {:#}", e);
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

async fn run<P>(config: &P, args: &CliConfig) -> anyhow::Result<()>
where
    P: ConfigProvider + Validate,
{
    config.validate()?;

    let (catalog, library) = match config.timeout_seconds() {
        Some(seconds) => {
            let timeout = Duration::from_secs(seconds);
            let client = reqwest::Client::builder().timeout(timeout).build()?;
            (
                HttpCatalog::with_timeout(config.catalog_endpoint(), timeout)?,
                LocalLibrary::with_client(config.library_path(), client),
            )
        }
        None => (
            HttpCatalog::new(config.catalog_endpoint()),
            LocalLibrary::new(config.library_path()),
        ),
    };
    let mut gallery = WallpaperGallery::new(catalog, library, config);

    tracing::info!("Contacting {}", config.catalog_endpoint());
    gallery.fetch_walls().await?;
    display_walls(&gallery);

    if let Some(index) = args.save {
        gallery.select(index)?;
        let saved = gallery.save_current().await?;
        println!("✅ Wallpaper saved to camera roll: {}", saved.path);
    }

    if let Some(path) = &args.touch_log {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading touch log {}", path))?;
        let summary = replay_touch_log(&mut gallery, &content).await?;
        for saved in &summary.saved {
            println!("✅ Wallpaper saved to camera roll: {}", saved.path);
        }
        if summary.failed_saves > 0 {
            eprintln!("❌ {} saves failed during replay", summary.failed_saves);
        }
    }

    Ok(())
}

fn display_walls<C: CatalogSource, L: PhotoLibrary>(gallery: &WallpaperGallery<C, L>) {
    println!("🖼️  {} wallpapers:", gallery.walls().len());
    for (index, card) in gallery.cards().iter().enumerate() {
        println!("  [{}] {} {} - {}", index, card.label, card.author, card.image_url);
    }
    println!();
}
