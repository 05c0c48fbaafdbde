use crate::core::{PhotoLibrary, SavedImage};
use crate::utils::error::{Result, WallsError};
use chrono::Utc;
use reqwest::Client;
use std::path::PathBuf;

/// Photo library backed by a local directory.
#[derive(Debug, Clone)]
pub struct LocalLibrary {
    base_path: PathBuf,
    client: Client,
}

impl LocalLibrary {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self::with_client(base_path, Client::new())
    }

    pub fn with_client(base_path: impl Into<PathBuf>, client: Client) -> Self {
        Self {
            base_path: base_path.into(),
            client,
        }
    }

    async fn download(&self, url: &str) -> reqwest::Result<Vec<u8>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

impl PhotoLibrary for LocalLibrary {
    async fn save_image(&self, url: &str, name: &str) -> Result<SavedImage> {
        let save_error = |source: Box<dyn std::error::Error + Send + Sync>| WallsError::Save {
            url: url.to_string(),
            source,
        };

        let data = self
            .download(url)
            .await
            .map_err(|e| save_error(Box::new(e)))?;
        tracing::debug!("Downloaded {} bytes from {}", data.len(), url);

        let full_path = self.base_path.join(format!("{}.jpg", name));
        tokio::fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| save_error(Box::new(e)))?;
        tokio::fs::write(&full_path, &data)
            .await
            .map_err(|e| save_error(Box::new(e)))?;

        Ok(SavedImage {
            url: url.to_string(),
            path: full_path.to_string_lossy().into_owned(),
            saved_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_image_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let library_dir = temp_dir.path().join("camera-roll");

        let server = MockServer::start();
        let image_mock = server.mock(|when, then| {
            when.method(GET).path("/1080/1920").query_param("image", "7");
            then.status(200)
                .header("Content-Type", "image/jpeg")
                .body(b"\xff\xd8\xff\xe0fake-jpeg");
        });

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap();
        let library = LocalLibrary::with_client(&library_dir, client);
        let url = server.url("/1080/1920?image=7");
        let saved = library.save_image(&url, "wallpaper-7").await.unwrap();

        image_mock.assert();
        assert_eq!(saved.url, url);
        let written = std::fs::read(library_dir.join("wallpaper-7.jpg")).unwrap();
        assert_eq!(written, b"\xff\xd8\xff\xe0fake-jpeg");
        assert!(saved.path.ends_with("wallpaper-7.jpg"));
    }

    #[tokio::test]
    async fn test_save_image_not_found_is_save_error() {
        let temp_dir = TempDir::new().unwrap();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404);
        });

        let library = LocalLibrary::new(temp_dir.path());
        let err = library
            .save_image(&server.url("/missing"), "nothing")
            .await
            .unwrap_err();

        assert!(matches!(err, WallsError::Save { .. }));
        assert!(err.to_string().contains("404"));
        let source = std::error::Error::source(&err).expect("save keeps its cause");
        assert!(source.downcast_ref::<reqwest::Error>().is_some());
        assert!(!temp_dir.path().join("nothing.jpg").exists());
    }
}
