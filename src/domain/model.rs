use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One image record from the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u64,
    pub width: u32,
    pub height: u32,
    pub author: String,
}

impl CatalogEntry {
    /// `{base}/{width}/{height}?image={id}`
    pub fn image_url(&self, base_url: &str) -> String {
        format!(
            "{}/{}/{}?image={}",
            base_url.trim_end_matches('/'),
            self.width,
            self.height,
            self.id
        )
    }

    /// File stem used when the image lands in the photo library.
    pub fn file_stem(&self) -> String {
        format!("wallpaper-{}-{}x{}", self.id, self.width, self.height)
    }
}

/// Distinct indices drawn by the sampler, in draw order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSet {
    indices: Vec<usize>,
}

impl SampleSet {
    pub(crate) fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Clones the items at the sampled positions. Indices past the end of
    /// `items` are skipped.
    pub fn select<T: Clone>(&self, items: &[T]) -> Vec<T> {
        self.iter().filter_map(|i| items.get(i).cloned()).collect()
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.indices
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub x: f64,
    pub y: f64,
    pub timestamp_millis: i64,
}

impl TouchEvent {
    pub fn new(x: f64, y: f64, timestamp_millis: i64) -> Self {
        Self {
            x,
            y,
            timestamp_millis,
        }
    }

    /// Stamps the touch with the current wall-clock time.
    pub fn now(x: f64, y: f64) -> Self {
        Self::new(x, y, Utc::now().timestamp_millis())
    }
}

/// A touch as delivered by the host gesture system; also the line format of
/// a replayable touch log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum TouchInput {
    Start(TouchEvent),
    End(TouchEvent),
}

/// The most recent touch-start, kept for comparison with the next one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureState {
    pub prev_x: f64,
    pub prev_y: f64,
    pub prev_timestamp_millis: i64,
}

impl From<TouchEvent> for GestureState {
    fn from(event: TouchEvent) -> Self {
        Self {
            prev_x: event.x,
            prev_y: event.y,
            prev_timestamp_millis: event.timestamp_millis,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavedImage {
    pub url: String,
    pub path: String,
    pub saved_at: DateTime<Utc>,
}

/// What a carousel page needs to render one wallpaper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WallpaperCard {
    pub image_url: String,
    pub label: &'static str,
    pub author: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entry_ignores_unknown_fields() {
        let json = serde_json::json!({
            "format": "jpeg",
            "width": 5616,
            "height": 3744,
            "filename": "0000_yC-Yzbqy7PY.jpeg",
            "id": 0,
            "author": "Alejandro Escamilla",
            "author_url": "https://unsplash.com/@alejandroescamilla",
            "post_url": "https://unsplash.com/photos/yC-Yzbqy7PY"
        });

        let entry: CatalogEntry = serde_json::from_value(json).unwrap();
        assert_eq!(entry.id, 0);
        assert_eq!(entry.width, 5616);
        assert_eq!(entry.author, "Alejandro Escamilla");
    }

    #[test]
    fn test_image_url() {
        let entry = CatalogEntry {
            id: 42,
            width: 1080,
            height: 1920,
            author: "Someone".to_string(),
        };
        assert_eq!(
            entry.image_url("https://unsplash.it/"),
            "https://unsplash.it/1080/1920?image=42"
        );
        assert_eq!(entry.file_stem(), "wallpaper-42-1080x1920");
    }

    #[test]
    fn test_sample_set_select_skips_out_of_range() {
        let set = SampleSet::new(vec![2, 0, 7]);
        let picked = set.select(&["a", "b", "c"]);
        assert_eq!(picked, vec!["c", "a"]);
    }

    #[test]
    fn test_touch_input_phase_tag() {
        let line = r#"{"phase":"start","x":1.5,"y":2.0,"timestamp_millis":100}"#;
        let input: TouchInput = serde_json::from_str(line).unwrap();
        assert_eq!(input, TouchInput::Start(TouchEvent::new(1.5, 2.0, 100)));

        let line = r#"{"phase":"end","x":0,"y":0,"timestamp_millis":180}"#;
        assert!(matches!(
            serde_json::from_str::<TouchInput>(line).unwrap(),
            TouchInput::End(_)
        ));
    }

    #[test]
    fn test_gesture_state_from_touch() {
        let state = GestureState::from(TouchEvent::new(3.0, 4.0, 99));
        assert_eq!(state.prev_x, 3.0);
        assert_eq!(state.prev_y, 4.0);
        assert_eq!(state.prev_timestamp_millis, 99);
        assert_eq!(GestureState::default().prev_timestamp_millis, 0);
    }
}
