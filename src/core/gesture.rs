use crate::domain::model::{GestureState, TouchEvent};
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_finite, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DOUBLE_TAP_DELAY_MS: u64 = 400;
pub const DEFAULT_DOUBLE_TAP_RADIUS_PX: f64 = 20.0;

/// Thresholds for double-tap detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Maximum interval between the two touch-starts, exclusive.
    #[serde(default = "default_delay")]
    pub double_tap_delay_ms: u64,
    /// Maximum displacement between the two touch-starts, exclusive.
    #[serde(default = "default_radius")]
    pub double_tap_radius_px: f64,
}

fn default_delay() -> u64 {
    DEFAULT_DOUBLE_TAP_DELAY_MS
}

fn default_radius() -> f64 {
    DEFAULT_DOUBLE_TAP_RADIUS_PX
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            double_tap_delay_ms: DEFAULT_DOUBLE_TAP_DELAY_MS,
            double_tap_radius_px: DEFAULT_DOUBLE_TAP_RADIUS_PX,
        }
    }
}

impl GestureConfig {
    pub fn is_double_tap(&self, current: &TouchEvent, previous: &GestureState) -> bool {
        // Widened so extreme stamps and delays neither overflow nor wrap.
        let dt = i128::from(current.timestamp_millis) - i128::from(previous.prev_timestamp_millis);
        let d = distance(previous.prev_x, previous.prev_y, current.x, current.y);
        dt < i128::from(self.double_tap_delay_ms) && d < self.double_tap_radius_px
    }
}

impl Validate for GestureConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("double_tap_delay_ms", self.double_tap_delay_ms, 1)?;
        validate_positive_finite("double_tap_radius_px", self.double_tap_radius_px)
    }
}

pub fn distance(x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    (x1 - x0).hypot(y1 - y0)
}

/// Double-tap check with the default thresholds.
pub fn is_double_tap(current: &TouchEvent, previous: &GestureState) -> bool {
    GestureConfig::default().is_double_tap(current, previous)
}

/// Classifies each touch-start against the one before it.
///
/// The stored state is replaced on every touch-start whatever the outcome,
/// so three quick taps in place classify twice (tap 2 and tap 3).
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    config: GestureConfig,
    // None until the first touch-start after construction or reset.
    previous: Option<GestureState>,
}

impl GestureClassifier {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            previous: None,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn state(&self) -> Option<&GestureState> {
        self.previous.as_ref()
    }

    /// Returns true when `event` completes a double tap.
    pub fn on_touch_start(&mut self, event: TouchEvent) -> bool {
        let double_tap = self
            .previous
            .as_ref()
            .is_some_and(|previous| self.config.is_double_tap(&event, previous));

        if double_tap {
            tracing::debug!("Double tap at ({:.1}, {:.1})", event.x, event.y);
        }

        self.previous = Some(GestureState::from(event));
        double_tap
    }

    pub fn on_touch_end(&self, event: TouchEvent) {
        tracing::debug!(
            "Not touched anymore ({:.1}, {:.1}) at {}",
            event.x,
            event.y,
            event.timestamp_millis
        );
    }

    pub fn reset(&mut self) {
        self.previous = None;
    }
}
