use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_PROGRESS: u8 = 0;
pub const MAX_PROGRESS: u8 = 100;

/// Playback completion for one movie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchProgress {
    /// Percentage watched, always within 0..=100
    pub progress: u8,
    pub last_watched: Option<DateTime<Utc>>,
}

impl Default for WatchProgress {
    fn default() -> Self {
        Self {
            progress: MIN_PROGRESS,
            last_watched: None,
        }
    }
}

impl WatchProgress {
    /// Builds a progress entry, clamping the raw percentage into range and rounding
    /// to a whole percent. NaN counts as unwatched.
    pub fn clamped(progress: f64, last_watched: DateTime<Utc>) -> Self {
        let progress = if progress.is_nan() {
            MIN_PROGRESS
        } else {
            progress
                .clamp(f64::from(MIN_PROGRESS), f64::from(MAX_PROGRESS))
                .round() as u8
        };
        Self {
            progress,
            last_watched: Some(last_watched),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress == MAX_PROGRESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unwatched() {
        let progress = WatchProgress::default();
        assert_eq!(progress.progress, 0);
        assert_eq!(progress.last_watched, None);
    }

    #[test]
    fn test_clamps_out_of_range() {
        let now = Utc::now();
        assert_eq!(WatchProgress::clamped(150.0, now).progress, 100);
        assert_eq!(WatchProgress::clamped(-10.0, now).progress, 0);
        assert_eq!(WatchProgress::clamped(1e20, now).progress, 100);
        assert_eq!(WatchProgress::clamped(f64::NEG_INFINITY, now).progress, 0);
        assert_eq!(WatchProgress::clamped(42.0, now).progress, 42);
    }

    #[test]
    fn test_fractional_progress_rounds() {
        let now = Utc::now();
        assert_eq!(WatchProgress::clamped(55.5, now).progress, 56);
        assert_eq!(WatchProgress::clamped(55.4, now).progress, 55);
        assert_eq!(WatchProgress::clamped(99.6, now).progress, 100);
    }

    #[test]
    fn test_nan_is_unwatched() {
        assert_eq!(WatchProgress::clamped(f64::NAN, Utc::now()).progress, 0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(WatchProgress::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "progress": 0, "lastWatched": null }));
    }
}
