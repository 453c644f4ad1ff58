use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Body of `GET /api/scraping_progress`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressState {
    /// Whole percent. Fractional values from the backend are floored.
    #[serde(deserialize_with = "whole_percent")]
    pub progress: i64,
}

fn whole_percent<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(de::Error::custom("progress must be a finite number"));
    }
    // Saturating cast.
    Ok(value.floor() as i64)
}

impl ProgressState {
    /// Reported progress clamped to a displayable percentage.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        self.progress.clamp(0, 100) as u8
    }

    /// Whether the backend reports the work as finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 100
    }
}
