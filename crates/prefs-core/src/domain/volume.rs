//! Bounded 0–255 integer used for the sound effect and music sliders.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected [`Volume`] construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("volume must be between 0 and 255, got {value}")]
pub struct VolumeError {
    pub value: i64,
}

/// A slider level in `0..=255`.
///
/// Validated once at construction; every `Volume` in existence is in range.
///
/// # Examples
///
/// ```rust
/// use prefs_core::Volume;
///
/// assert_eq!(Volume::new(100).unwrap().get(), 100);
/// assert!(Volume::new(256).is_err());
/// assert!(Volume::new(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volume(u8);

impl Volume {
    pub const MIN: Volume = Volume(0);
    pub const MAX: Volume = Volume(u8::MAX);

    /// Validates `value` into a volume.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError`] when `value` is outside `0..=255`.
    pub fn new(value: i64) -> Result<Self, VolumeError> {
        u8::try_from(value)
            .map(Volume)
            .map_err(|_| VolumeError { value })
    }

    /// The level as a plain integer.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<u8> for Volume {
    fn from(value: u8) -> Self {
        Volume(value)
    }
}

impl From<Volume> for i64 {
    fn from(volume: Volume) -> Self {
        i64::from(volume.0)
    }
}

impl TryFrom<i64> for Volume {
    type Error = VolumeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Volume::new(value)
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(Volume::new(0), Ok(Volume::MIN));
        assert_eq!(Volume::new(255), Ok(Volume::MAX));
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        for value in [-1, 256, 1_000, i64::MIN, i64::MAX] {
            assert_eq!(Volume::new(value), Err(VolumeError { value }));
        }
    }

    #[test]
    fn test_error_message_names_bounds_and_value() {
        let err = Volume::new(300).unwrap_err();
        assert_eq!(err.to_string(), "volume must be between 0 and 255, got 300");
    }

    #[test]
    fn test_serde_rejects_out_of_range_integer() {
        assert_eq!(serde_json::to_string(&Volume::from(42)).unwrap(), "42");
        assert!(serde_json::from_str::<Volume>("256").is_err());
    }
}
