//! Timecode configuration.

use crate::rate::FrameRate;

/// Ambient settings for building and rendering timecodes.
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use sceneforged_timecode::{FrameRate, TimecodeConfig};
///
/// let config = TimecodeConfig::builder()
///     .default_frame_rate(FrameRate::PAL_25)
///     .build();
/// assert_eq!(config.default_frame_rate, FrameRate::PAL_25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimecodeConfig {
    /// Rate applied to inputs that do not carry their own.
    /// Default: 29.97
    pub default_frame_rate: FrameRate,

    /// Rate that real-time SRT rendering pulls down to.
    /// Default: 29.97
    pub real_time_rate: FrameRate,
}

impl Default for TimecodeConfig {
    fn default() -> Self {
        Self {
            default_frame_rate: FrameRate::NTSC_29_97,
            real_time_rate: FrameRate::NTSC_29_97,
        }
    }
}

impl TimecodeConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> TimecodeConfigBuilder {
        TimecodeConfigBuilder::default()
    }
}

/// Builder for `TimecodeConfig`.
#[derive(Debug, Clone, Default)]
pub struct TimecodeConfigBuilder {
    default_frame_rate: Option<FrameRate>,
    real_time_rate: Option<FrameRate>,
}

impl TimecodeConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rate used when an input names none.
    pub fn default_frame_rate(mut self, rate: FrameRate) -> Self {
        self.default_frame_rate = Some(rate);
        self
    }

    /// Set the target rate for real-time SRT rendering.
    pub fn real_time_rate(mut self, rate: FrameRate) -> Self {
        self.real_time_rate = Some(rate);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> TimecodeConfig {
        TimecodeConfig {
            default_frame_rate: self.default_frame_rate.unwrap_or_default(),
            real_time_rate: self.real_time_rate.unwrap_or_default(),
        }
    }
}
