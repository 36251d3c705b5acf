//! Frame rate value and the frame-count constants derived from it.
//!
//! All field arithmetic runs on the integer [`FrameRate::nominal`] rate.
//! The fractional rate only decides whether drop-frame numbering applies.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

const SECONDS_PER_MINUTE: i64 = 60;
const MINUTES_PER_HOUR: i64 = 60;
const HOURS_PER_DAY: i64 = 24;

/// Highest accepted nominal rate; keeps per-day frame counts well inside `i64`.
const MAX_NOMINAL_FPS: f64 = 1000.0;

/// Video frame rate in frames per second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct FrameRate(f64);

impl FrameRate {
    /// 23.976 fps (NTSC film)
    pub const FILM_23_976: FrameRate = FrameRate(23.976);
    /// 24 fps (film)
    pub const FILM_24: FrameRate = FrameRate(24.0);
    /// 25 fps (PAL)
    pub const PAL_25: FrameRate = FrameRate(25.0);
    /// 29.97 fps (NTSC video, drop-frame)
    pub const NTSC_29_97: FrameRate = FrameRate(29.97);
    /// 30 fps
    pub const NTSC_30: FrameRate = FrameRate(30.0);
    /// 50 fps (PAL high frame rate)
    pub const PAL_50: FrameRate = FrameRate(50.0);
    /// 59.94 fps (NTSC high frame rate, drop-frame)
    pub const NTSC_59_94: FrameRate = FrameRate(59.94);
    /// 60 fps
    pub const FPS_60: FrameRate = FrameRate(60.0);

    /// Create a frame rate from frames per second.
    ///
    /// The rate must round to between 1 and 1000 frames per second. Rates outside
    /// the usual broadcast/film family are accepted, but the drop-frame rules
    /// are only meaningful for 29.97 and 59.94.
    pub fn new(fps: f64) -> Result<Self> {
        if !fps.is_finite() || fps.round() < 1.0 || fps.round() > MAX_NOMINAL_FPS {
            return Err(Error::invalid_frame_rate(fps.to_string()));
        }
        if !(23.0..=60.0).contains(&fps) {
            tracing::warn!(fps, "frame rate outside the broadcast/film family");
        }
        Ok(Self(fps))
    }

    /// Frames per second as supplied.
    pub fn fps(self) -> f64 {
        self.0
    }

    /// Integer frame rate used for all field arithmetic.
    pub fn nominal(self) -> i64 {
        self.0.round() as i64
    }

    /// Whether this rate uses NTSC drop-frame numbering.
    pub fn is_drop_frame(self) -> bool {
        (self.0 > 29.0 && self.0 < 30.0) || (self.0 > 59.0 && self.0 < 60.0)
    }

    /// Frame numbers skipped at the start of each non-tenth minute.
    pub fn frames_to_drop(self) -> i64 {
        if self.is_drop_frame() {
            self.nominal() / 15
        } else {
            0
        }
    }

    /// Frame numbers used in a minute that drops frames.
    pub fn frames_per_minute(self) -> i64 {
        SECONDS_PER_MINUTE * self.nominal() - self.frames_to_drop()
    }

    /// Every tenth minute keeps its dropped frames.
    pub fn frames_per_ten_minutes(self) -> i64 {
        10 * self.frames_per_minute() + self.frames_to_drop()
    }

    /// Frames in one hour of timecode.
    pub fn frames_per_hour(self) -> i64 {
        (MINUTES_PER_HOUR / 10) * self.frames_per_ten_minutes()
    }

    /// Frames before the timecode wraps at 24 hours.
    pub fn frames_per_day(self) -> i64 {
        HOURS_PER_DAY * self.frames_per_hour()
    }

    /// Separator between seconds and frames in rendered timecodes.
    pub fn separator(self) -> char {
        if self.is_drop_frame() {
            ';'
        } else {
            ':'
        }
    }

    /// The exact rational rate this nominal rate stands for.
    pub fn exact(self) -> f64 {
        exact_frame_rate(self.0)
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::NTSC_29_97
    }
}

/// Map a conventional nominal rate to its exact NTSC value.
///
/// `59.x` becomes `60000/1001`, `29.x` becomes `30000/1001` and `23.x`
/// becomes `24000/1001`. Anything else is returned unchanged.
pub fn exact_frame_rate(fps: f64) -> f64 {
    if fps > 59.0 && fps < 60.0 {
        return 60000.0 / 1001.0;
    }
    if fps > 29.0 && fps < 30.0 {
        return 30000.0 / 1001.0;
    }
    if fps > 23.0 && fps < 24.0 {
        return 24000.0 / 1001.0;
    }
    fps
}

impl TryFrom<f64> for FrameRate {
    type Error = Error;

    fn try_from(fps: f64) -> Result<Self> {
        Self::new(fps)
    }
}

impl From<FrameRate> for f64 {
    fn from(rate: FrameRate) -> Self {
        rate.0
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}fps", self.0)
    }
}

impl FromStr for FrameRate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        let number = lower.trim_end_matches("fps").trim_end();
        let fps: f64 = number
            .parse()
            .map_err(|_| Error::invalid_frame_rate(s))?;
        Self::new(fps)
    }
}
