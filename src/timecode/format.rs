//! Rendering and plain snapshots.

use std::fmt;

use super::{FieldRecord, Timecode, FRAMES, HOURS, MINUTES, SECONDS};
use crate::config::TimecodeConfig;
use crate::rate::FrameRate;

/// Plain snapshot of a timecode's fields.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fields {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub frames: u32,
    pub frame_rate: FrameRate,
}

impl Timecode {
    /// Snapshot of all four fields and the frame rate.
    pub fn to_fields(&self) -> Fields {
        Fields {
            hours: self.hours(),
            minutes: self.minutes(),
            seconds: self.seconds(),
            frames: self.frames(),
            frame_rate: self.rate,
        }
    }

    /// Render as an SRT cue time, `HH:MM:SS,mmm`.
    ///
    /// With `real_time`, the value is first pulled down to 29.97 so the
    /// cue lines up with wall-clock playback.
    ///
    /// ```
    /// use sceneforged_timecode::{FrameRate, Timecode};
    ///
    /// let tc = Timecode::parse("00:00:05:12", FrameRate::FILM_24)?;
    /// assert_eq!(tc.to_srt_string(false), "00:00:05,500");
    /// # Ok::<(), sceneforged_timecode::Error>(())
    /// ```
    pub fn to_srt_string(&self, real_time: bool) -> String {
        self.to_srt_string_with(real_time, &TimecodeConfig::default())
    }

    /// Like [`Timecode::to_srt_string`], pulling down to the configured
    /// real-time rate.
    pub fn to_srt_string_with(&self, real_time: bool, config: &TimecodeConfig) -> String {
        let tc = if real_time {
            self.pulldown(config.real_time_rate, 0)
        } else {
            *self
        };
        let millis = tc.fields[FRAMES] * 1000 / tc.rate.nominal();
        format!(
            "{:02}:{:02}:{:02},{:03}",
            tc.fields[HOURS], tc.fields[MINUTES], tc.fields[SECONDS], millis
        )
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}{}{:02}",
            self.fields[HOURS],
            self.fields[MINUTES],
            self.fields[SECONDS],
            self.rate.separator(),
            self.fields[FRAMES]
        )
    }
}

impl From<Timecode> for Fields {
    fn from(tc: Timecode) -> Self {
        tc.to_fields()
    }
}

impl From<Fields> for Timecode {
    fn from(fields: Fields) -> Self {
        let record = FieldRecord::new(
            i64::from(fields.hours),
            i64::from(fields.minutes),
            i64::from(fields.seconds),
            i64::from(fields.frames),
        );
        Timecode::from_fields(record, fields.frame_rate)
    }
}

/// Numeric value of a timecode is its frame count.
impl From<Timecode> for i64 {
    fn from(tc: Timecode) -> Self {
        tc.frame_count()
    }
}

impl From<&Timecode> for i64 {
    fn from(tc: &Timecode) -> Self {
        tc.frame_count()
    }
}
