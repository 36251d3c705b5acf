//! The timecode value and its field normalizer.
//!
//! A [`Timecode`] holds four fields in carry order, most significant first.
//! Every field assignment goes through [`Timecode::set_field`], which wraps
//! the value into range, carries the overflow into the next field up, and
//! re-applies the drop-frame correction at every level of the carry.
//!
//! # Module Structure
//!
//! - `input` - input variants and one builder per variant
//! - `count` - fields to linear frame count and back
//! - `arith` - addition and subtraction
//! - `resample` - pulldown/pullup between frame rates
//! - `format` - canonical and SRT rendering, field snapshots

mod arith;
mod count;
mod format;
mod input;
mod resample;

pub use format::Fields;
pub use input::{FieldRecord, TimecodeInput};

use crate::config::TimecodeConfig;
use crate::error::Result;
use crate::rate::FrameRate;

pub(crate) const HOURS: usize = 0;
pub(crate) const MINUTES: usize = 1;
pub(crate) const SECONDS: usize = 2;
pub(crate) const FRAMES: usize = 3;

const HOURS_PER_DAY: i64 = 24;
const MINUTES_PER_HOUR: i64 = 60;
const SECONDS_PER_MINUTE: i64 = 60;

/// An `HH:MM:SS:FF` screen-time address at a given frame rate.
///
/// Values are immutable once built; every operation returns a new
/// timecode.
///
/// ```
/// use sceneforged_timecode::{FrameRate, Timecode};
///
/// let tc = Timecode::from_frame_count(107892, FrameRate::NTSC_29_97);
/// assert_eq!(tc.to_string(), "01:00:00;00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "Fields", from = "Fields"))]
pub struct Timecode {
    fields: [i64; 4],
    rate: FrameRate,
}

impl Timecode {
    /// Build a timecode from any supported input.
    ///
    /// `rate` applies unless the input is a [`FieldRecord`] carrying its own
    /// frame rate. Only text input can fail.
    pub fn new(input: impl Into<TimecodeInput>, rate: FrameRate) -> Result<Self> {
        match input.into() {
            TimecodeInput::FrameCount(count) => Ok(Self::from_frame_count(count, rate)),
            TimecodeInput::WallClock(time) => Ok(Self::from_time(&time, rate)),
            TimecodeInput::Text(text) => Self::parse(&text, rate),
            TimecodeInput::Fields(record) => Ok(Self::from_fields(record, rate)),
        }
    }

    /// Build a timecode at the configured default frame rate.
    pub fn with_config(input: impl Into<TimecodeInput>, config: &TimecodeConfig) -> Result<Self> {
        Self::new(input, config.default_frame_rate)
    }

    /// `00:00:00:00` at the given rate.
    pub fn zero(rate: FrameRate) -> Self {
        Self {
            fields: [0; 4],
            rate,
        }
    }

    /// Hours field, `0..24`.
    pub fn hours(&self) -> u32 {
        self.fields[HOURS] as u32
    }

    /// Minutes field, `0..60`.
    pub fn minutes(&self) -> u32 {
        self.fields[MINUTES] as u32
    }

    /// Seconds field, `0..60`.
    pub fn seconds(&self) -> u32 {
        self.fields[SECONDS] as u32
    }

    /// Frames field, below the nominal rate.
    pub fn frames(&self) -> u32 {
        self.fields[FRAMES] as u32
    }

    /// Rate the fields are counted at.
    pub fn frame_rate(&self) -> FrameRate {
        self.rate
    }

    /// Whether the rate uses drop-frame numbering.
    pub fn is_drop_frame(&self) -> bool {
        self.rate.is_drop_frame()
    }

    /// The frames field as a fraction of one second.
    pub fn fraction_of_second(&self) -> f64 {
        self.fields[FRAMES] as f64 / self.rate.nominal() as f64
    }

    /// Seconds field plus [`Timecode::fraction_of_second`].
    pub fn fractional_seconds(&self) -> f64 {
        self.fields[SECONDS] as f64 + self.fraction_of_second()
    }

    /// Return a copy with the hours field set to `hours`, wrapped into the day.
    pub fn with_hours(mut self, hours: i64) -> Self {
        self.set_field(HOURS, hours);
        self
    }

    /// Return a copy with the minutes field set, carrying into hours.
    pub fn with_minutes(mut self, minutes: i64) -> Self {
        self.set_field(MINUTES, minutes);
        self
    }

    /// Return a copy with the seconds field set, carrying into minutes.
    pub fn with_seconds(mut self, seconds: i64) -> Self {
        self.set_field(SECONDS, seconds);
        self
    }

    /// Return a copy with the frames field set, carrying into seconds.
    pub fn with_frames(mut self, frames: i64) -> Self {
        self.set_field(FRAMES, frames);
        self
    }

    fn modulus(&self, field: usize) -> i64 {
        match field {
            HOURS => HOURS_PER_DAY,
            MINUTES => MINUTES_PER_HOUR,
            SECONDS => SECONDS_PER_MINUTE,
            _ => self.rate.nominal(),
        }
    }

    /// Assign one field and propagate its carry upward.
    ///
    /// The remainder truncates toward zero; a negative remainder is then
    /// lifted into range by borrowing one unit from the next field up. Each
    /// nested assignment runs the drop-frame correction before returning,
    /// so a carry that crosses several fields is corrected at every step.
    pub(crate) fn set_field(&mut self, field: usize, value: i64) {
        if field == HOURS {
            self.fields[HOURS] = value.rem_euclid(HOURS_PER_DAY);
        } else {
            let modulus = self.modulus(field);
            let above = field - 1;

            self.fields[field] = value % modulus;
            self.set_field(above, self.fields[above] + value / modulus);
            if self.fields[field] < 0 {
                self.fields[field] += modulus;
                self.set_field(above, self.fields[above] - 1);
            }
        }
        self.correct_drop_frame();
    }

    /// Skip the two frame numbers dropped at the top of each non-tenth minute.
    fn correct_drop_frame(&mut self) {
        if self.rate.is_drop_frame()
            && self.fields[FRAMES] < 2
            && self.fields[SECONDS] == 0
            && self.fields[MINUTES] % 10 != 0
        {
            self.fields[FRAMES] += 2;
        }
    }
}

impl Default for Timecode {
    fn default() -> Self {
        Self::zero(FrameRate::default())
    }
}
