//! Input variants accepted when building a timecode.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{NaiveTime, Timelike};
use regex::Regex;

use super::{Timecode, FRAMES, HOURS, MINUTES, SECONDS};
use crate::error::{Error, Result};
use crate::rate::FrameRate;

/// Two-digit fields separated by any single non-digit, matched anywhere.
static TIMECODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2})[^0-9]([0-9]{1,2})[^0-9]([0-9]{1,2})[^0-9]([0-9]{1,2})")
        .expect("timecode pattern is valid")
});

/// Something a [`Timecode`] can be built from.
#[derive(Debug, Clone, PartialEq)]
pub enum TimecodeInput {
    /// Linear frame count since midnight.
    FrameCount(i64),
    /// Time of day; the date and zone are ignored.
    WallClock(NaiveTime),
    /// `HH:MM:SS<sep>FF` text.
    Text(String),
    /// Individual field values.
    Fields(FieldRecord),
}

impl From<i64> for TimecodeInput {
    fn from(count: i64) -> Self {
        Self::FrameCount(count)
    }
}

impl From<u32> for TimecodeInput {
    fn from(count: u32) -> Self {
        Self::FrameCount(i64::from(count))
    }
}

impl From<NaiveTime> for TimecodeInput {
    fn from(time: NaiveTime) -> Self {
        Self::WallClock(time)
    }
}

impl From<&str> for TimecodeInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for TimecodeInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<FieldRecord> for TimecodeInput {
    fn from(record: FieldRecord) -> Self {
        Self::Fields(record)
    }
}

impl From<Timecode> for TimecodeInput {
    fn from(tc: Timecode) -> Self {
        Self::Fields(FieldRecord::from(tc))
    }
}

/// Field values for [`Timecode::from_fields`].
///
/// Missing fields count as zero. Values outside their range are carried
/// into the next field up, exactly as the field setters do.
///
/// ```
/// use sceneforged_timecode::{FieldRecord, FrameRate, Timecode};
///
/// let record = FieldRecord::new(0, 1, 0, 0);
/// let tc = Timecode::from_fields(record, FrameRate::NTSC_29_97);
/// assert_eq!(tc.to_string(), "00:01:00;02");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldRecord {
    pub hours: Option<i64>,
    pub minutes: Option<i64>,
    pub seconds: Option<i64>,
    pub frames: Option<i64>,
    /// Overrides the rate passed alongside the record.
    pub frame_rate: Option<FrameRate>,
}

impl FieldRecord {
    /// A record with all four fields present.
    pub fn new(hours: i64, minutes: i64, seconds: i64, frames: i64) -> Self {
        Self {
            hours: Some(hours),
            minutes: Some(minutes),
            seconds: Some(seconds),
            frames: Some(frames),
            frame_rate: None,
        }
    }

    /// Attach a frame rate that takes precedence over the caller's.
    pub fn with_frame_rate(mut self, rate: FrameRate) -> Self {
        self.frame_rate = Some(rate);
        self
    }

    /// Present, non-zero values in carry order.
    fn assignments(&self) -> [(usize, Option<i64>); 4] {
        let nonzero = |value: Option<i64>| value.filter(|&v| v != 0);
        [
            (HOURS, nonzero(self.hours)),
            (MINUTES, nonzero(self.minutes)),
            (SECONDS, nonzero(self.seconds)),
            (FRAMES, nonzero(self.frames)),
        ]
    }
}

impl From<Timecode> for FieldRecord {
    fn from(tc: Timecode) -> Self {
        Self::new(
            tc.fields[HOURS],
            tc.fields[MINUTES],
            tc.fields[SECONDS],
            tc.fields[FRAMES],
        )
        .with_frame_rate(tc.rate)
    }
}

impl Timecode {
    /// Build a timecode from individual field values.
    ///
    /// The record's own frame rate, if any, replaces `rate` before the
    /// fields are normalized.
    pub fn from_fields(record: FieldRecord, rate: FrameRate) -> Self {
        let mut tc = Self::zero(record.frame_rate.unwrap_or(rate));
        tc.apply_record(&record);
        tc
    }

    /// Build a timecode from a time of day.
    ///
    /// The sub-second part contributes `milliseconds / nominal rate` frames.
    pub fn from_time<T: Timelike>(time: &T, rate: FrameRate) -> Self {
        let millis = i64::from(time.nanosecond() / 1_000_000);
        let record = FieldRecord::new(
            i64::from(time.hour()),
            i64::from(time.minute()),
            i64::from(time.second()),
            millis / rate.nominal(),
        );
        Self::from_fields(record, rate)
    }

    /// Parse `HH:MM:SS<sep>FF` text, where each field has one or two digits
    /// and the separators are any single non-digit character.
    ///
    /// ```
    /// use sceneforged_timecode::{Error, FrameRate, Timecode};
    ///
    /// let tc = Timecode::parse("01:02:03;04", FrameRate::NTSC_29_97)?;
    /// assert_eq!(tc.frame_count(), 111_582);
    ///
    /// let err = Timecode::parse("not-a-timecode", FrameRate::NTSC_29_97).unwrap_err();
    /// assert!(matches!(err, Error::InvalidFormat(_)));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn parse(input: &str, rate: FrameRate) -> Result<Self> {
        let Some(captures) = TIMECODE_PATTERN.captures(input) else {
            tracing::debug!(input, "rejected timecode string");
            return Err(Error::invalid_format(input));
        };

        let mut values = [0i64; 4];
        for (value, group) in values.iter_mut().zip(captures.iter().skip(1)) {
            let digits = group.map(|m| m.as_str()).unwrap_or_default();
            *value = digits.parse().map_err(|_| Error::invalid_format(input))?;
        }

        let [hours, minutes, seconds, frames] = values;
        Ok(Self::from_fields(
            FieldRecord::new(hours, minutes, seconds, frames),
            rate,
        ))
    }

    /// Whether `input` contains something shaped like a timecode.
    pub fn is_valid_str(input: &str) -> bool {
        TIMECODE_PATTERN.is_match(input)
    }

    fn apply_record(&mut self, record: &FieldRecord) {
        let assignments = record.assignments();
        // Raw values land first so later setters see the whole record.
        for (field, value) in assignments {
            if let Some(value) = value {
                self.fields[field] = value;
            }
        }
        for (field, value) in assignments {
            if let Some(value) = value {
                self.set_field(field, value);
            }
        }
    }
}

impl FromStr for Timecode {
    type Err = Error;

    /// Parse at the default 29.97 rate.
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, FrameRate::default())
    }
}
