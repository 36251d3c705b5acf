//! Conversion between the four fields and a linear frame count.

use super::{Timecode, FRAMES, HOURS, MINUTES, SECONDS};
use crate::rate::FrameRate;

impl Timecode {
    /// Frames elapsed since `00:00:00:00`, honoring drop-frame numbering.
    pub fn frame_count(&self) -> i64 {
        self.frames_in_hours()
            + self.frames_in_minutes()
            + self.frames_in_seconds()
            + self.fields[FRAMES]
    }

    /// Build a timecode from a frame count.
    ///
    /// Counts past one day wrap, negative counts borrow backwards from
    /// midnight.
    pub fn from_frame_count(count: i64, rate: FrameRate) -> Self {
        let mut tc = Self::zero(rate);
        tc.set_from_frame_count(count);
        tc
    }

    fn set_from_frame_count(&mut self, count: i64) {
        let per_hour = self.rate.frames_per_hour();
        let per_ten_minutes = self.rate.frames_per_ten_minutes();
        let per_minute = self.rate.frames_per_minute();
        let mut remaining = count;

        self.set_field(HOURS, remaining / per_hour);
        remaining -= self.frames_in_hours();

        let ten_minutes = remaining / per_ten_minutes;
        remaining -= ten_minutes * per_ten_minutes;

        // The first minute of a ten-minute block keeps every frame number, so
        // a remainder below the drop count still belongs to the minute before.
        let mut single_minutes = remaining / per_minute;
        remaining -= single_minutes * per_minute;
        if single_minutes > 0 && remaining < self.rate.frames_to_drop() {
            single_minutes -= 1;
            remaining += per_minute;
        }
        self.set_field(MINUTES, ten_minutes * 10 + single_minutes);

        self.set_field(SECONDS, remaining / self.rate.nominal());
        remaining -= self.frames_in_seconds();

        self.set_field(FRAMES, remaining);
    }

    fn frames_in_hours(&self) -> i64 {
        self.fields[HOURS] * self.rate.frames_per_hour()
    }

    fn frames_in_minutes(&self) -> i64 {
        let minutes = self.fields[MINUTES];
        (minutes / 10) * self.rate.frames_per_ten_minutes()
            + (minutes % 10) * self.rate.frames_per_minute()
    }

    fn frames_in_seconds(&self) -> i64 {
        self.fields[SECONDS] * self.rate.nominal()
    }
}
