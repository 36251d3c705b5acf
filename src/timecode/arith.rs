//! Addition and subtraction.
//!
//! Operands are reconciled to the receiver's frame rate, then combined field
//! by field from hours down to frames so each sum carries into the field
//! above it. Results wrap silently at the day boundary.

use std::cmp::Ordering;
use std::ops::{Add, Sub};

use super::{Timecode, FRAMES, HOURS};
use crate::error::Result;

impl Timecode {
    /// Sum of two timecodes at this timecode's frame rate.
    ///
    /// ```
    /// use sceneforged_timecode::{FrameRate, Timecode};
    ///
    /// let rate = FrameRate::NTSC_30;
    /// let end = Timecode::parse("23:59:59:29", rate)?;
    /// let next = end.add(&Timecode::from_frame_count(1, rate));
    /// assert_eq!(next.to_string(), "00:00:00:00");
    /// # Ok::<(), sceneforged_timecode::Error>(())
    /// ```
    pub fn add(self, other: &Timecode) -> Timecode {
        self.combine(other, 1)
    }

    /// Difference of two timecodes at this timecode's frame rate.
    pub fn subtract(self, other: &Timecode) -> Timecode {
        self.combine(other, -1)
    }

    /// Add any input, promoted to a timecode at this frame rate first.
    pub fn add_input(&self, other: impl Into<super::TimecodeInput>) -> Result<Timecode> {
        let other = Timecode::new(other, self.rate)?;
        Ok(self.combine(&other, 1))
    }

    /// Subtract any input, promoted to a timecode at this frame rate first.
    pub fn subtract_input(&self, other: impl Into<super::TimecodeInput>) -> Result<Timecode> {
        let other = Timecode::new(other, self.rate)?;
        Ok(self.combine(&other, -1))
    }

    fn combine(&self, other: &Timecode, sign: i64) -> Timecode {
        if self.rate != other.rate {
            return self.combine(&other.pulldown(self.rate, 0), sign);
        }

        let mut tc = *self;
        for field in HOURS..=FRAMES {
            tc.set_field(field, self.fields[field] + sign * other.fields[field]);
        }
        tc
    }
}

impl Add for Timecode {
    type Output = Timecode;

    fn add(self, rhs: Timecode) -> Timecode {
        Timecode::add(self, &rhs)
    }
}

impl Add<&Timecode> for &Timecode {
    type Output = Timecode;

    fn add(self, rhs: &Timecode) -> Timecode {
        Timecode::add(*self, rhs)
    }
}

/// Adds a frame count at the receiver's frame rate.
impl Add<i64> for Timecode {
    type Output = Timecode;

    fn add(self, frames: i64) -> Timecode {
        Timecode::add(self, &Timecode::from_frame_count(frames, self.rate))
    }
}

impl Sub for Timecode {
    type Output = Timecode;

    fn sub(self, rhs: Timecode) -> Timecode {
        Timecode::subtract(self, &rhs)
    }
}

impl Sub<&Timecode> for &Timecode {
    type Output = Timecode;

    fn sub(self, rhs: &Timecode) -> Timecode {
        Timecode::subtract(*self, rhs)
    }
}

/// Subtracts a frame count at the receiver's frame rate.
impl Sub<i64> for Timecode {
    type Output = Timecode;

    fn sub(self, frames: i64) -> Timecode {
        Timecode::subtract(self, &Timecode::from_frame_count(frames, self.rate))
    }
}

/// Timecodes at different frame rates are unordered.
impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.rate != other.rate {
            return None;
        }
        self.frame_count().partial_cmp(&other.frame_count())
    }
}
