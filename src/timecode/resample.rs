//! Frame-rate conversion that preserves elapsed time from a shared start.

use super::Timecode;
use crate::rate::FrameRate;

impl Timecode {
    /// Re-express this timecode at `rate`.
    ///
    /// Frames elapsed since `start` (a frame count, usually 0) are scaled by
    /// the ratio of nominal rates and rounded up, then re-anchored on `start`
    /// at the new rate.
    ///
    /// ```
    /// use sceneforged_timecode::{FrameRate, Timecode};
    ///
    /// let film = Timecode::parse("00:00:01:12", FrameRate::FILM_24)?;
    /// let pal = film.pulldown(FrameRate::PAL_25, 0);
    /// assert_eq!(pal.to_string(), "00:00:01:13");
    /// # Ok::<(), sceneforged_timecode::Error>(())
    /// ```
    pub fn pulldown(&self, rate: FrameRate, start: i64) -> Timecode {
        let old_base = Timecode::from_frame_count(start, self.rate);
        let new_base = Timecode::from_frame_count(start, rate);

        let elapsed = self.subtract(&old_base).frame_count();
        let rescaled = div_ceil(elapsed * rate.nominal(), self.rate.nominal());
        tracing::trace!(
            from = %self.rate,
            to = %rate,
            elapsed,
            rescaled,
            "resampling timecode"
        );

        Timecode::from_frame_count(rescaled, rate).add(&new_base)
    }

    /// Same conversion as [`Timecode::pulldown`]; the rate ratio already
    /// covers either direction.
    pub fn pullup(&self, rate: FrameRate, start: i64) -> Timecode {
        self.pulldown(rate, start)
    }
}

fn div_ceil(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator / denominator;
    if numerator % denominator != 0 && (numerator > 0) == (denominator > 0) {
        quotient + 1
    } else {
        quotient
    }
}
