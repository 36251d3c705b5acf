//! Integration tests for timecode construction, arithmetic, and rendering.

use assert_matches::assert_matches;
use chrono::NaiveTime;
use sceneforged_timecode::{Error, FieldRecord, FrameRate, Timecode, TimecodeConfig};

const RATES: [FrameRate; 8] = [
    FrameRate::FILM_23_976,
    FrameRate::FILM_24,
    FrameRate::PAL_25,
    FrameRate::NTSC_29_97,
    FrameRate::NTSC_30,
    FrameRate::PAL_50,
    FrameRate::NTSC_59_94,
    FrameRate::FPS_60,
];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("sceneforged_timecode=trace")
        .with_test_writer()
        .try_init();
}

/// Counts sampled across the day, including both sides of every minute.
fn sample_counts(rate: FrameRate) -> impl Iterator<Item = i64> {
    let per_day = rate.frames_per_day();
    let per_minute = rate.frames_per_minute();
    (0..per_day)
        .step_by(7919)
        .chain((1..24 * 60).flat_map(move |m| {
            let edge = m * per_minute;
            edge - 3..edge + 3
        }))
        .chain([per_day - 1])
        .filter(move |&n| (0..per_day).contains(&n))
}

// ---------------------------------------------------------------------------
// Frame counts
// ---------------------------------------------------------------------------

#[test]
fn frame_count_round_trip() {
    for rate in RATES {
        for count in sample_counts(rate) {
            let tc = Timecode::from_frame_count(count, rate);
            assert_eq!(tc.frame_count(), count, "{rate} at {count} gave {tc}");
        }
    }
}

#[test]
fn drop_frame_hour_count() {
    let tc = Timecode::from_fields(FieldRecord::new(1, 0, 0, 0), FrameRate::NTSC_29_97);
    assert_eq!(tc.frame_count(), 107892);
}

#[test]
fn drop_frame_rendering() {
    let tc = Timecode::from_frame_count(107892, FrameRate::NTSC_29_97);
    assert_eq!(tc.to_string(), "01:00:00;00");
}

// ---------------------------------------------------------------------------
// Drop-frame invariant
// ---------------------------------------------------------------------------

fn assert_not_dropped(tc: &Timecode) {
    let dropped = tc.seconds() == 0 && tc.minutes() % 10 != 0 && tc.frames() < 2;
    assert!(!dropped, "{tc} uses a dropped frame number");
}

#[test]
fn drop_frame_correction_on_construction() {
    let tc = Timecode::from_fields(FieldRecord::new(0, 1, 0, 0), FrameRate::NTSC_29_97);
    assert_eq!(tc.to_string(), "00:01:00;02");
}

#[test]
fn no_construction_path_yields_a_dropped_frame() {
    let rate = FrameRate::NTSC_29_97;

    for count in sample_counts(rate) {
        assert_not_dropped(&Timecode::from_frame_count(count, rate));
    }

    for minute in 0..60 {
        for frames in 0..2 {
            let record = FieldRecord::new(0, minute, 0, frames);
            assert_not_dropped(&Timecode::from_fields(record, rate));

            let text = format!("00:{minute:02}:00;{frames:02}");
            assert_not_dropped(&Timecode::parse(&text, rate).unwrap());

            let time = NaiveTime::from_hms_opt(0, minute as u32, 0).unwrap();
            assert_not_dropped(&Timecode::from_time(&time, rate));
        }
    }

    let base = Timecode::parse("00:00:59;28", rate).unwrap();
    for step in 0..200 {
        assert_not_dropped(&(base + step));
        assert_not_dropped(&(base - step));
    }
}

// ---------------------------------------------------------------------------
// Strings
// ---------------------------------------------------------------------------

#[test]
fn string_round_trip() {
    for rate in RATES {
        for count in sample_counts(rate).step_by(11) {
            let tc = Timecode::from_frame_count(count, rate);
            let text = tc.to_string();
            let reparsed = Timecode::parse(&text, rate).unwrap();
            assert_eq!(reparsed.to_string(), text);
        }
    }
}

#[test]
fn parse_failure() {
    init_tracing();
    let result = Timecode::parse("not-a-timecode", FrameRate::NTSC_29_97);
    assert_matches!(result, Err(Error::InvalidFormat(input)) if input == "not-a-timecode");

    let result: Result<Timecode, _> = "12:34".parse();
    assert_matches!(result, Err(Error::InvalidFormat(_)));
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[test]
fn additive_identity() {
    for rate in RATES {
        for count in sample_counts(rate).step_by(13) {
            let tc = Timecode::from_frame_count(count, rate);
            let sum = tc.add(&Timecode::from_frame_count(0, rate));
            assert_eq!(sum.to_fields(), tc.to_fields());
        }
    }
}

#[test]
fn day_rollover() {
    let rate = FrameRate::NTSC_30;
    let tc = Timecode::from_fields(FieldRecord::new(23, 59, 59, 29), rate);
    let next = tc.add(&Timecode::from_frame_count(1, rate));
    assert_eq!(
        (next.hours(), next.minutes(), next.seconds(), next.frames()),
        (0, 0, 0, 0)
    );
}

#[test]
fn add_then_subtract_restores_non_drop_values() {
    let rate = FrameRate::PAL_25;
    let a = Timecode::parse("10:20:30:12", rate).unwrap();
    let b = Timecode::parse("03:45:50:20", rate).unwrap();
    assert_eq!((a + b) - b, a);
}

#[test]
fn mixed_rate_sum_uses_receiver_rate() {
    init_tracing();
    let video = Timecode::parse("00:00:10;00", FrameRate::NTSC_29_97).unwrap();
    let film = Timecode::parse("00:00:02:00", FrameRate::FILM_24).unwrap();

    let sum = video.add(&film);
    assert_eq!(sum.frame_rate(), FrameRate::NTSC_29_97);
    assert_eq!(sum.to_string(), "00:00:12;00");

    let sum = film.add(&video);
    assert_eq!(sum.frame_rate(), FrameRate::FILM_24);
    assert_eq!(sum.to_string(), "00:00:12:00");
}

// ---------------------------------------------------------------------------
// Resampling and rendering
// ---------------------------------------------------------------------------

#[test]
fn pulldown_and_pullup_agree() {
    let tc = Timecode::parse("01:23:45:06", FrameRate::FILM_23_976).unwrap();
    for rate in RATES {
        assert_eq!(tc.pulldown(rate, 0), tc.pullup(rate, 0));
        assert_eq!(tc.pulldown(rate, 500), tc.pullup(rate, 500));
    }
}

#[test]
fn srt_rendering() {
    let tc = Timecode::parse("00:10:20:15", FrameRate::NTSC_30).unwrap();
    assert_eq!(tc.to_srt_string(false), "00:10:20,500");

    let tc = Timecode::parse("00:00:02:12", FrameRate::FILM_24).unwrap();
    assert_eq!(tc.to_srt_string(true), "00:00:02,500");
}

#[test]
fn config_supplies_default_rate() {
    let config = TimecodeConfig::builder()
        .default_frame_rate(FrameRate::PAL_25)
        .build();
    let tc = Timecode::with_config("00:00:01:00", &config).unwrap();
    assert_eq!(tc.frame_rate(), FrameRate::PAL_25);
    assert_eq!(tc.frame_count(), 25);
}

#[test]
fn exact_rate_lookup() {
    assert_eq!(FrameRate::NTSC_29_97.exact(), 30000.0 / 1001.0);
    assert_eq!(FrameRate::NTSC_59_94.exact(), 60000.0 / 1001.0);
    assert_eq!(FrameRate::FILM_23_976.exact(), 24000.0 / 1001.0);
    assert_eq!(FrameRate::PAL_50.exact(), 50.0);
}
