//! # sceneforged-timecode
//!
//! SMPTE timecode arithmetic for subtitle and editorial tooling.
//!
//! This crate represents an `HH:MM:SS:FF` screen-time address at a given
//! frame rate and provides:
//!
//! - Construction from frame counts, times of day, strings, and field records
//! - Field normalization with carry propagation and day wrap-around
//! - NTSC drop-frame numbering for 29.97 and 59.94 fps
//! - Conversion to and from linear frame counts
//! - Addition and subtraction across frame rates
//! - Pulldown/pullup between frame rates, anchored on a shared start
//! - Canonical and SRT rendering
//!
//! It performs no I/O; callers own reading and writing.
//!
//! ## Example
//!
//! ```
//! use sceneforged_timecode::{FieldRecord, FrameRate, Timecode};
//!
//! let rate = FrameRate::NTSC_29_97;
//!
//! let hour = Timecode::from_fields(FieldRecord::new(1, 0, 0, 0), rate);
//! assert_eq!(hour.frame_count(), 107892);
//!
//! let dropped = Timecode::from_fields(FieldRecord::new(0, 1, 0, 0), rate);
//! assert_eq!(dropped.to_string(), "00:01:00;02");
//!
//! let film = dropped.pulldown(FrameRate::FILM_24, 0);
//! assert_eq!(film.to_string(), "00:01:00:00");
//! ```

pub mod config;
pub mod error;
pub mod rate;
pub mod timecode;

pub use config::{TimecodeConfig, TimecodeConfigBuilder};
pub use error::{Error, Result};
pub use rate::{exact_frame_rate, FrameRate};
pub use timecode::{FieldRecord, Fields, Timecode, TimecodeInput};
