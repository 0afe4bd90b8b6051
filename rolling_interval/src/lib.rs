//! Time-based rotation boundaries for rolling files.
//!
//! Given a [`Granularity`] and an [`Instant`], this crate answers which bucket
//! the instant belongs to ([`current_checkpoint`]), when the following bucket
//! starts ([`next_checkpoint`]), and which literal token template names the
//! bucket in a file name ([`token_format`]). Everything is a pure function of
//! its arguments: no I/O, no clock reads.
//!
//! ```
//! use rolling_interval::{Granularity, Instant, Kind};
//!
//! let t = Instant::from_ymd_hms(2020, 3, 1, 13, 47, 0, Kind::Utc).unwrap();
//! let start = Granularity::FiveMinutes.current_checkpoint(t).unwrap();
//! let end = Granularity::FiveMinutes.next_checkpoint(t).unwrap().unwrap();
//! assert_eq!(start.naive().to_string(), "2020-03-01 13:45:00");
//! assert_eq!(end.naive().to_string(), "2020-03-01 13:50:00");
//! assert_eq!(end.kind(), Kind::Utc);
//! ```

#![deny(missing_docs)]

pub mod checkpoint;
pub mod error;
pub mod format;
pub mod granularity;
pub mod instant;
pub mod schedule;

pub use checkpoint::{
    current_checkpoint, current_checkpoint_for, next_checkpoint, next_checkpoint_for,
};
pub use error::{Error, Result};
pub use format::{parse_token, render_token, token_format, token_format_for};
pub use granularity::Granularity;
pub use instant::{Instant, Kind};
pub use schedule::{Bucket, RollSchedule};
