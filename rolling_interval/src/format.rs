//! Time tokens for rolled file names.
//!
//! Each granularity has a fixed digit-grouping template (`yyyyMMdd`, ...)
//! that consumers use verbatim when composing file names. Templates collide
//! on purpose: Week shares Day's template and every sub-hour granularity
//! shares `yyyyMMddHHmm`, so the bucket width is only visible through the
//! minute value. A token alone does not say which sub-hour granularity
//! produced it.
//!
//! ```
//! use rolling_interval::{Granularity, Instant, Kind, render_token};
//!
//! let t = Instant::from_ymd_hms(2020, 3, 1, 13, 45, 30, Kind::Utc).unwrap();
//! assert_eq!(Granularity::Day.token_format(), "yyyyMMdd");
//! assert_eq!(render_token(Granularity::Day, t), "20200301");
//! ```

use crate::{
    checkpoint::current_checkpoint,
    error::Result,
    granularity::Granularity,
    instant::{Instant, Kind},
};

/// Literal token template for `granularity`; empty for
/// [`Granularity::Infinite`].
pub const fn token_format(granularity: Granularity) -> &'static str {
    match granularity {
        Granularity::Infinite => "",
        Granularity::Year => "yyyy",
        Granularity::Month => "yyyyMM",
        Granularity::Week => "yyyyMMdd",
        Granularity::Day => "yyyyMMdd",
        Granularity::Hour => "yyyyMMddHH",
        Granularity::Minute
        | Granularity::FiveMinutes
        | Granularity::TenMinutes
        | Granularity::QuarterHour
        | Granularity::HalfHour => "yyyyMMddHHmm",
    }
}

/// [`token_format`] for a raw catalog discriminant.
pub fn token_format_for(discriminant: i64) -> Result<&'static str> {
    Ok(token_format(Granularity::try_from(discriminant)?))
}

impl Granularity {
    /// See [`token_format`].
    pub const fn token_format(self) -> &'static str {
        token_format(self)
    }
}

/// strftime equivalent of the token template.
const fn strftime(granularity: Granularity) -> &'static str {
    match granularity {
        Granularity::Infinite => "",
        Granularity::Year => "%Y",
        Granularity::Month => "%Y%m",
        Granularity::Week | Granularity::Day => "%Y%m%d",
        Granularity::Hour => "%Y%m%d%H",
        Granularity::Minute
        | Granularity::FiveMinutes
        | Granularity::TenMinutes
        | Granularity::QuarterHour
        | Granularity::HalfHour => "%Y%m%d%H%M",
    }
}

/// Render the current checkpoint of `instant` as a token.
///
/// Empty for [`Granularity::Infinite`]. Years outside `0..=9999` render with
/// a sign and more digits, and will not parse back.
pub fn render_token(granularity: Granularity, instant: Instant) -> String {
    current_checkpoint(granularity, instant)
        .map(|checkpoint| checkpoint.naive().format(strftime(granularity)).to_string())
        .unwrap_or_default()
}

/// Recover the checkpoint a token was rendered from, tagged with `kind`.
///
/// The token must be exactly as wide as the template, all ASCII digits, and
/// name a bucket start for `granularity` (a FiveMinutes token ending in `47`
/// is rejected). Always `None` for [`Granularity::Infinite`].
pub fn parse_token(granularity: Granularity, token: &str, kind: Kind) -> Option<Instant> {
    let width = token_format(granularity).len();
    if width == 0 || token.len() != width || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // (offset, len, default) for year, month, day, hour, minute
    let field = |start: usize, len: usize, default: u32| -> Option<u32> {
        match token.get(start..start + len) {
            Some(digits) => digits.parse().ok(),
            None => Some(default),
        }
    };
    let year = i32::try_from(field(0, 4, 0)?).ok()?;
    let parsed = Instant::from_ymd_hms(
        year,
        field(4, 2, 1)?,
        field(6, 2, 1)?,
        field(8, 2, 0)?,
        field(10, 2, 0)?,
        0,
        kind,
    )?;
    (current_checkpoint(granularity, parsed) == Some(parsed)).then_some(parsed)
}
