//! The closed catalog of rotation granularities.
//!
//! A [`Granularity`] names one fixed rotation period. The set is closed: the
//! format table and the checkpoint arithmetic both match on it exhaustively,
//! so a new variant cannot be added without updating them.
//!
//! Hosts usually read the granularity from configuration, so it parses from
//! its canonical name (case-insensitive) or from its catalog discriminant:
//! ```
//! use rolling_interval::Granularity;
//!
//! let g: Granularity = "quarterhour".parse().unwrap();
//! assert_eq!(g, Granularity::QuarterHour);
//! assert_eq!(Granularity::try_from(4_i64).unwrap(), Granularity::Day);
//! assert!(Granularity::try_from(11_i64).is_err());
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Rotation period of a rolling file.
///
/// Discriminants follow catalog order and are stable; they are accepted from
/// configuration through [`TryFrom<i64>`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GranularityRepr", into = "String")]
#[repr(u8)]
pub enum Granularity {
    /// Never rolls; the file has no time token.
    Infinite = 0,
    /// Calendar year
    Year = 1,
    /// Calendar month
    Month = 2,
    /// Seven days anchored on the day of the instant (not a calendar week)
    Week = 3,
    /// Calendar day
    Day = 4,
    /// Hour
    Hour = 5,
    /// Minute
    Minute = 6,
    /// 5 minutes, aligned to :00, :05, ...
    FiveMinutes = 7,
    /// 10 minutes, aligned to :00, :10, ...
    TenMinutes = 8,
    /// 15 minutes, aligned to :00, :15, :30, :45
    QuarterHour = 9,
    /// 30 minutes, aligned to :00 and :30
    HalfHour = 10,
}

impl Granularity {
    /// Every granularity, in catalog order.
    pub const ALL: [Granularity; 11] = [
        Granularity::Infinite,
        Granularity::Year,
        Granularity::Month,
        Granularity::Week,
        Granularity::Day,
        Granularity::Hour,
        Granularity::Minute,
        Granularity::FiveMinutes,
        Granularity::TenMinutes,
        Granularity::QuarterHour,
        Granularity::HalfHour,
    ];

    /// Canonical name, as written in configuration.
    pub const fn name(self) -> &'static str {
        match self {
            Granularity::Infinite => "Infinite",
            Granularity::Year => "Year",
            Granularity::Month => "Month",
            Granularity::Week => "Week",
            Granularity::Day => "Day",
            Granularity::Hour => "Hour",
            Granularity::Minute => "Minute",
            Granularity::FiveMinutes => "FiveMinutes",
            Granularity::TenMinutes => "TenMinutes",
            Granularity::QuarterHour => "QuarterHour",
            Granularity::HalfHour => "HalfHour",
        }
    }

    /// Stable catalog discriminant.
    pub const fn discriminant(self) -> u8 {
        self as u8
    }

    /// `false` only for [`Granularity::Infinite`].
    pub const fn rolls(self) -> bool {
        !matches!(self, Granularity::Infinite)
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Granularity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("none") {
            return Ok(Granularity::Infinite);
        }
        Granularity::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnsupportedGranularity(format!("{s:?}")))
    }
}

impl TryFrom<i64> for Granularity {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|idx| Granularity::ALL.get(idx).copied())
            .ok_or_else(|| Error::UnsupportedGranularity(format!("discriminant {value}")))
    }
}

impl From<Granularity> for String {
    fn from(g: Granularity) -> Self {
        g.name().to_string()
    }
}

/// Accepted wire shapes: a name or a discriminant.
#[derive(Deserialize)]
#[serde(untagged)]
enum GranularityRepr {
    Name(String),
    Discriminant(i64),
}

impl TryFrom<GranularityRepr> for Granularity {
    type Error = Error;

    fn try_from(repr: GranularityRepr) -> Result<Self, Self::Error> {
        match repr {
            GranularityRepr::Name(name) => name.parse(),
            GranularityRepr::Discriminant(d) => Granularity::try_from(d),
        }
    }
}
