//! Calendar instants tagged with an offset kind.
//!
//! An [`Instant`] is a wall-clock [`NaiveDateTime`] plus a [`Kind`] saying how
//! its offset is to be read. Nothing in this crate converts between kinds:
//! every derived instant copies the kind of the instant it came from.

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the offset of an [`Instant`] is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// Coordinated universal time
    Utc,
    /// The host's local offset
    Local,
    /// No offset information
    Unspecified,
}

/// Wall-clock fields plus a [`Kind`] tag.
///
/// Ordering compares the calendar fields first and falls back to the kind,
/// so two instants with equal fields but different kinds are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Instant {
    naive: NaiveDateTime,
    kind: Kind,
}

impl Instant {
    /// Tag `naive` with `kind`.
    pub const fn new(naive: NaiveDateTime, kind: Kind) -> Self {
        Self { naive, kind }
    }

    /// Wall-clock fields read as UTC.
    pub const fn utc(naive: NaiveDateTime) -> Self {
        Self::new(naive, Kind::Utc)
    }

    /// Wall-clock fields read in the host's local offset.
    pub const fn local(naive: NaiveDateTime) -> Self {
        Self::new(naive, Kind::Local)
    }

    /// Wall-clock fields with no offset information.
    pub const fn unspecified(naive: NaiveDateTime) -> Self {
        Self::new(naive, Kind::Unspecified)
    }

    /// Build from calendar fields; `None` when they do not name a valid time.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        kind: Kind,
    ) -> Option<Self> {
        let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;
        Some(Self::new(naive, kind))
    }

    /// The wall-clock fields.
    pub const fn naive(&self) -> NaiveDateTime {
        self.naive
    }

    /// The offset kind.
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Replace the wall-clock fields through `f`, keeping the kind.
    pub(crate) fn map_naive(
        self,
        f: impl FnOnce(NaiveDateTime) -> Option<NaiveDateTime>,
    ) -> Option<Self> {
        f(self.naive).map(|naive| Self::new(naive, self.kind))
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::utc(dt.naive_utc())
    }
}

impl From<DateTime<Local>> for Instant {
    fn from(dt: DateTime<Local>) -> Self {
        Self::local(dt.naive_local())
    }
}

impl From<NaiveDateTime> for Instant {
    fn from(naive: NaiveDateTime) -> Self {
        Self::unspecified(naive)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.naive.format("%Y-%m-%dT%H:%M:%S%.f"), self.kind)
    }
}
