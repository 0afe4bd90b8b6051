//! Roll decisions for a file that is reopened per bucket.
//!
//! [`RollSchedule`] keeps the bucket that is currently open and its cached
//! next checkpoint, so a caller only recomputes boundaries when an event
//! reaches that checkpoint. It performs no I/O and reads no clock: the caller
//! feeds it instants and acts on the [`Bucket`] it hands back.
//!
//! ```
//! use rolling_interval::{Granularity, Instant, Kind, RollSchedule};
//!
//! let mut schedule = RollSchedule::new(Granularity::Hour);
//! let t = |h, m| Instant::from_ymd_hms(2020, 3, 1, h, m, 0, Kind::Utc).unwrap();
//!
//! let opened = schedule.observe(t(13, 5)).unwrap().unwrap();
//! assert_eq!(opened.token(), "2020030113");
//! assert!(schedule.observe(t(13, 59)).unwrap().is_none());
//! assert_eq!(schedule.observe(t(14, 0)).unwrap().unwrap().token(), "2020030114");
//! ```

use tracing::debug;

use crate::{
    checkpoint::{current_checkpoint, next_checkpoint},
    error::Result,
    format::render_token,
    granularity::Granularity,
    instant::Instant,
};

/// The half-open interval `[start, end)` one granularity assigns to an
/// instant.
///
/// Both ends are `None` for [`Granularity::Infinite`]; that bucket spans all
/// of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    granularity: Granularity,
    start: Option<Instant>,
    end: Option<Instant>,
}

impl Bucket {
    /// The bucket of `granularity` that contains `instant`.
    pub fn for_instant(granularity: Granularity, instant: Instant) -> Result<Self> {
        Ok(Self {
            granularity,
            start: current_checkpoint(granularity, instant),
            end: next_checkpoint(granularity, instant)?,
        })
    }

    /// Granularity the bucket was computed for.
    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Current checkpoint.
    pub const fn start(&self) -> Option<Instant> {
        self.start
    }

    /// Next checkpoint; the bucket must be closed once it is reached.
    pub const fn end(&self) -> Option<Instant> {
        self.end
    }

    /// Whether `instant` falls inside `[start, end)`.
    ///
    /// Compares calendar fields only; the kind tag is not consulted.
    pub fn contains(&self, instant: Instant) -> bool {
        let t = instant.naive();
        self.start.is_none_or(|start| start.naive() <= t)
            && self.end.is_none_or(|end| t < end.naive())
    }

    /// File name token for the bucket start; empty for Infinite.
    pub fn token(&self) -> String {
        self.start
            .map(|start| render_token(self.granularity, start))
            .unwrap_or_default()
    }
}

/// Tracks the open bucket for one rolling file.
#[derive(Debug, Clone)]
pub struct RollSchedule {
    granularity: Granularity,
    current: Option<Bucket>,
}

impl RollSchedule {
    /// A schedule with no bucket opened yet.
    pub const fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            current: None,
        }
    }

    /// Configured granularity.
    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// The open bucket, if anything was observed yet.
    pub const fn current(&self) -> Option<&Bucket> {
        self.current.as_ref()
    }

    /// Cached instant at which the open bucket has to be closed.
    pub fn next_checkpoint(&self) -> Option<Instant> {
        self.current.and_then(|bucket| bucket.end())
    }

    /// Whether observing `instant` would open a new bucket.
    ///
    /// True before the first observation and once `instant` reaches the
    /// cached next checkpoint. Instants that go backwards never roll.
    pub fn needs_roll(&self, instant: Instant) -> bool {
        match &self.current {
            None => true,
            Some(bucket) => bucket
                .end()
                .is_some_and(|end| instant.naive() >= end.naive()),
        }
    }

    /// Record `instant`; returns the newly opened bucket when a roll happens.
    ///
    /// On error the previously open bucket is kept.
    pub fn observe(&mut self, instant: Instant) -> Result<Option<Bucket>> {
        if !self.needs_roll(instant) {
            return Ok(None);
        }
        let bucket = Bucket::for_instant(self.granularity, instant)?;
        debug!(
            granularity = %self.granularity,
            token = %bucket.token(),
            start = ?bucket.start(),
            end = ?bucket.end(),
            rolled = self.current.is_some(),
            "opening bucket"
        );
        self.current = Some(bucket);
        Ok(Some(bucket))
    }
}
