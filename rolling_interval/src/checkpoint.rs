//! checkpoint.rs — bucket boundaries for a rolling granularity
//!
//! - Current checkpoint: the instant truncated to the start of its bucket.
//! - Next checkpoint: the current checkpoint advanced by one bucket width.
//! - Year/Month advance by calendar months, Week/Day by calendar days,
//!   everything below a day by a fixed number of minutes.
//! - Sub-hour buckets are aligned inside the hour: minute = minute / w * w.
//! - Week buckets start on the day of the instant, not on a fixed weekday.
//!
//! The kind of the input instant is carried unchanged onto every result.
//! [`Granularity::Infinite`] has no boundaries: both checkpoints are `None`.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use tracing::trace;

use crate::{
    error::{Error, Result},
    granularity::Granularity,
    instant::Instant,
};

/// Minutes in an hour; sub-hour widths divide it evenly.
const MINUTES_PER_HOUR: u32 = 60;

/// One bucket width in the unit it has to be added in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Months(u32),
    Days(u64),
    Minutes(i64),
}

const fn step(granularity: Granularity) -> Option<Step> {
    match granularity {
        Granularity::Infinite => None,
        Granularity::Year => Some(Step::Months(12)),
        Granularity::Month => Some(Step::Months(1)),
        Granularity::Week => Some(Step::Days(7)),
        Granularity::Day => Some(Step::Days(1)),
        Granularity::Hour => Some(Step::Minutes(60)),
        Granularity::Minute => Some(Step::Minutes(1)),
        Granularity::FiveMinutes => Some(Step::Minutes(5)),
        Granularity::TenMinutes => Some(Step::Minutes(10)),
        Granularity::QuarterHour => Some(Step::Minutes(15)),
        Granularity::HalfHour => Some(Step::Minutes(30)),
    }
}

/// Start of the bucket containing `instant`, or `None` for
/// [`Granularity::Infinite`].
///
/// The result never exceeds `instant` and truncating it again yields itself.
pub fn current_checkpoint(granularity: Granularity, instant: Instant) -> Option<Instant> {
    let current = instant.map_naive(|naive| truncate(granularity, naive));
    trace!(%granularity, %instant, ?current, "current checkpoint");
    current
}

/// Start of the bucket after the one containing `instant`, or `None` for
/// [`Granularity::Infinite`].
///
/// Errors with [`Error::CheckpointOutOfRange`] when the boundary falls past
/// the last representable date.
pub fn next_checkpoint(granularity: Granularity, instant: Instant) -> Result<Option<Instant>> {
    let (Some(current), Some(step)) = (current_checkpoint(granularity, instant), step(granularity))
    else {
        return Ok(None);
    };
    let next = current
        .map_naive(|naive| advance(naive, step))
        .ok_or(Error::CheckpointOutOfRange {
            granularity,
            checkpoint: current,
        })?;
    trace!(%granularity, %current, %next, "next checkpoint");
    Ok(Some(next))
}

/// [`current_checkpoint`] for a raw catalog discriminant.
pub fn current_checkpoint_for(discriminant: i64, instant: Instant) -> Result<Option<Instant>> {
    let granularity = Granularity::try_from(discriminant)?;
    Ok(current_checkpoint(granularity, instant))
}

/// [`next_checkpoint`] for a raw catalog discriminant.
pub fn next_checkpoint_for(discriminant: i64, instant: Instant) -> Result<Option<Instant>> {
    next_checkpoint(Granularity::try_from(discriminant)?, instant)
}

impl Granularity {
    /// See [`current_checkpoint`].
    pub fn current_checkpoint(self, instant: Instant) -> Option<Instant> {
        current_checkpoint(self, instant)
    }

    /// See [`next_checkpoint`].
    pub fn next_checkpoint(self, instant: Instant) -> Result<Option<Instant>> {
        next_checkpoint(self, instant)
    }
}

// ----- truncation -----

fn truncate(granularity: Granularity, naive: NaiveDateTime) -> Option<NaiveDateTime> {
    let date = naive.date();
    let at_minute = |minute: u32| {
        midnight(date) + TimeDelta::minutes(i64::from(naive.hour() * MINUTES_PER_HOUR + minute))
    };
    let checkpoint = match granularity {
        Granularity::Infinite => return None,
        Granularity::Year => midnight(date - Days::new(u64::from(date.ordinal0()))),
        Granularity::Month => midnight(date - Days::new(u64::from(date.day0()))),
        // day precision, not weekday-aligned
        Granularity::Week => midnight(date),
        Granularity::Day => midnight(date),
        Granularity::Hour => at_minute(0),
        Granularity::Minute => at_minute(naive.minute()),
        Granularity::FiveMinutes => at_minute(floor_to(naive.minute(), 5)),
        Granularity::TenMinutes => at_minute(floor_to(naive.minute(), 10)),
        Granularity::QuarterHour => at_minute(floor_to(naive.minute(), 15)),
        Granularity::HalfHour => at_minute(floor_to(naive.minute(), 30)),
    };
    Some(checkpoint)
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

const fn floor_to(minute: u32, width: u32) -> u32 {
    minute / width * width
}

// ----- advancing -----

fn advance(naive: NaiveDateTime, step: Step) -> Option<NaiveDateTime> {
    match step {
        Step::Months(n) => naive.checked_add_months(Months::new(n)),
        Step::Days(n) => naive.checked_add_days(Days::new(n)),
        Step::Minutes(n) => naive.checked_add_signed(TimeDelta::minutes(n)),
    }
}
