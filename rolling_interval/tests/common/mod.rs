#![allow(dead_code)]

use chrono::NaiveDate;
use proptest::prelude::*;
use rolling_interval::{Granularity, Instant, Kind};

pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Instant {
    Instant::from_ymd_hms(y, mo, d, h, mi, s, Kind::Unspecified).expect("valid instant")
}

pub fn arb_kind() -> impl Strategy<Value = Kind> {
    prop_oneof![Just(Kind::Utc), Just(Kind::Local), Just(Kind::Unspecified)]
}

/// Instants across years 1..=9998 with sub-second precision.
pub fn arb_instant() -> impl Strategy<Value = Instant> {
    (
        1i32..=9998,
        1u32..=12,
        1u32..=31,
        0u32..24,
        0u32..60,
        0u32..60,
        0u32..1_000_000_000,
        arb_kind(),
    )
        .prop_filter_map("valid calendar date", |(y, mo, d, h, mi, s, ns, kind)| {
            let naive = NaiveDate::from_ymd_opt(y, mo, d)?.and_hms_nano_opt(h, mi, s, ns)?;
            Some(Instant::new(naive, kind))
        })
}

/// Every granularity except Infinite.
pub fn arb_rolling() -> impl Strategy<Value = Granularity> {
    let rolling: Vec<_> = Granularity::ALL.into_iter().filter(|g| g.rolls()).collect();
    proptest::sample::select(rolling)
}
