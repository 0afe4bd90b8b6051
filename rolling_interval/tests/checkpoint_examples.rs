mod common;
use common::at;

use rolling_interval::{
    Error, Granularity, Instant, Kind, current_checkpoint, current_checkpoint_for,
    next_checkpoint, next_checkpoint_for, render_token, token_format, token_format_for,
};

fn boundaries(g: Granularity, t: Instant) -> (Option<Instant>, Option<Instant>) {
    (current_checkpoint(g, t), next_checkpoint(g, t).expect("in range"))
}

#[test]
fn day_example() {
    let t = at(2020, 3, 1, 13, 45, 30);
    let (cur, next) = boundaries(Granularity::Day, t);
    assert_eq!(cur, Some(at(2020, 3, 1, 0, 0, 0)));
    assert_eq!(next, Some(at(2020, 3, 2, 0, 0, 0)));
    assert_eq!(token_format(Granularity::Day), "yyyyMMdd");
    assert_eq!(render_token(Granularity::Day, t), "20200301");
}

#[test]
fn five_minutes_example() {
    let (cur, next) = boundaries(Granularity::FiveMinutes, at(2020, 3, 1, 13, 47, 0));
    assert_eq!(cur, Some(at(2020, 3, 1, 13, 45, 0)));
    assert_eq!(next, Some(at(2020, 3, 1, 13, 50, 0)));
}

#[test]
fn month_end_example() {
    let (cur, next) = boundaries(Granularity::Month, at(2020, 1, 31, 10, 0, 0));
    assert_eq!(cur, Some(at(2020, 1, 1, 0, 0, 0)));
    assert_eq!(next, Some(at(2020, 2, 1, 0, 0, 0)));
}

#[test]
fn week_example_is_not_weekday_aligned() {
    // Wednesday
    let (cur, next) = boundaries(Granularity::Week, at(2020, 3, 4, 0, 0, 0));
    assert_eq!(cur, Some(at(2020, 3, 4, 0, 0, 0)));
    assert_eq!(next, Some(at(2020, 3, 11, 0, 0, 0)));
}

#[test]
fn leap_february_month_and_day() {
    let (cur, next) = boundaries(Granularity::Month, at(2024, 2, 29, 23, 0, 0));
    assert_eq!(cur, Some(at(2024, 2, 1, 0, 0, 0)));
    assert_eq!(next, Some(at(2024, 3, 1, 0, 0, 0)));

    let (_, next) = boundaries(Granularity::Day, at(2024, 2, 28, 12, 0, 0));
    assert_eq!(next, Some(at(2024, 2, 29, 0, 0, 0)));
}

#[test]
fn utc_and_local_instants_keep_their_kind() {
    for kind in [Kind::Utc, Kind::Local] {
        let t = Instant::from_ymd_hms(2020, 12, 31, 23, 59, 0, kind).unwrap();
        let (cur, next) = boundaries(Granularity::Year, t);
        assert_eq!(cur, Instant::from_ymd_hms(2020, 1, 1, 0, 0, 0, kind));
        assert_eq!(next, Instant::from_ymd_hms(2021, 1, 1, 0, 0, 0, kind));
    }
}

#[test]
fn unsupported_discriminant_fails_every_operation() {
    let t = at(2020, 3, 1, 13, 45, 30);
    for bad in [-7, 11, 255] {
        assert!(matches!(token_format_for(bad), Err(Error::UnsupportedGranularity(_))));
        assert!(matches!(
            current_checkpoint_for(bad, t),
            Err(Error::UnsupportedGranularity(_))
        ));
        assert!(matches!(
            next_checkpoint_for(bad, t),
            Err(Error::UnsupportedGranularity(_))
        ));
    }
}

#[test]
fn every_discriminant_agrees_with_typed_api() {
    let t = at(2021, 6, 15, 8, 38, 12);
    for g in Granularity::ALL {
        let d = i64::from(g.discriminant());
        assert_eq!(token_format_for(d).unwrap(), token_format(g));
        assert_eq!(current_checkpoint_for(d, t).unwrap(), current_checkpoint(g, t));
        assert_eq!(next_checkpoint_for(d, t).unwrap(), next_checkpoint(g, t).unwrap());
    }
}

#[test]
fn unsupported_error_message() {
    let err = Granularity::try_from(12_i64).unwrap_err();
    assert_eq!(err.to_string(), "Unsupported granularity: discriminant 12");
}

#[test]
fn early_years_render_and_parse_back() {
    let t = Instant::from_ymd_hms(7, 6, 15, 8, 38, 12, Kind::Local).unwrap();
    for g in Granularity::ALL {
        let token = rolling_interval::render_token(g, t);
        assert_eq!(
            rolling_interval::parse_token(g, &token, Kind::Local),
            current_checkpoint(g, t),
            "{g} {token}"
        );
    }
}

#[test]
fn calendar_extremes_do_not_panic() {
    let first = Instant::utc(chrono::NaiveDateTime::MIN);
    let last = Instant::utc(chrono::NaiveDateTime::MAX);
    for g in Granularity::ALL.into_iter().filter(|g| g.rolls()) {
        let cur = current_checkpoint(g, first).unwrap();
        assert!(cur <= first, "{g}");
        assert!(matches!(
            next_checkpoint(g, last),
            Err(Error::CheckpointOutOfRange { granularity, .. }) if granularity == g
        ));
    }
}

#[test]
fn json_discriminants() {
    let week: Granularity = serde_json::from_str("3").unwrap();
    assert_eq!(week, Granularity::Week);
    assert!(serde_json::from_str::<Granularity>("-1").is_err());
    assert!(serde_json::from_str::<Granularity>("1.5").is_err());
}
