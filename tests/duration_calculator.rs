//! Public behaviour of `DurationCalculator` over the crate's own instants.

use tempspan::{DurationCalculator, InstantBuilder, InstantNs128, InstantS32, InstantS64, Unit};

fn date(year: i32, month: u8, day: u8) -> InstantS64 {
    InstantBuilder::new().year(year).month(month).day(day).build()
}

fn months(start: InstantS64, end: InstantS64) -> f64 {
    DurationCalculator::between(start, end).in_months()
}

#[test]
fn one_calendar_month_is_one_month() {
    assert_eq!(months(date(2019, 1, 1), date(2019, 2, 1)), 1.0);
    // Leap February.
    assert_eq!(months(date(2020, 2, 1), date(2020, 3, 1)), 1.0);
    assert_eq!(months(date(2021, 12, 31), date(2022, 1, 31)), 1.0);
}

#[test]
fn partial_months_use_the_real_month_length() {
    assert_eq!(months(date(2019, 4, 15), date(2019, 4, 30)), 0.5);
    assert_eq!(months(date(2019, 2, 1), date(2019, 2, 28)), 0.96);
    assert_eq!(months(date(2020, 2, 1), date(2020, 2, 29)), 0.97);
}

#[test]
fn months_across_years() {
    assert_eq!(months(date(2018, 3, 15), date(2019, 9, 15)), 18.0);
    for years in 1..=5 {
        assert_eq!(
            months(date(2017, 6, 10), date(2017 + years, 6, 10)),
            12.0 * years as f64
        );
    }
    // 16/31 + 9 + 8 + 14/30
    assert_eq!(months(date(2018, 3, 15), date(2019, 9, 14)), 17.98);
}

#[test]
fn fixed_units_for_eleven_months() {
    let duration = DurationCalculator::between(date(2011, 1, 1), date(2011, 12, 1));
    assert_eq!(duration.in_years(), 0.91);
    assert_eq!(duration.in_weeks(), 47.71);
    assert_eq!(duration.in_days(), 334.0);
    assert_eq!(duration.in_hours(), 8016.0);
    assert_eq!(duration.in_minutes(), 480960.0);
    assert_eq!(duration.in_seconds(), 28857600.0);
}

#[test]
fn swapped_instants_give_the_same_answers() {
    let pairs = [
        (date(2011, 1, 1), date(2011, 12, 1)),
        (date(2019, 12, 10), date(2020, 3, 5)),
        (date(2016, 3, 15), date(2019, 3, 10)),
    ];
    for (a, b) in pairs {
        let forward = DurationCalculator::between(a, b);
        let backward = DurationCalculator::between(b, a);
        assert_eq!(forward.in_each_component(), backward.in_each_component());
        assert_eq!(forward.in_general(), backward.in_general());
        assert_eq!(forward.elapsed(), backward.elapsed());
    }
}

#[test]
fn equal_instants_are_zero() {
    let x = date(2000, 2, 29);
    let duration = DurationCalculator::between(x, x);
    for unit in Unit::ALL {
        assert_eq!(duration.in_unit(unit), 0.0, "{unit}");
    }
}

#[test]
fn general_breakdown() {
    let duration = DurationCalculator::between(date(2009, 11, 1), date(2011, 1, 1));
    let general = duration.in_general();
    assert_eq!(general[&Unit::Years], 1);
    assert_eq!(general[&Unit::Months], 2);
    assert_eq!(general[&Unit::Weeks], 0);
    assert_eq!(general[&Unit::Days], 0);
    assert_eq!(general[&Unit::Hours], 18);
    assert_eq!(general[&Unit::Minutes], 0);
    assert_eq!(general[&Unit::Seconds], 0);
}

#[test]
fn general_breakdown_with_time_of_day() {
    let start: InstantNs128 = InstantBuilder::new()
        .year(2024)
        .month(1)
        .day(1)
        .hour(8)
        .build();
    let end: InstantNs128 = InstantBuilder::new()
        .year(2024)
        .month(1)
        .day(10)
        .hour(9)
        .minute(30)
        .second(15)
        .millisecond(250)
        .build();
    let general = DurationCalculator::between(start, end).in_general();
    let counts: Vec<i128> = general.values().copied().collect();
    assert_eq!(counts, vec![0, 0, 1, 2, 1, 30, 15]);
}

#[cfg(feature = "serde")]
#[test]
fn components_serialize_by_unit_name() {
    let duration = DurationCalculator::between(date(2011, 1, 1), date(2011, 12, 1));
    let json = serde_json::to_value(duration.in_each_component()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "years": 0.91,
            "months": 11.0,
            "weeks": 47.71,
            "days": 334.0,
            "hours": 8016.0,
            "minutes": 480960.0,
            "seconds": 28857600.0,
        })
    );
}

#[test]
fn narrow_instants_near_the_end_of_their_range() {
    let start: InstantS32 = InstantBuilder::new().year(2037).month(6).day(1).build();
    let end: InstantS32 = InstantBuilder::new().year(2038).month(1).day(10).build();
    let duration = DurationCalculator::between(start, end);
    // 6 whole months, 29/30 of June 2037 and 10/31 of January 2038.
    assert_eq!(duration.in_months(), 7.29);
    assert_eq!(duration.in_days(), 223.0);
}
