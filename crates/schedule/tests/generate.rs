use chrono::{Datelike, NaiveDate, Weekday};
use lessonplan_calendar::{DateRange, HolidayCalendar, HolidayRules, WeekdaySet, is_holiday};
use lessonplan_schedule::{MAX_ENTRIES, ScheduleConfig, generate, generate_default};

fn fridays() -> WeekdaySet {
    WeekdaySet::from_indices(&[5]).unwrap()
}

#[test]
fn september_fridays() {
    let range = DateRange::new(2023, 9, 1, 2023, 9).unwrap();
    let schedule = generate_default(&range, fridays(), 72).unwrap();

    // Every non-holiday Friday of September 2023, ascending.
    let mut expected = Vec::new();
    let mut d = NaiveDate::from_ymd_opt(2023, 9, 1).unwrap();
    while d.month() == 9 {
        if d.weekday() == Weekday::Fri && !is_holiday(d) {
            expected.push(format!("{:02}.09.2023", d.day()));
        }
        d = d.succ_opt().unwrap();
    }
    assert_eq!(schedule.texts(), expected);
    assert_eq!(schedule.len(), 5);
}

#[test]
fn empty_weekdays_any_range() {
    for (sy, sm, ey, em) in [(2023, 9, 2023, 9), (2023, 9, 2024, 8), (2020, 1, 2025, 12)] {
        let range = DateRange::new(sy, sm, 1, ey, em).unwrap();
        for hours in [0, 2, 72, 1000] {
            let schedule = generate_default(&range, WeekdaySet::EMPTY, hours).unwrap();
            assert!(schedule.is_empty(), "range {sy}-{sm}..{ey}-{em}, hours {hours}");
        }
    }
}

#[test]
fn never_more_than_max_entries() {
    let weekday_sets = [vec![1], vec![1, 3, 5], vec![0, 1, 2, 3, 4, 5, 6]];
    let ranges = [
        DateRange::new(2023, 9, 1, 2023, 9).unwrap(),
        DateRange::new(2023, 9, 1, 2024, 5).unwrap(),
        DateRange::new(2023, 12, 15, 2024, 1).unwrap(),
        DateRange::new(2022, 1, 1, 2026, 12).unwrap(),
    ];
    for indices in &weekday_sets {
        let weekdays = WeekdaySet::from_indices(indices).unwrap();
        for range in &ranges {
            for hours in [0, 1, 10, 72, 74, 500] {
                let schedule = generate_default(range, weekdays, hours).unwrap();
                assert!(
                    schedule.len() <= MAX_ENTRIES,
                    "{} entries for {indices:?}, {range:?}, {hours}h",
                    schedule.len()
                );
            }
        }
    }
}

#[test]
fn only_selected_weekdays_and_no_holidays() {
    let weekdays = WeekdaySet::from_indices(&[1, 3]).unwrap();
    let range = DateRange::new(2023, 9, 1, 2024, 5).unwrap();
    let schedule = generate_default(&range, weekdays, 72).unwrap();
    assert_eq!(schedule.len(), 36);
    for entry in schedule.entries() {
        assert!(weekdays.contains_date(entry.date()), "{}", entry.text());
        assert!(!is_holiday(entry.date()), "{}", entry.text());
    }
    assert!(
        schedule
            .entries()
            .windows(2)
            .all(|w| w[0].date() < w[1].date())
    );
}

#[test]
fn identical_inputs_identical_outputs() {
    let range = DateRange::new(2023, 9, 1, 2024, 1).unwrap();
    let rules = HolidayRules::russia_2023();
    let config = ScheduleConfig::default();
    let first = generate(&range, fridays(), 72, &rules, &config).unwrap();
    for _ in 0..3 {
        assert_eq!(generate(&range, fridays(), 72, &rules, &config).unwrap(), first);
    }
}

#[test]
fn custom_policy_is_consulted() {
    struct EveryFifteenth;

    impl HolidayCalendar for EveryFifteenth {
        fn name(&self) -> &str {
            "fifteenth"
        }

        fn is_holiday(&self, date: NaiveDate) -> bool {
            date.day() == 15
        }
    }

    let range = DateRange::new(2023, 9, 1, 2023, 9).unwrap();
    let schedule = generate(
        &range,
        fridays(),
        72,
        &EveryFifteenth,
        &ScheduleConfig::default(),
    )
    .unwrap();
    assert_eq!(
        schedule.texts(),
        vec!["01.09.2023", "08.09.2023", "22.09.2023", "29.09.2023"]
    );
}

#[test]
fn dyn_policy() {
    let rules: Box<dyn HolidayCalendar> = Box::new(HolidayRules::empty());
    let range = DateRange::new(2023, 2, 1, 2023, 2).unwrap();
    let schedule = generate(
        &range,
        fridays(),
        72,
        rules.as_ref(),
        &ScheduleConfig::default(),
    )
    .unwrap();
    // Feb 24 is kept without the holiday profile.
    assert_eq!(schedule.len(), 4);
    assert_eq!(schedule.entries()[3].text(), "24.02.2023");
}
