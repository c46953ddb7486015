use maintenance_calendar::{CalendarError, Frequency, WeekOfMonth, expand};

#[test]
fn week_buckets_cover_every_valid_day() {
    let mut previous = 0;
    for day in 1..=31 {
        let week = WeekOfMonth::from_day(day).unwrap().number();
        assert!((1..=4).contains(&week));
        // Buckets are monotonic non-decreasing in the day
        assert!(week >= previous);
        previous = week;
    }
}

#[test]
fn week_bucket_boundaries() {
    assert_eq!(WeekOfMonth::from_day(1).unwrap(), WeekOfMonth::First);
    assert_eq!(WeekOfMonth::from_day(7).unwrap(), WeekOfMonth::First);
    assert_eq!(WeekOfMonth::from_day(8).unwrap(), WeekOfMonth::Second);
    assert_eq!(WeekOfMonth::from_day(14).unwrap(), WeekOfMonth::Second);
    assert_eq!(WeekOfMonth::from_day(15).unwrap(), WeekOfMonth::Third);
    assert_eq!(WeekOfMonth::from_day(21).unwrap(), WeekOfMonth::Third);
    assert_eq!(WeekOfMonth::from_day(22).unwrap(), WeekOfMonth::Fourth);
    assert_eq!(WeekOfMonth::from_day(31).unwrap(), WeekOfMonth::Fourth);
}

#[test]
fn week_bucket_rejects_days_outside_month() {
    assert_eq!(
        WeekOfMonth::from_day(0),
        Err(CalendarError::DayOutOfRange(0))
    );
    assert_eq!(
        WeekOfMonth::from_day(32),
        Err(CalendarError::DayOutOfRange(32))
    );
}

#[test]
fn weekly_expansion_covers_full_year_regardless_of_months() {
    for months in [vec![], vec![3], vec![1, 4, 7, 10]] {
        let expansion = expand(Frequency::Weekly, &months).unwrap();
        assert_eq!(expansion.len(), 12);
        for month in 1..=12 {
            assert_eq!(expansion[&month], WeekOfMonth::ALL.to_vec());
        }
    }
}

#[test]
fn month_bound_frequencies_expand_to_exactly_the_listed_months() {
    for frequency in [
        Frequency::Monthly,
        Frequency::Quarterly,
        Frequency::SemiAnnual,
        Frequency::Annual,
    ] {
        let months = vec![2, 9];
        let expansion = expand(frequency, &months).unwrap();
        assert_eq!(expansion.keys().copied().collect::<Vec<_>>(), months);
        for weeks in expansion.values() {
            assert_eq!(weeks, &WeekOfMonth::ALL.to_vec());
        }
    }
}

#[test]
fn expansion_rejects_months_outside_calendar() {
    assert_eq!(
        expand(Frequency::Monthly, &[0]),
        Err(CalendarError::MonthOutOfRange(0))
    );
    assert_eq!(
        expand(Frequency::Annual, &[13]),
        Err(CalendarError::MonthOutOfRange(13))
    );
}

#[test]
fn duplicate_months_collapse_in_the_expansion() {
    let expansion = expand(Frequency::Quarterly, &[4, 4, 7]).unwrap();
    assert_eq!(expansion.keys().copied().collect::<Vec<_>>(), vec![4, 7]);
}

#[test]
fn frequency_spellings_round_trip() {
    for frequency in Frequency::ALL {
        assert_eq!(Frequency::from_str(frequency.as_str()), Some(frequency));
        assert_eq!(Frequency::parse(frequency.as_str()).unwrap(), frequency);
    }
    assert_eq!(Frequency::parse("semi-annual").unwrap(), Frequency::SemiAnnual);
}

#[test]
fn unknown_frequency_spelling_is_an_error_not_an_empty_expansion() {
    assert_eq!(Frequency::from_str("biweekly"), None);
    assert_eq!(
        Frequency::parse("biweekly"),
        Err(CalendarError::UnknownFrequency("biweekly".into()))
    );
}

#[test]
fn frequency_serde_uses_wire_spellings() {
    let json = serde_json::to_string(&Frequency::SemiAnnual).unwrap();
    assert_eq!(json, "\"semi-annual\"");
    let parsed: Frequency = serde_json::from_str("\"quarterly\"").unwrap();
    assert_eq!(parsed, Frequency::Quarterly);
}
