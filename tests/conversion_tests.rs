//! Gregorian to Saka conversion tests
use kalnirnay::saka::{CHAITRA_START, select_month};
use kalnirnay::{GregorianDate, MonthEntry, calendar_table, convert, day_of_year, is_leap_year};

fn hindi(day: u32, month: u32, year: i32) -> String {
    convert(GregorianDate::new(day, month, year)).hindi.to_string()
}

#[test]
fn test_leap_years() {
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2023));
}

#[test]
fn test_day_of_year_boundaries() {
    assert_eq!(day_of_year(1, 1, 2023), 1);
    assert_eq!(day_of_year(31, 12, 2023), 365);
    assert_eq!(day_of_year(31, 12, 2024), 366);
}

// 22 March is day 81, the first day of Chaitra
#[test]
fn test_chaitra_first_day() {
    let result = convert(GregorianDate::new(22, 3, 2023));
    assert_eq!(result.day_of_year, CHAITRA_START);
    assert_eq!(result.hindi.day, 1);
    assert_eq!(result.hindi.month, "Chaitra");
    assert_eq!(result.hindi.saka_year, 1945);
}

// No table month starts by day 1, so the Pausha(0) fallback applies
#[test]
fn test_new_year_uses_pausha_fallback() {
    let result = convert(GregorianDate::new(1, 1, 2023));
    assert_eq!(result.day_of_year, 1);
    assert_eq!(result.hindi.to_string(), "2 Pausha, Saka 1944");
}

#[test]
fn test_dates_before_chaitra_belong_to_previous_saka_year() {
    assert_eq!(hindi(20, 1, 2023), "21 Pausha, Saka 1944");
    assert_eq!(hindi(21, 1, 2023), "1 Magha, Saka 1944");
    assert_eq!(hindi(19, 2, 2023), "30 Magha, Saka 1944");
    assert_eq!(hindi(20, 2, 2023), "1 Phalguna, Saka 1944");
    assert_eq!(hindi(21, 3, 2023), "30 Phalguna, Saka 1944");
}

#[test]
fn test_mid_year_dates() {
    assert_eq!(hindi(15, 6, 2023), "24 Jyaistha, Saka 1945");
    assert_eq!(hindi(15, 8, 2023), "23 Shravana, Saka 1945");
    assert_eq!(hindi(25, 10, 2023), "1 Kartika, Saka 1945");
}

// Day 357 is the last day of Agrahayana, day 358 starts Pausha
#[test]
fn test_pausha_boundary() {
    let before = convert(GregorianDate::new(23, 12, 2023));
    assert_eq!(before.day_of_year, 357);
    assert_eq!(before.hindi.to_string(), "30 Agrahayana, Saka 1945");

    let start = convert(GregorianDate::new(24, 12, 2023));
    assert_eq!(start.day_of_year, 358);
    assert_eq!(start.hindi.to_string(), "1 Pausha, Saka 1945");
}

// In leap years the offsets stay fixed, so dates after February shift by one
#[test]
fn test_leap_year_shifts_dates_after_february() {
    assert_eq!(hindi(21, 3, 2024), "1 Chaitra, Saka 1946");
    assert_eq!(hindi(31, 12, 2024), "9 Pausha, Saka 1946");
}

#[test]
fn test_overflowing_day_passes_through() {
    let result = convert(GregorianDate::new(30, 2, 2023));
    assert_eq!(result.day_of_year, 61);
    assert_eq!(result.hindi.to_string(), "11 Phalguna, Saka 1944");
}

#[test]
fn test_every_day_of_year_resolves() {
    for doy in 1..=366 {
        let month = select_month(calendar_table(), doy);
        assert!(month.start_day_of_year <= doy, "day {doy} -> {month:?}");
        if doy < CHAITRA_START {
            assert!(month.starts_before_chaitra() || month == MonthEntry::PAUSHA_FALLBACK);
        }
    }
}

#[test]
fn test_conversion_is_pure() {
    let date = GregorianDate::new(9, 11, 1999);
    let first = convert(date);
    for _ in 0..10 {
        assert_eq!(convert(date), first);
    }
}

#[test]
fn test_negative_saka_year_for_ancient_dates() {
    assert_eq!(hindi(1, 6, 10), "10 Jyaistha, Saka -68");
}
