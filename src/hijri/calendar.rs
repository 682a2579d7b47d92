// Tabular (civil) Islamic calendar arithmetic.
//
// Deterministic, non-astronomical: a 30-year cycle with 11 leap years and
// alternating 30/29-day months, anchored at epoch JDN 1948440 (Friday
// 19 July 622 proleptic Gregorian, the traditional 16 July 622 Julian).
// Regional sighting differences are compensated by
// a user-selected day offset (-1, 0, +1) applied to the Gregorian date
// before conversion, never to the arithmetic itself.
//
// Conversions are bridged to `chrono::NaiveDate` through Julian day
// numbers, so a single pair of jdn functions carries the whole calendar.
use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// JDN of 1 Muharram 1 AH (civil epoch, a Friday; 16 July 622 Julian,
/// which chrono renders as 19 July 622 proleptic Gregorian).
const ISLAMIC_EPOCH_JDN: i64 = 1948440;

/// Offset between chrono's days-from-CE and Julian day numbers.
const JDN_CE_OFFSET: i64 = 1721425;

pub const HIJRI_MONTHS_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Ula",
    "Jumada al-Akhirah",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

pub const HIJRI_MONTHS_AR: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

/// Day names starting at Sunday (column 0 of the month grid).
pub const HIJRI_DAYS_AR: [&str; 7] = [
    "الأحد",
    "الإثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
];

/// A Hijri calendar date. Derived, never mutated in place; always recomputed
/// from a Gregorian date plus the configured day offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HijriDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    /// 0 = Sunday .. 6 = Saturday.
    pub weekday: u32,
}

impl HijriDate {
    pub fn month_name_en(&self) -> &'static str {
        HIJRI_MONTHS_EN[(self.month - 1) as usize]
    }

    pub fn month_name_ar(&self) -> &'static str {
        HIJRI_MONTHS_AR[(self.month - 1) as usize]
    }

    pub fn day_name_ar(&self) -> &'static str {
        HIJRI_DAYS_AR[self.weekday as usize]
    }
}

/// Leap years in the 30-year cycle: {2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29}.
pub fn is_leap_year(year: i32) -> bool {
    (11 * i64::from(year) + 14).rem_euclid(30) < 11
}

/// Day count of a Hijri month, from the calendar arithmetic (never
/// hardcoded per month): odd months 30 days, even months 29, month 12 gets
/// 30 in leap years.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!((1..=12).contains(&month));
    if month % 2 == 1 || (month == 12 && is_leap_year(year)) {
        30
    } else {
        29
    }
}

/// Days elapsed before 1 Muharram of `year`, counted from the epoch.
fn days_before_year(year: i32) -> i64 {
    let y = i64::from(year);
    354 * (y - 1) + (3 + 11 * y).div_euclid(30)
}

/// Days elapsed before the first of `month` within a year. Month-12 leap
/// days come after this prefix, so the formula is leap-independent.
fn days_before_month(month: u32) -> i64 {
    ((i64::from(month) - 1) * 59 + 1) / 2
}

fn hijri_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    i64::from(day) + days_before_month(month) + days_before_year(year) + ISLAMIC_EPOCH_JDN - 1
}

fn jdn_to_hijri(jdn: i64) -> (i32, u32, u32) {
    let days = jdn - ISLAMIC_EPOCH_JDN;
    let year = ((30 * days + 10646).div_euclid(10631)) as i32;

    let mut remaining = days - days_before_year(year);
    let mut month = 1u32;
    while month < 12 && remaining >= i64::from(days_in_month(year, month)) {
        remaining -= i64::from(days_in_month(year, month));
        month += 1;
    }
    (year, month, (remaining + 1) as u32)
}

pub(crate) fn date_to_jdn(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) + JDN_CE_OFFSET
}

pub(crate) fn jdn_to_date(jdn: i64) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt((jdn - JDN_CE_OFFSET) as i32)
}

/// Converts a Gregorian date to a Hijri date, shifting by `offset_days`
/// (-1, 0 or +1) first to match regional sighting.
pub fn to_hijri(date: NaiveDate, offset_days: i32) -> HijriDate {
    let shifted = date + Duration::days(i64::from(offset_days));
    let (year, month, day) = jdn_to_hijri(date_to_jdn(shifted));
    HijriDate {
        day,
        month,
        year,
        weekday: shifted.weekday().num_days_from_sunday(),
    }
}

/// Inverse conversion. Returns `None` for a day/month outside the calendar
/// arithmetic; valid requests always succeed.
pub fn to_gregorian(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
        return None;
    }
    jdn_to_date(hijri_to_jdn(year, month, day))
}

/// The Hijri (year, month) containing today, under the given offset.
pub fn current_month_year(offset_days: i32) -> (i32, u32) {
    let h = to_hijri(Local::now().date_naive(), offset_days);
    (h.year, h.month)
}

/// Rolls forward one month, incrementing the year past month 12. Year
/// bounds are intentionally open.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Rolls back one month, decrementing the year past month 1.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_a_friday_in_july_622() {
        // chrono is proleptic Gregorian, so the Julian 16 July 622 epoch
        // reads as 19 July 622.
        let epoch = jdn_to_date(ISLAMIC_EPOCH_JDN).unwrap();
        assert_eq!(epoch, NaiveDate::from_ymd_opt(622, 7, 19).unwrap());
        assert_eq!(epoch.weekday().num_days_from_sunday(), 5); // Friday
    }

    #[test]
    fn test_known_new_year_1447() {
        // Civil tabular calendar: 1 Muharram 1447 AH == 27 June 2025 (Friday).
        let g = NaiveDate::from_ymd_opt(2025, 6, 27).unwrap();
        let h = to_hijri(g, 0);
        assert_eq!((h.year, h.month, h.day), (1447, 1, 1));
        assert_eq!(h.weekday, 5);
        assert_eq!(to_gregorian(1447, 1, 1), Some(g));
    }

    #[test]
    fn test_leap_year_cycle() {
        for y in [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29] {
            assert!(is_leap_year(y), "year {y} should be leap");
            assert!(is_leap_year(y + 30), "year {} should be leap", y + 30);
        }
        for y in [1, 3, 4, 6, 30] {
            assert!(!is_leap_year(y), "year {y} should not be leap");
        }
    }

    #[test]
    fn test_month_lengths() {
        assert_eq!(days_in_month(1447, 1), 30);
        assert_eq!(days_in_month(1447, 2), 29);
        assert_eq!(days_in_month(1447, 11), 30);
        // 1447 is year 7 of its 30-year cycle: leap.
        assert_eq!(days_in_month(1447, 12), 30);
        // 1448 is year 8: common.
        assert_eq!(days_in_month(1448, 12), 29);
    }

    #[test]
    fn test_jdn_roundtrip_over_several_years() {
        let start = hijri_to_jdn(1440, 1, 1);
        for jdn in start..start + 3000 {
            let (y, m, d) = jdn_to_hijri(jdn);
            assert!(
                (1..=12).contains(&m) && d >= 1 && d <= days_in_month(y, m),
                "jdn {jdn} -> invalid {y}-{m}-{d}"
            );
            assert_eq!(hijri_to_jdn(y, m, d), jdn);
        }
    }

    #[test]
    fn test_offset_shifts_by_one_day() {
        let g = NaiveDate::from_ymd_opt(2025, 6, 27).unwrap();
        let plus = to_hijri(g, 1);
        assert_eq!((plus.year, plus.month, plus.day), (1447, 1, 2));
        let minus = to_hijri(g, -1);
        // Day before 1 Muharram 1447 is the last day of 1446 (not leap: 29).
        assert_eq!((minus.year, minus.month, minus.day), (1446, 12, 29));
    }

    #[test]
    fn test_month_navigation_rollover() {
        assert_eq!(next_month(1447, 12), (1448, 1));
        assert_eq!(next_month(1447, 3), (1447, 4));
        assert_eq!(previous_month(1447, 1), (1446, 12));
        assert_eq!(previous_month(1447, 7), (1447, 6));
    }

    #[test]
    fn test_to_gregorian_rejects_impossible_dates() {
        assert_eq!(to_gregorian(1447, 13, 1), None);
        assert_eq!(to_gregorian(1447, 0, 1), None);
        assert_eq!(to_gregorian(1447, 2, 30), None);
        assert_eq!(to_gregorian(1447, 1, 0), None);
    }
}
