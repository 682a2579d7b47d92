// Event catalog behavior over a whole year, plus grid annotation.
use chrono::NaiveDate;
use miqat::hijri::events::{EventSeverity, event_for, is_major_event, month_events};
use miqat::hijri::month_grid_on;

#[test]
fn annual_catalog_shape() {
    // Only four months carry events; their annotated-day counts are fixed.
    let mut per_month = [0usize; 13];
    for month in 1..=12 {
        per_month[month as usize] = month_events(month).len();
    }
    assert_eq!(per_month[1], 1); // Ashura
    assert_eq!(per_month[9], 11); // Ramadan start + days 21-30
    assert_eq!(per_month[10], 1); // Eid al-Fitr
    assert_eq!(per_month[12], 13); // days 1-13
    for month in [2, 3, 4, 5, 6, 7, 8, 11] {
        assert_eq!(per_month[month], 0, "month {month}");
    }
}

#[test]
fn key_dates_resolve_to_expected_events() {
    assert_eq!(event_for(10, 1).unwrap().name_en, "Day of Ashura");
    assert_eq!(event_for(1, 9).unwrap().name_en, "Start of Ramadan");
    assert_eq!(event_for(1, 10).unwrap().name_en, "Eid al-Fitr");
    assert_eq!(event_for(9, 12).unwrap().name_en, "Day of Arafah");
    assert_eq!(event_for(10, 12).unwrap().name_en, "Eid al-Adha");
    assert_eq!(event_for(11, 12).unwrap().name_en, "Days of Tashreeq");
    assert_eq!(event_for(13, 12).unwrap().name_en, "Days of Tashreeq");
}

#[test]
fn single_day_events_shadow_overlapping_ranges() {
    // 9 and 10 Dhu al-Hijjah fall inside the first-ten-days range.
    assert_eq!(event_for(8, 12).unwrap().name_en, "First Ten Days");
    assert_ne!(event_for(9, 12).unwrap().name_en, "First Ten Days");
    assert_ne!(event_for(10, 12).unwrap().name_en, "First Ten Days");

    // Odd last-ten nights resolve to Laylat al-Qadr, even ones to the range.
    assert_eq!(event_for(27, 9).unwrap().name_en, "Laylat al-Qadr (possible)");
    assert_eq!(event_for(28, 9).unwrap().name_en, "Last Ten Nights");
}

#[test]
fn severity_classification() {
    assert!(is_major_event(10, 1));
    assert!(is_major_event(1, 10));
    assert!(is_major_event(9, 12));
    assert!(is_major_event(10, 12));
    assert!(!is_major_event(11, 12));
    assert!(!is_major_event(15, 3));
    assert_eq!(event_for(5, 12).unwrap().severity, EventSeverity::Blessed);
    assert_eq!(event_for(12, 12).unwrap().severity, EventSeverity::Special);
}

#[test]
fn every_event_carries_bilingual_names_and_color() {
    for month in 1..=12 {
        for (day, event) in month_events(month) {
            assert!(!event.name_en.is_empty(), "{day}/{month}");
            assert!(!event.name_ar.is_empty(), "{day}/{month}");
            assert!(
                event.color.starts_with('#') && event.color.len() == 7,
                "{day}/{month}: bad color {}",
                event.color
            );
        }
    }
}

#[test]
fn ramadan_grid_is_annotated() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 27).unwrap();
    let grid = month_grid_on(today, 1447, 9, 0).unwrap();

    let event_name = |day: u32| {
        grid.cells
            .iter()
            .find(|c| c.is_current_month && c.hijri_day == day)
            .and_then(|c| c.event)
            .map(|e| e.name_en)
    };
    assert_eq!(event_name(1), Some("Start of Ramadan"));
    assert_eq!(event_name(27), Some("Laylat al-Qadr (possible)"));
    assert_eq!(event_name(15), None);
}
