// 42-cell (6-week) Hijri month grid generation.
//
// The grid is regenerated in full on every month or offset change, never
// patched incrementally. Cells are laid out Sunday-first: the first of the
// target month lands at its weekday column, preceded by the tail of the
// previous Hijri month and followed by the head of the next, all labeled by
// the same calendar arithmetic. Layout and labels are canonical; the
// sighting offset only moves which cell is highlighted as today, keeping
// the highlight in step with `to_hijri(today, offset_days)`.
use super::calendar::{self, date_to_jdn, jdn_to_date, to_gregorian};
use super::events::{self, IslamicEvent};
use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::Serialize;

pub const GRID_CELLS: usize = 42;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HijriDayCell {
    pub hijri_day: u32,
    pub hijri_month: u32,
    pub hijri_year: i32,
    /// Canonical Gregorian date of this Hijri day.
    pub gregorian: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub event: Option<IslamicEvent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HijriMonthGrid {
    pub year: i32,
    pub month: u32,
    pub offset_days: i32,
    pub cells: Vec<HijriDayCell>,
}

impl HijriMonthGrid {
    /// Number of cells belonging to the target month; equals the month's
    /// arithmetic day count.
    pub fn current_month_days(&self) -> usize {
        self.cells.iter().filter(|c| c.is_current_month).count()
    }
}

/// Builds the 42-cell grid for a Hijri month, anchored at an explicit
/// `today` (day granularity) so the "today" highlight is testable.
///
/// The Sunday-based weekday of the target month's first day fixes how many
/// previous-month padding cells lead the grid. `is_today` compares against
/// `today` shifted by `offset_days`, so the highlighted cell's label is the
/// same date the rest of the app reports via `to_hijri(today, offset_days)`.
/// A current-month cell never carries a day outside [1, days_in_month];
/// padding cells are flagged `is_current_month = false`.
pub fn month_grid_on(
    today: NaiveDate,
    year: i32,
    month: u32,
    offset_days: i32,
) -> Option<HijriMonthGrid> {
    let first = to_gregorian(year, month, 1)?;
    let start_weekday = i64::from(first.weekday().num_days_from_sunday());
    let shifted_today = today + Duration::days(i64::from(offset_days));

    // Walk consecutive days in the Hijri arithmetic domain; the jdn <-> date
    // mapping is bijective, so the target month contributes exactly its
    // day-count worth of current-month cells.
    let first_jdn = date_to_jdn(first);

    let mut cells = Vec::with_capacity(GRID_CELLS);
    for slot in 0..GRID_CELLS as i64 {
        let jdn = first_jdn - start_weekday + slot;
        let date = jdn_to_date(jdn)?;
        let h = calendar::to_hijri(date, 0);
        cells.push(HijriDayCell {
            hijri_day: h.day,
            hijri_month: h.month,
            hijri_year: h.year,
            gregorian: date,
            is_current_month: h.year == year && h.month == month,
            is_today: date == shifted_today,
            event: events::event_for(h.day, h.month),
        });
    }

    Some(HijriMonthGrid {
        year,
        month,
        offset_days,
        cells,
    })
}

/// Grid for the real current date.
pub fn month_grid(year: i32, month: u32, offset_days: i32) -> Option<HijriMonthGrid> {
    month_grid_on(Local::now().date_naive(), year, month, offset_days)
}
