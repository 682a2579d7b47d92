// File: ./src/hijri/mod.rs
pub mod calendar;
pub mod events;
pub mod grid;

pub use calendar::{
    HIJRI_DAYS_AR, HIJRI_MONTHS_AR, HIJRI_MONTHS_EN, HijriDate, current_month_year, days_in_month,
    next_month, previous_month, to_gregorian, to_hijri,
};
pub use events::{EventSeverity, IslamicEvent, event_for};
pub use grid::{HijriDayCell, HijriMonthGrid, month_grid, month_grid_on};
