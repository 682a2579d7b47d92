// File: ./src/model/mod.rs
pub mod prayer;

pub use prayer::{DailyTimings, PrayerName, parse_prayer_time};
