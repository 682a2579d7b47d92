// Prayer names and daily timing data.
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// The five daily prayers, in fixed day order.
///
/// Iteration order (via `strum::IntoEnumIterator`) is the scheduling order:
/// Fajr, Dhuhr, Asr, Maghrib, Isha. Sunrise is carried in [`DailyTimings`]
/// for display but is not a prayer and is never scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum PrayerName {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    pub fn arabic_name(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "الفجر",
            PrayerName::Dhuhr => "الظهر",
            PrayerName::Asr => "العصر",
            PrayerName::Maghrib => "المغرب",
            PrayerName::Isha => "العشاء",
        }
    }
}

impl fmt::Display for PrayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrayerName::Fajr => write!(f, "Fajr"),
            PrayerName::Dhuhr => write!(f, "Dhuhr"),
            PrayerName::Asr => write!(f, "Asr"),
            PrayerName::Maghrib => write!(f, "Maghrib"),
            PrayerName::Isha => write!(f, "Isha"),
        }
    }
}

/// One day's prayer timings as "HH:MM" strings, possibly suffixed with a
/// timezone annotation (e.g. "05:12 (+03)").
///
/// Field names match the upstream prayer-times API payload so this
/// deserializes straight out of the `timings` object. Created once per day
/// by the caller and treated as immutable; the next day's fetch supersedes
/// it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTimings {
    #[serde(rename = "Fajr")]
    pub fajr: String,
    #[serde(rename = "Sunrise")]
    pub sunrise: String,
    #[serde(rename = "Dhuhr")]
    pub dhuhr: String,
    #[serde(rename = "Asr")]
    pub asr: String,
    #[serde(rename = "Maghrib")]
    pub maghrib: String,
    #[serde(rename = "Isha")]
    pub isha: String,
}

impl DailyTimings {
    pub fn new(
        fajr: impl Into<String>,
        sunrise: impl Into<String>,
        dhuhr: impl Into<String>,
        asr: impl Into<String>,
        maghrib: impl Into<String>,
        isha: impl Into<String>,
    ) -> Self {
        Self {
            fajr: fajr.into(),
            sunrise: sunrise.into(),
            dhuhr: dhuhr.into(),
            asr: asr.into(),
            maghrib: maghrib.into(),
            isha: isha.into(),
        }
    }

    /// Raw timing string for a prayer (Sunrise is display-only and has no
    /// `PrayerName`, so it is not reachable here).
    pub fn get(&self, prayer: PrayerName) -> &str {
        match prayer {
            PrayerName::Fajr => &self.fajr,
            PrayerName::Dhuhr => &self.dhuhr,
            PrayerName::Asr => &self.asr,
            PrayerName::Maghrib => &self.maghrib,
            PrayerName::Isha => &self.isha,
        }
    }
}

/// Parses an "HH:MM" timing string, stripping any trailing timezone
/// annotation first ("15:30 (+02:00)" -> 15:30).
///
/// Returns `None` for malformed input; callers skip rather than abort.
pub fn parse_prayer_time(raw: &str) -> Option<NaiveTime> {
    let time_only = raw.split_whitespace().next()?;
    NaiveTime::parse_from_str(time_only, "%H:%M").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_prayer_order_is_day_order() {
        let order: Vec<PrayerName> = PrayerName::iter().collect();
        assert_eq!(
            order,
            vec![
                PrayerName::Fajr,
                PrayerName::Dhuhr,
                PrayerName::Asr,
                PrayerName::Maghrib,
                PrayerName::Isha,
            ]
        );
    }

    #[test]
    fn test_parse_plain_time() {
        assert_eq!(
            parse_prayer_time("05:30"),
            NaiveTime::from_hms_opt(5, 30, 0)
        );
    }

    #[test]
    fn test_parse_strips_timezone_suffix() {
        assert_eq!(
            parse_prayer_time("15:30 (+02:00)"),
            NaiveTime::from_hms_opt(15, 30, 0)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_prayer_time(""), None);
        assert_eq!(parse_prayer_time("quarter past nine"), None);
        assert_eq!(parse_prayer_time("25:99"), None);
    }

    #[test]
    fn test_timings_deserialize_from_api_shape() {
        let json = r#"{
            "Fajr": "05:00",
            "Sunrise": "06:25",
            "Dhuhr": "12:00 (+03)",
            "Asr": "15:30",
            "Maghrib": "18:00",
            "Isha": "19:30"
        }"#;
        let t: DailyTimings = serde_json::from_str(json).unwrap();
        assert_eq!(t.get(PrayerName::Dhuhr), "12:00 (+03)");
        assert_eq!(t.sunrise, "06:25");
    }
}
