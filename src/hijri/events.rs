// Static catalog of notable Hijri dates.
//
// Pure (day, month) lookup against a fixed rule table. Single-day rules are
// checked before the multi-day range rules they overlap (9 and 10
// Dhu al-Hijjah fall inside the first-ten-days range but must report as
// Arafah and Eid al-Adha).
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSeverity {
    Major,
    Blessed,
    Special,
}

impl fmt::Display for EventSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventSeverity::Major => write!(f, "major"),
            EventSeverity::Blessed => write!(f, "blessed"),
            EventSeverity::Special => write!(f, "special"),
        }
    }
}

/// A named occasion on the Hijri calendar, with a display color tag for the
/// calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IslamicEvent {
    pub name_en: &'static str,
    pub name_ar: &'static str,
    pub color: &'static str,
    pub severity: EventSeverity,
}

const ASHURA: IslamicEvent = IslamicEvent {
    name_en: "Day of Ashura",
    name_ar: "يوم عاشوراء",
    color: "#9C27B0",
    severity: EventSeverity::Major,
};

const RAMADAN_START: IslamicEvent = IslamicEvent {
    name_en: "Start of Ramadan",
    name_ar: "بداية رمضان",
    color: "#4CAF50",
    severity: EventSeverity::Major,
};

const LAYLAT_AL_QADR: IslamicEvent = IslamicEvent {
    name_en: "Laylat al-Qadr (possible)",
    name_ar: "ليلة القدر (محتملة)",
    color: "#FFD700",
    severity: EventSeverity::Blessed,
};

const LAST_TEN_NIGHTS: IslamicEvent = IslamicEvent {
    name_en: "Last Ten Nights",
    name_ar: "العشر الأواخر",
    color: "#FF9800",
    severity: EventSeverity::Blessed,
};

const EID_FITR: IslamicEvent = IslamicEvent {
    name_en: "Eid al-Fitr",
    name_ar: "عيد الفطر",
    color: "#4CAF50",
    severity: EventSeverity::Major,
};

const ARAFAH: IslamicEvent = IslamicEvent {
    name_en: "Day of Arafah",
    name_ar: "يوم عرفة",
    color: "#E91E63",
    severity: EventSeverity::Major,
};

const EID_ADHA: IslamicEvent = IslamicEvent {
    name_en: "Eid al-Adha",
    name_ar: "عيد الأضحى",
    color: "#F44336",
    severity: EventSeverity::Major,
};

const TASHREEQ: IslamicEvent = IslamicEvent {
    name_en: "Days of Tashreeq",
    name_ar: "أيام التشريق",
    color: "#FF5722",
    severity: EventSeverity::Special,
};

const FIRST_TEN_DAYS: IslamicEvent = IslamicEvent {
    name_en: "First Ten Days",
    name_ar: "العشر الأوائل",
    color: "#2196F3",
    severity: EventSeverity::Blessed,
};

/// Event for a Hijri (day, month), or `None`. Out-of-range input yields
/// `None` rather than an error.
pub fn event_for(day: u32, month: u32) -> Option<IslamicEvent> {
    if !(1..=30).contains(&day) || !(1..=12).contains(&month) {
        return None;
    }

    match (month, day) {
        (1, 10) => Some(ASHURA),
        (9, 1) => Some(RAMADAN_START),
        (9, 21 | 23 | 25 | 27 | 29) => Some(LAYLAT_AL_QADR),
        (9, d) if d >= 21 => Some(LAST_TEN_NIGHTS),
        (10, 1) => Some(EID_FITR),
        (12, 9) => Some(ARAFAH),
        (12, 10) => Some(EID_ADHA),
        (12, d) if (11..=13).contains(&d) => Some(TASHREEQ),
        (12, d) if d <= 10 => Some(FIRST_TEN_DAYS),
        _ => None,
    }
}

/// Whether the date carries a major (Eid-level) event.
pub fn is_major_event(day: u32, month: u32) -> bool {
    event_for(day, month).is_some_and(|e| e.severity == EventSeverity::Major)
}

/// All annotated days of a Hijri month, for month-summary views.
pub fn month_events(month: u32) -> Vec<(u32, IslamicEvent)> {
    (1..=30)
        .filter_map(|day| event_for(day, month).map(|e| (day, e)))
        .collect()
}
