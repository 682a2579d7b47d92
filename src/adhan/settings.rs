// Handles Adhan settings loading, saving, and defaults.
use crate::context::AppContext;
use crate::model::PrayerName;
use crate::storage::LocalStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use strum::EnumIter;

fn default_true() -> bool {
    true
}

fn default_volume() -> f32 {
    0.8
}

/// Which Adhan recording plays when a notification fires. Each variant maps
/// to one fixed notification channel (see `channels.rs`); switching sound
/// re-points future schedules at a different channel, it never mutates an
/// existing channel's audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum AdhanSound {
    #[default]
    Default,
    Makkah,
    Madinah,
}

impl fmt::Display for AdhanSound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdhanSound::Default => write!(f, "Default"),
            AdhanSound::Makkah => write!(f, "Makkah"),
            AdhanSound::Madinah => write!(f, "Madinah"),
        }
    }
}

/// Per-prayer notification toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnabledPrayers {
    #[serde(default = "default_true")]
    pub fajr: bool,
    #[serde(default = "default_true")]
    pub dhuhr: bool,
    #[serde(default = "default_true")]
    pub asr: bool,
    #[serde(default = "default_true")]
    pub maghrib: bool,
    #[serde(default = "default_true")]
    pub isha: bool,
}

impl Default for EnabledPrayers {
    fn default() -> Self {
        Self {
            fajr: true,
            dhuhr: true,
            asr: true,
            maghrib: true,
            isha: true,
        }
    }
}

impl EnabledPrayers {
    pub fn is_enabled(&self, prayer: PrayerName) -> bool {
        match prayer {
            PrayerName::Fajr => self.fajr,
            PrayerName::Dhuhr => self.dhuhr,
            PrayerName::Asr => self.asr,
            PrayerName::Maghrib => self.maghrib,
            PrayerName::Isha => self.isha,
        }
    }

    pub fn set(&mut self, prayer: PrayerName, enabled: bool) {
        match prayer {
            PrayerName::Fajr => self.fajr = enabled,
            PrayerName::Dhuhr => self.dhuhr = enabled,
            PrayerName::Asr => self.asr = enabled,
            PrayerName::Maghrib => self.maghrib = enabled,
            PrayerName::Isha => self.isha = enabled,
        }
    }
}

/// User-facing Adhan configuration, persisted as TOML under the config
/// directory. The core treats this as an injected value object; mutation
/// happens only through explicit `save` calls by the owner.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct AdhanSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub sound: AdhanSound,
    #[serde(default = "default_volume")]
    pub volume: f32, // 0-1, consumed by the platform audio layer
    /// Regional sighting compensation in days, constrained to {-1, 0, +1}.
    #[serde(default)]
    pub hijri_offset: i32,
    #[serde(default)]
    pub enabled_prayers: EnabledPrayers,
}

impl Default for AdhanSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            sound: AdhanSound::default(),
            volume: 0.8,
            hijri_offset: 0,
            enabled_prayers: EnabledPrayers::default(),
        }
    }
}

impl AdhanSettings {
    /// Load the settings from disk using an explicit context.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_settings_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Settings file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read settings file '{}': {}", path.display(), e)
        })?;

        let mut settings: AdhanSettings = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse settings file '{}': {}", path.display(), e)
        })?;

        // Stored records predating the {-1, 0, +1} constraint are clamped
        // rather than rejected.
        settings.hijri_offset = settings.hijri_offset.clamp(-1, 1);
        settings.volume = settings.volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    /// Load, falling back to defaults when the file is missing or
    /// unreadable (first launch behaves like a reset).
    pub fn load_or_default(ctx: &dyn AppContext) -> Self {
        Self::load(ctx).unwrap_or_else(|e| {
            log::debug!("Using default Adhan settings: {e:#}");
            Self::default()
        })
    }

    /// Save settings using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_settings_file_path()?;
        LocalStorage::with_lock(&path, || {
            let toml_str = toml::to_string_pretty(self)?;
            LocalStorage::atomic_write(&path, toml_str)?;
            Ok(())
        })?;
        Ok(())
    }
}
