// Persisted record of the currently scheduled Adhan notification set.
//
// At most one day's worth of schedules exists at a time; the registry is
// the source of truth for which platform notification ids belong to it, so
// a later run can cancel them before installing a new set.
use crate::context::AppContext;
use crate::model::PrayerName;
use crate::storage::LocalStorage;
use anyhow::Result;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;

const REGISTRY_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEntry {
    /// Platform-assigned notification id, opaque to the core.
    pub id: String,
    pub prayer: PrayerName,
    pub fires_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRegistry {
    pub version: u32,
    pub last_updated: i64,
    pub entries: Vec<ScheduledEntry>,
}

impl Default for ScheduleRegistry {
    fn default() -> Self {
        Self {
            version: REGISTRY_VERSION,
            last_updated: Utc::now().timestamp(),
            entries: Vec::new(),
        }
    }
}

impl ScheduleRegistry {
    pub fn new(entries: Vec<ScheduledEntry>) -> Self {
        Self {
            version: REGISTRY_VERSION,
            last_updated: Utc::now().timestamp(),
            entries,
        }
    }

    /// Load the registry from disk. A missing or unreadable file yields an
    /// empty registry; losing the record only costs a redundant cancel pass.
    pub fn load(ctx: &dyn AppContext) -> Self {
        let Some(path) = ctx.get_schedule_registry_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        let result = LocalStorage::with_lock(&path, || {
            let contents = fs::read_to_string(&path)?;
            let registry: ScheduleRegistry = serde_json::from_str(&contents)?;
            Ok(registry)
        });

        match result {
            Ok(registry) => registry,
            Err(e) => {
                log::warn!("Could not read schedule registry, starting empty: {e:#}");
                Self::default()
            }
        }
    }

    /// Persist the registry, stamping `last_updated`.
    pub fn save(&mut self, ctx: &dyn AppContext) -> Result<()> {
        let Some(path) = ctx.get_schedule_registry_path() else {
            anyhow::bail!("Could not determine schedule registry path");
        };
        self.last_updated = Utc::now().timestamp();

        LocalStorage::with_lock(&path, || {
            let json = serde_json::to_string_pretty(self)?;
            LocalStorage::atomic_write(&path, json)?;
            Ok(())
        })?;
        Ok(())
    }

    pub fn ids(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
