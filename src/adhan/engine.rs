// Next-prayer computation and the daily notification scheduling pass.
use super::registry::{ScheduleRegistry, ScheduledEntry};
use super::settings::AdhanSettings;
use crate::context::SharedContext;
use crate::model::{DailyTimings, PrayerName, parse_prayer_time};
use crate::platform::{AdhanPayload, NotificationScheduler};
use anyhow::Result;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use strum::IntoEnumIterator;

/// The prayer that fires next relative to some instant, with a display
/// countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextPrayer {
    pub name: PrayerName,
    pub time: NaiveTime,
    pub fires_at: NaiveDateTime,
    /// `H:MM:SS`, hours unpadded, never negative.
    pub countdown: String,
}

pub(crate) fn format_countdown(until: Duration) -> String {
    let total = until.num_seconds().max(0);
    format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

/// Finds the first prayer strictly after `now` (local wall clock). Once all
/// five have passed, wraps to tomorrow's Fajr. Returns `None` only when the
/// needed timing strings fail to parse.
pub fn next_prayer(timings: &DailyTimings, now: NaiveDateTime) -> Option<NextPrayer> {
    let today = now.date();
    for name in PrayerName::iter() {
        let Some(time) = parse_prayer_time(timings.get(name)) else {
            log::warn!("Skipping unparseable timing for {name}: '{}'", timings.get(name));
            continue;
        };
        let fires_at = today.and_time(time);
        if fires_at > now {
            return Some(NextPrayer {
                name,
                time,
                fires_at,
                countdown: format_countdown(fires_at - now),
            });
        }
    }

    // Isha has passed; the next prayer is tomorrow's Fajr. Timings move
    // only by minutes day to day, so today's figure stands in.
    let time = parse_prayer_time(timings.get(PrayerName::Fajr))?;
    let fires_at = today.succ_opt()?.and_time(time);
    Some(NextPrayer {
        name: PrayerName::Fajr,
        time,
        fires_at,
        countdown: format_countdown(fires_at - now),
    })
}

/// Owns the daily scheduling pass: cancel whatever set is pending, then
/// install at most one new set for the remainder of the day.
pub struct AdhanScheduler<S: NotificationScheduler> {
    scheduler: S,
    ctx: SharedContext,
    /// Day the `played_today` entries belong to; cleared on rollover.
    played_on: Option<NaiveDate>,
    played_today: Vec<PrayerName>,
}

impl<S: NotificationScheduler> AdhanScheduler<S> {
    pub fn new(scheduler: S, ctx: SharedContext) -> Self {
        Self {
            scheduler,
            ctx,
            played_on: None,
            played_today: Vec::new(),
        }
    }

    /// Replaces any pending notification set with one for today's remaining
    /// enabled prayers. Cancellation of the previous set always completes
    /// (and is persisted) before any new schedule is issued, so at most one
    /// set is ever pending.
    pub async fn schedule_day(
        &self,
        timings: &DailyTimings,
        settings: &AdhanSettings,
        now: NaiveDateTime,
    ) -> Result<ScheduleRegistry> {
        self.clear_pending().await?;

        if !settings.enabled {
            log::info!("Adhan notifications disabled, nothing scheduled");
            return Ok(ScheduleRegistry::load(self.ctx.as_ref()));
        }

        let channel_id = settings.sound.channel_id();
        let mut entries = Vec::new();
        for prayer in PrayerName::iter() {
            if !settings.enabled_prayers.is_enabled(prayer) {
                continue;
            }
            let Some(time) = parse_prayer_time(timings.get(prayer)) else {
                log::warn!(
                    "Skipping {prayer}: unparseable timing '{}'",
                    timings.get(prayer)
                );
                continue;
            };
            let fires_at = now.date().and_time(time);
            if fires_at <= now {
                continue;
            }

            let payload = AdhanPayload {
                prayer,
                play_adhan: true,
            };
            match self.scheduler.schedule_at(fires_at, channel_id, payload).await {
                Ok(id) => {
                    log::debug!("Scheduled {prayer} at {fires_at} on {channel_id} (id {id})");
                    entries.push(ScheduledEntry {
                        id,
                        prayer,
                        fires_at,
                    });
                }
                Err(e) => {
                    log::warn!("Failed to schedule {prayer} at {fires_at}: {e:#}");
                }
            }
        }

        let mut registry = ScheduleRegistry::new(entries);
        if let Err(e) = registry.save(self.ctx.as_ref()) {
            // An unrecorded set could never be cancelled by a later pass,
            // so take it back down rather than orphan it.
            log::warn!(
                "Failed to persist schedule registry, cancelling {} fresh schedule(s): {e:#}",
                registry.len()
            );
            if let Err(cancel_err) = self.scheduler.cancel_all(&registry.ids()).await {
                log::error!(
                    "Could not cancel unrecorded schedules {:?}: {cancel_err:#}",
                    registry.ids()
                );
            }
            return Err(e);
        }
        log::info!("Scheduled {} Adhan notification(s)", registry.len());
        Ok(registry)
    }

    /// Cancels the pending set without installing a new one.
    pub async fn cancel_day(&self) -> Result<()> {
        self.clear_pending().await
    }

    async fn clear_pending(&self) -> Result<()> {
        let registry = ScheduleRegistry::load(self.ctx.as_ref());
        if !registry.is_empty() {
            if let Err(e) = self.scheduler.cancel_all(&registry.ids()).await {
                // Stale ids are harmless to the platform; still drop our record.
                log::warn!("Failed to cancel pending Adhan notifications: {e:#}");
            }
        }
        ScheduleRegistry::new(Vec::new()).save(self.ctx.as_ref())?;
        Ok(())
    }

    /// Minute-resolution check used by a foreground ticker: reports a prayer
    /// whose time matches `now` (within the first half of the minute) at
    /// most once per prayer per day. The scheduled notifications remain
    /// authoritative; this only lets an open app react immediately.
    pub fn due_prayer(
        &mut self,
        timings: &DailyTimings,
        settings: &AdhanSettings,
        now: NaiveDateTime,
    ) -> Option<PrayerName> {
        if !settings.enabled || now.second() >= 30 {
            return None;
        }
        let today = now.date();
        if self.played_on != Some(today) {
            self.played_on = Some(today);
            self.played_today.clear();
        }
        for prayer in PrayerName::iter() {
            if !settings.enabled_prayers.is_enabled(prayer) {
                continue;
            }
            let Some(time) = parse_prayer_time(timings.get(prayer)) else {
                continue;
            };
            if time.hour() == now.hour() && time.minute() == now.minute() {
                if self.played_today.contains(&prayer) {
                    continue;
                }
                self.played_today.push(prayer);
                return Some(prayer);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timings() -> DailyTimings {
        DailyTimings::new(
            "05:30", "06:58", "13:02 (EET)", "16:45", "19:10", "20:40",
        )
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 27)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_next_prayer_midday() {
        let next = next_prayer(&timings(), at(12, 0, 0)).unwrap();
        assert_eq!(next.name, PrayerName::Dhuhr);
        assert_eq!(next.countdown, "1:02:00");
        assert_eq!(next.fires_at, at(13, 2, 0));
    }

    #[test]
    fn test_next_prayer_exact_time_moves_on() {
        // A prayer at exactly `now` is no longer "next".
        let next = next_prayer(&timings(), at(13, 2, 0)).unwrap();
        assert_eq!(next.name, PrayerName::Asr);
    }

    #[test]
    fn test_next_prayer_wraps_to_tomorrow_fajr() {
        let next = next_prayer(&timings(), at(23, 0, 0)).unwrap();
        assert_eq!(next.name, PrayerName::Fajr);
        assert_eq!(next.fires_at.date(), NaiveDate::from_ymd_opt(2025, 6, 28).unwrap());
        assert_eq!(next.countdown, "6:30:00");
    }

    #[test]
    fn test_countdown_format() {
        assert_eq!(format_countdown(Duration::seconds(3725)), "1:02:05");
        assert_eq!(format_countdown(Duration::seconds(59)), "0:00:59");
        assert_eq!(format_countdown(Duration::seconds(-5)), "0:00:00");
        assert_eq!(format_countdown(Duration::seconds(90061)), "25:01:01");
    }
}
