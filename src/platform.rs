// Collaborator interfaces provided by the host platform.
//
// The core never talks to an OS notification service, GPS stack, or
// magnetometer directly; the composing application implements these traits
// and hands them in. Traits use `async fn` and are consumed through
// generics, so platform impls keep their concrete types.
use crate::adhan::channels::ChannelSpec;
use crate::geo::Coordinate;
use crate::model::{DailyTimings, PrayerName};
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Self-describing payload embedded in every scheduled Adhan notification,
/// so any consumer (foreground app, background worker) can decide what to
/// do when it fires without consulting the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdhanPayload {
    pub prayer: PrayerName,
    pub play_adhan: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// One raw magnetometer sample. Only the horizontal-plane components are
/// needed to derive a compass heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawMagSample {
    pub x: f64,
    pub y: f64,
}

/// Platform notification scheduler. Must support at least five pending
/// schedules per day (one per prayer).
#[allow(async_fn_in_trait)]
pub trait NotificationScheduler: Send + Sync {
    /// Schedules one notification to fire exactly at `fires_at` (local wall
    /// clock) on the given channel, returning the platform's id for it.
    async fn schedule_at(
        &self,
        fires_at: NaiveDateTime,
        channel_id: &str,
        payload: AdhanPayload,
    ) -> Result<String>;

    /// Cancels every notification in `ids`. Unknown ids are not an error.
    async fn cancel_all(&self, ids: &[String]) -> Result<()>;
}

/// Platform notification-channel registry (Android-style; platforms without
/// channels can implement this as a no-op). Called once at startup with the
/// three fixed Adhan channels; each channel stays bound to its audio asset
/// for its whole lifetime.
#[allow(async_fn_in_trait)]
pub trait ChannelRegistry {
    async fn register_channels(&self, specs: &[ChannelSpec]) -> Result<()>;
}

/// One-shot location access. Methods return `Send` futures explicitly
/// because the Qibla tracker awaits them inside a spawned task.
pub trait LocationProvider: Send + 'static {
    fn request_permission(&self) -> impl Future<Output = PermissionStatus> + Send;

    /// Current position fix. The tracker bounds this with a timeout; the
    /// provider does not need to enforce one itself.
    fn current_coordinate(&self) -> impl Future<Output = Result<Coordinate>> + Send;
}

/// Continuous compass stream. Consuming `self` ties the subscription's
/// lifetime to the returned receiver: dropping the receiver is the
/// unsubscribe.
pub trait HeadingSensor: Send + 'static {
    /// Starts sampling at the given interval. Errors when no magnetometer
    /// is available on the device.
    fn subscribe(self, sampling_interval_ms: u64) -> Result<mpsc::Receiver<RawMagSample>>;
}

/// Upstream prayer-times API. Called once per day by the composing
/// application, never by the core; the trait lives here so platform code
/// and the core agree on the data shape.
#[allow(async_fn_in_trait)]
pub trait PrayerTimesSource {
    async fn fetch_daily_timings(
        &self,
        coordinate: Coordinate,
        date: NaiveDate,
    ) -> Result<DailyTimings>;
}
