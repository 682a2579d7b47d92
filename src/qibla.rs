// Qibla direction tracking.
//
// A background task combines a one-shot location fix with a continuous
// magnetometer stream and publishes `QiblaState` snapshots through a tokio
// watch channel. The state machine only ever moves forward: once a terminal
// error state is published the task exits, and recovery means spawning a
// fresh tracker.
use crate::geo::{self, Coordinate, normalize_angle};
use crate::platform::{HeadingSensor, LocationProvider, PermissionStatus, RawMagSample};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Lifecycle of one tracking session.
#[derive(Debug, Clone, PartialEq)]
pub enum QiblaState {
    Uninitialized,
    AcquiringLocation,
    /// Location and at least one heading sample are in hand; updated on
    /// every subsequent sample.
    Ready(QiblaReading),
    /// Terminal: permission denied, no fix within the timeout, or a
    /// provider error.
    LocationError(String),
    /// Terminal: the device has no usable magnetometer.
    SensorError(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QiblaReading {
    pub location: Coordinate,
    /// Great-circle bearing from `location` to the Kaaba, degrees from
    /// true north.
    pub qibla_bearing: f64,
    /// Current device heading, degrees from north in [0, 360).
    pub heading: f64,
    /// How far to rotate the device clockwise to face the Qibla.
    pub relative_direction: f64,
    pub distance_km: f64,
}

#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub sampling_interval_ms: u64,
    pub location_timeout: Duration,
    /// Sensor coordinate frames differ per platform; Android reports the
    /// angle mirrored relative to the screen frame.
    pub invert_rotation: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            sampling_interval_ms: 100,
            location_timeout: Duration::from_secs(15),
            invert_rotation: cfg!(target_os = "android"),
        }
    }
}

/// Converts a raw horizontal-plane magnetometer sample to a compass heading
/// in [0, 360).
pub fn heading_from_raw(sample: RawMagSample, invert: bool) -> f64 {
    let angle = normalize_angle(sample.y.atan2(sample.x).to_degrees());
    if invert {
        normalize_angle(360.0 - angle)
    } else {
        angle
    }
}

/// Handle to a running tracking session. Dropping the handle (or calling
/// [`QiblaTracker::shutdown`]) stops the background task and releases the
/// sensor subscription.
pub struct QiblaTracker {
    state_rx: watch::Receiver<QiblaState>,
    handle: JoinHandle<()>,
}

impl QiblaTracker {
    /// Starts a tracking session. The returned tracker immediately observes
    /// `AcquiringLocation`; `Ready` follows once a location fix and the
    /// first heading sample arrive.
    pub fn spawn<L, H>(location: L, sensor: H, config: TrackerConfig) -> Self
    where
        L: LocationProvider,
        H: HeadingSensor,
    {
        let (state_tx, state_rx) = watch::channel(QiblaState::Uninitialized);
        let handle = tokio::spawn(run_tracker(location, sensor, config, state_tx));
        Self { state_rx, handle }
    }

    /// Latest published state.
    pub fn state(&self) -> QiblaState {
        self.state_rx.borrow().clone()
    }

    /// A receiver for observing state changes (`changed().await`).
    pub fn subscribe(&self) -> watch::Receiver<QiblaState> {
        self.state_rx.clone()
    }

    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for QiblaTracker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn run_tracker<L, H>(
    location: L,
    sensor: H,
    config: TrackerConfig,
    state_tx: watch::Sender<QiblaState>,
) where
    L: LocationProvider,
    H: HeadingSensor,
{
    let _ = state_tx.send(QiblaState::AcquiringLocation);

    // Subscribe before the (slow) location fix so sensor absence surfaces
    // immediately.
    let mut samples = match sensor.subscribe(config.sampling_interval_ms) {
        Ok(rx) => rx,
        Err(e) => {
            log::warn!("Compass unavailable: {e:#}");
            let _ = state_tx.send(QiblaState::SensorError(format!("{e:#}")));
            return;
        }
    };

    if location.request_permission().await == PermissionStatus::Denied {
        let _ = state_tx.send(QiblaState::LocationError(
            "Location permission denied".to_string(),
        ));
        return;
    }

    let coordinate =
        match tokio::time::timeout(config.location_timeout, location.current_coordinate()).await {
            Ok(Ok(c)) => c,
            Ok(Err(e)) => {
                log::warn!("Location fix failed: {e:#}");
                let _ = state_tx.send(QiblaState::LocationError(format!("{e:#}")));
                return;
            }
            Err(_) => {
                let _ = state_tx.send(QiblaState::LocationError(format!(
                    "No location fix within {:?}",
                    config.location_timeout
                )));
                return;
            }
        };

    // One fix per session; bearing and distance are fixed from here on.
    let qibla_bearing = geo::qibla_bearing(coordinate);
    let distance_km = geo::distance_to_kaaba_km(coordinate);
    log::info!(
        "Qibla session ready: bearing {qibla_bearing:.1} deg, {distance_km:.0} km to the Kaaba"
    );

    while let Some(sample) = samples.recv().await {
        let heading = heading_from_raw(sample, config.invert_rotation);
        let reading = QiblaReading {
            location: coordinate,
            qibla_bearing,
            heading,
            relative_direction: normalize_angle(qibla_bearing - heading),
            distance_km,
        };
        if state_tx.send(QiblaState::Ready(reading)).is_err() {
            // Every observer is gone.
            break;
        }
    }
}
