// File: ./src/adhan/mod.rs
pub mod channels;
pub mod engine;
pub mod registry;
pub mod settings;

pub use channels::{ChannelSpec, channel_specs};
pub use engine::{AdhanScheduler, NextPrayer, next_prayer};
pub use registry::{ScheduleRegistry, ScheduledEntry};
pub use settings::{AdhanSettings, AdhanSound, EnabledPrayers};
