// Adhan sound -> notification channel mapping.
//
// One channel per sound, registered once at startup and bound permanently
// to its audio asset. The operating system plays whatever audio the channel
// was created with, so changing the user's sound selection means pointing
// future schedules at a different channel id, never editing a channel.
use super::settings::AdhanSound;
use serde::Serialize;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChannelSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub sound_file: &'static str,
}

impl AdhanSound {
    /// Stable channel identifier; part of the persisted-schedule contract,
    /// do not rename.
    pub fn channel_id(self) -> &'static str {
        match self {
            AdhanSound::Default => "adhan-default",
            AdhanSound::Makkah => "adhan-makkah",
            AdhanSound::Madinah => "adhan-madinah",
        }
    }

    pub fn sound_file(self) -> &'static str {
        match self {
            AdhanSound::Default => "adhan.mp3",
            AdhanSound::Makkah => "adhan_makkah.mp3",
            AdhanSound::Madinah => "adhan_madinah.mp3",
        }
    }

    fn channel_name(self) -> &'static str {
        match self {
            AdhanSound::Default => "Adhan - Default",
            AdhanSound::Makkah => "Adhan - Makkah",
            AdhanSound::Madinah => "Adhan - Madinah",
        }
    }

    fn channel_description(self) -> &'static str {
        match self {
            AdhanSound::Default => "Prayer time notifications with the default Adhan sound",
            AdhanSound::Makkah => "Prayer time notifications with the Makkah Adhan sound",
            AdhanSound::Madinah => "Prayer time notifications with the Madinah Adhan sound",
        }
    }
}

/// The three fixed channels to hand to `ChannelRegistry::register_channels`
/// at startup.
pub fn channel_specs() -> Vec<ChannelSpec> {
    AdhanSound::iter()
        .map(|sound| ChannelSpec {
            id: sound.channel_id(),
            name: sound.channel_name(),
            description: sound.channel_description(),
            sound_file: sound.sound_file(),
        })
        .collect()
}
