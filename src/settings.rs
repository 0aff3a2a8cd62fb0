//! Player preferences
//!
//! Persisted through the same [`Storage`] port as the best score.

use serde::{Deserialize, Serialize};

use crate::consts::SOUND_ENABLED_KEY;
use crate::persistence::Storage;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Play sound cues
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults for missing keys
    pub fn load(storage: &impl Storage) -> Self {
        let defaults = Self::default();
        Self {
            sound_enabled: storage.get_bool(SOUND_ENABLED_KEY, defaults.sound_enabled),
        }
    }

    pub fn save(&self, storage: &mut impl Storage) {
        storage.put_bool(SOUND_ENABLED_KEY, self.sound_enabled);
        log::info!("Settings saved (sound {})", if self.sound_enabled { "on" } else { "off" });
    }
}
