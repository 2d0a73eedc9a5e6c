//! Live configuration accessors.
//!
//! The host owns configuration storage; the tracker reads these accessors
//! fresh on every relevant decision and never caches the answers, so a
//! toggle flipped mid-session takes effect on the next event.

use serde::{Deserialize, Serialize};

use crate::profile::BossKind;

/// Game sound effects selectable for the special-attack alert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    #[default]
    Alert,
    Bell,
    Chime,
    Prayer,
    Alarm,
    GeCoin,
}

impl SoundEffect {
    /// The game client's sound effect id.
    pub fn id(&self) -> u32 {
        match self {
            SoundEffect::Alert => 4039,
            SoundEffect::Bell => 3672,
            SoundEffect::Chime => 3930,
            SoundEffect::Prayer => 2672,
            SoundEffect::Alarm => 2266,
            SoundEffect::GeCoin => 3924,
        }
    }
}

/// Configuration surface consulted by the tracker. Default methods give
/// the stock behavior; hosts override whichever accessors they expose
/// to the user.
pub trait TrackerConfig {
    /// Whether this boss is tracked at all. Disabled bosses produce no
    /// alerts and no hazard tiles.
    fn track(&self, _boss: BossKind) -> bool {
        true
    }

    /// Play a sound when a special attack is detected.
    fn play_sound(&self) -> bool {
        true
    }

    /// Which sound to play.
    fn sound_effect(&self) -> SoundEffect {
        SoundEffect::Alert
    }

    /// Send a system notification when a special attack is detected.
    fn send_notification(&self) -> bool {
        true
    }

    /// Show an in-game chat message when a special attack is detected.
    fn show_chat_message(&self) -> bool {
        true
    }

    /// Extra ticks a tile stays hazardous after projectile impact.
    /// Added on top of the projectile's flight time.
    fn extra_linger_ticks(&self, _boss: BossKind) -> u64 {
        0
    }
}

/// Stock configuration: everything enabled, no linger.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConfig;

impl TrackerConfig for DefaultConfig {}
