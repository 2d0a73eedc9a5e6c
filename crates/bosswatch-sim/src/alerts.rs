//! Alert fan-out to the host's side-effect collaborators.
//!
//! One detected special attack becomes up to three side effects — sound,
//! system notification, chat message — each gated by its own config
//! toggle. The calls are isolated: a collaborator failure is logged and
//! swallowed so it can never suppress the remaining effects or reach the
//! engine's caller.

use thiserror::Error;
use tracing::{info, warn};

use bosswatch_core::config::{SoundEffect, TrackerConfig};
use bosswatch_core::profile::HostileProfile;

/// Failure reported by a side-effect collaborator.
#[derive(Debug, Error)]
#[error("alert sink failure: {0}")]
pub struct SinkError(pub String);

/// Side-effect collaborator boundary. Implemented by the host over its
/// sound system, notifier, and chat client.
pub trait AlertSink {
    fn play_sound(&mut self, effect: SoundEffect) -> Result<(), SinkError>;
    fn notify(&mut self, message: &str) -> Result<(), SinkError>;
    fn chat_message(&mut self, message: &str) -> Result<(), SinkError>;
}

/// Stateless fan-out of a detected special attack to the registered
/// sinks. Duplicate suppression per occurrence is the engine's job.
#[derive(Default)]
pub struct AlertDispatcher {
    sinks: Vec<Box<dyn AlertSink>>,
}

impl AlertDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sinks(sinks: Vec<Box<dyn AlertSink>>) -> Self {
        Self { sinks }
    }

    pub fn add_sink(&mut self, sink: Box<dyn AlertSink>) {
        self.sinks.push(sink);
    }

    /// Raise the alert for one detected occurrence. Config toggles are
    /// read fresh here; each sink call failure is logged and swallowed.
    pub fn dispatch(
        &mut self,
        profile: &HostileProfile,
        occurrence: u64,
        config: &dyn TrackerConfig,
    ) {
        info!(boss = profile.name, occurrence, "special attack detected");

        let notification = format!("{} special attack incoming!", profile.name);
        let chat = format!("{} special attack!", profile.name);

        for sink in &mut self.sinks {
            if config.play_sound() {
                if let Err(err) = sink.play_sound(config.sound_effect()) {
                    warn!(boss = profile.name, %err, "sound effect failed");
                }
            }
            if config.send_notification() {
                if let Err(err) = sink.notify(&notification) {
                    warn!(boss = profile.name, %err, "notification failed");
                }
            }
            if config.show_chat_message() {
                if let Err(err) = sink.chat_message(&chat) {
                    warn!(boss = profile.name, %err, "chat message failed");
                }
            }
        }
    }
}
