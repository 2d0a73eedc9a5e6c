//! Tracker engine — owns all mutable state and routes world events.
//!
//! `TrackerEngine` consumes the host's event stream synchronously, one
//! event to completion at a time. Spawn/despawn events feed the
//! encounter roster, classified projectiles feed the hazard scheduler,
//! and the tick event drives expiry. No internal threads or timers; the
//! host's tick notification is the only clock.

use std::collections::HashSet;

use tracing::debug;

use bosswatch_core::config::TrackerConfig;
use bosswatch_core::events::{DomainEvent, WorldEvent};
use bosswatch_core::profile::{self, BossKind, HostileProfile, PROFILES};
use bosswatch_core::state::TrackerSnapshot;
use bosswatch_core::types::{GameClock, Tile};

use crate::alerts::{AlertDispatcher, AlertSink};
use crate::classifier;
use crate::encounter::EncounterRoster;
use crate::hazard::HazardScheduler;

/// The tracker engine. Owns the clock, scheduler, roster, and alert
/// fan-out; configuration is read through the trait on every decision,
/// never cached.
pub struct TrackerEngine {
    profiles: &'static [HostileProfile],
    clock: GameClock,
    scheduler: HazardScheduler,
    roster: EncounterRoster,
    dispatcher: AlertDispatcher,
    config: Box<dyn TrackerConfig>,
    /// Bosses already alerted for the current occurrence. Cleared when
    /// the hazard map returns to empty, so the next burst re-alerts.
    alerted: HashSet<BossKind>,
    /// Landing tiles already processed this burst. The host reports a
    /// projectile once per cycle; only the first report registers tiles.
    processed_targets: HashSet<Tile>,
    /// Running count of detected occurrences, for alert logging.
    occurrence: u64,
}

impl TrackerEngine {
    /// Create an engine with no alert sinks (hazard tracking only).
    pub fn new(config: impl TrackerConfig + 'static) -> Self {
        Self::with_sinks(config, Vec::new())
    }

    /// Create an engine fanning alerts out to the given sinks.
    pub fn with_sinks(
        config: impl TrackerConfig + 'static,
        sinks: Vec<Box<dyn AlertSink>>,
    ) -> Self {
        Self::with_profiles(PROFILES, config, sinks)
    }

    /// Create an engine over a custom profile table.
    pub fn with_profiles(
        profiles: &'static [HostileProfile],
        config: impl TrackerConfig + 'static,
        sinks: Vec<Box<dyn AlertSink>>,
    ) -> Self {
        Self {
            profiles,
            clock: GameClock::default(),
            scheduler: HazardScheduler::new(),
            roster: EncounterRoster::new(),
            dispatcher: AlertDispatcher::with_sinks(sinks),
            config: Box::new(config),
            alerted: HashSet::new(),
            processed_targets: HashSet::new(),
            occurrence: 0,
        }
    }

    /// Process one world event to completion.
    pub fn handle_event(&mut self, event: WorldEvent) {
        match event {
            WorldEvent::EntitySpawned {
                instance_id,
                kind_id,
            } => {
                if let Some(p) = profile::profile_for_npc(self.profiles, kind_id) {
                    self.roster.on_spawn(instance_id, p.kind);
                }
            }
            WorldEvent::EntityDespawned {
                instance_id,
                kind_id,
            } => {
                if let Some(p) = profile::profile_for_npc(self.profiles, kind_id) {
                    self.roster.on_despawn(instance_id, p.kind);
                }
            }
            WorldEvent::TickAdvanced => self.on_tick(),
            other => {
                let domain = classifier::classify(
                    &other,
                    self.profiles,
                    &self.roster,
                    self.config.as_ref(),
                );
                match domain {
                    Some(DomainEvent::SpecialAttackDetected { boss }) => {
                        self.on_special_attack(boss);
                    }
                    Some(DomainEvent::HazardProjectileObserved {
                        boss,
                        target,
                        ticks_until_impact,
                    }) => {
                        self.on_hazard_projectile(boss, target, ticks_until_impact);
                    }
                    None => {}
                }
            }
        }
    }

    /// Current game tick.
    pub fn current_tick(&self) -> u64 {
        self.clock.current()
    }

    /// Currently hazardous tiles, sorted. Safe to call at any time,
    /// including between events within a tick.
    pub fn hazard_tiles(&self) -> Vec<Tile> {
        self.scheduler.sorted_tiles()
    }

    /// Whether a specific tile is currently hazardous.
    pub fn is_hazardous(&self, tile: &Tile) -> bool {
        self.scheduler.clear_tick(tile).is_some()
    }

    /// Build the read-only view for the renderer.
    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            tick: self.clock.current(),
            hazard_tiles: self.scheduler.sorted_tiles(),
            active_bosses: self.roster.active_bosses(),
        }
    }

    /// Teardown: atomically clear all state so a restarted session
    /// starts empty.
    pub fn reset(&mut self) {
        self.clock = GameClock::default();
        self.scheduler.clear();
        self.roster.clear();
        self.alerted.clear();
        self.processed_targets.clear();
        self.occurrence = 0;
    }

    /// A boss announced its special attack via overhead text: raise the
    /// alert and start a fresh burst window.
    fn on_special_attack(&mut self, boss: BossKind) {
        let Some(profile) = profile::profile(self.profiles, boss) else {
            return;
        };
        // A new shout means a new burst; forget the previous one's
        // landing tiles so its projectiles register again if re-used.
        self.processed_targets.clear();
        self.alerted.insert(boss);
        self.occurrence += 1;
        self.dispatcher
            .dispatch(profile, self.occurrence, self.config.as_ref());
    }

    /// A hazard projectile was attributed to a boss: schedule its
    /// explosion area, and for bosses with no announcing text, raise the
    /// alert once per occurrence.
    fn on_hazard_projectile(&mut self, boss: BossKind, target: Tile, ticks_until_impact: u64) {
        if !self.processed_targets.insert(target) {
            return;
        }

        let Some(profile) = profile::profile(self.profiles, boss) else {
            return;
        };
        let clear_tick = self.clock.current()
            + ticks_until_impact
            + self.config.extra_linger_ticks(boss);
        debug!(
            ?target,
            ticks_until_impact,
            clear_tick,
            current_tick = self.clock.current(),
            "hazard projectile observed"
        );
        self.scheduler
            .add_area(target, profile.explosion_radius, clear_tick);

        if profile.special_text.is_none() && self.alerted.insert(boss) {
            self.occurrence += 1;
            self.dispatcher
                .dispatch(profile, self.occurrence, self.config.as_ref());
        }
    }

    /// The game clock advanced: expire due tiles. Once the hazard map
    /// is empty the occurrence is over and the per-occurrence debounce
    /// state resets.
    fn on_tick(&mut self) {
        let tick = self.clock.advance();
        self.scheduler.expire(tick);
        if self.scheduler.is_empty() {
            self.alerted.clear();
            self.processed_targets.clear();
        }
    }
}
