//! Event classification — raw world events to domain events.
//!
//! A pure function over the core vocabulary: no state of its own beyond
//! what the roster and configuration provide. Radius and clear-tick
//! computation belong to the engine; classification ends at producing the
//! target tile and the tick count until impact.

use bosswatch_core::config::TrackerConfig;
use bosswatch_core::events::{DomainEvent, WorldEvent};
use bosswatch_core::profile::{self, HostileProfile};
use bosswatch_core::types::cycles_to_ticks;

use crate::encounter::EncounterRoster;

/// Classify one world event against a profile table. Returns `None` for
/// events that carry no domain meaning: unmatched ids, disabled
/// tracking, missing target tiles, and unattributable projectiles are
/// all expected, silent discards.
pub fn classify(
    event: &WorldEvent,
    table: &[HostileProfile],
    roster: &EncounterRoster,
    config: &dyn TrackerConfig,
) -> Option<DomainEvent> {
    match event {
        WorldEvent::OverheadTextChanged { kind_id, text, .. } => {
            let profile = profile::profile_for_npc(table, *kind_id)?;
            if !config.track(profile.kind) {
                return None;
            }
            let phrase = profile.special_text?;
            text.contains(phrase)
                .then_some(DomainEvent::SpecialAttackDetected { boss: profile.kind })
        }
        WorldEvent::ProjectileObserved {
            projectile_id,
            target,
            remaining_cycles,
        } => {
            let profile = attribute_projectile(table, *projectile_id, roster)?;
            if !config.track(profile.kind) {
                return None;
            }
            // No resolvable landing tile: not every projectile in the
            // world is relevant.
            let target = (*target)?;
            Some(DomainEvent::HazardProjectileObserved {
                boss: profile.kind,
                target,
                ticks_until_impact: cycles_to_ticks(*remaining_cycles),
            })
        }
        WorldEvent::EntitySpawned { .. }
        | WorldEvent::EntityDespawned { .. }
        | WorldEvent::TickAdvanced => None,
    }
}

/// Resolve a projectile id to its boss. A unique id names its profile
/// directly; a shared id is attributed to whichever boss has an instance
/// present. Neither present means the projectile cannot be attributed
/// and is discarded.
fn attribute_projectile<'a>(
    table: &'a [HostileProfile],
    projectile_id: u32,
    roster: &EncounterRoster,
) -> Option<&'a HostileProfile> {
    let candidates: Vec<&'a HostileProfile> =
        profile::profiles_for_projectile(table, projectile_id).collect();
    match candidates.as_slice() {
        [] => None,
        [unique] => Some(*unique),
        ambiguous => ambiguous
            .iter()
            .copied()
            .find(|p| roster.is_present(p.kind)),
    }
}
