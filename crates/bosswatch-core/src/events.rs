//! Events crossing the host boundary and events emitted by classification.

use serde::{Deserialize, Serialize};

use crate::profile::BossKind;
use crate::types::Tile;

/// Raw events delivered by the host, in order, one at a time. Each
/// variant carries only the fields classification needs — the host's
/// entity and projectile objects stay on the host's side of the boundary.
///
/// Ordering contract: within one tick, all other events for that tick are
/// delivered before `TickAdvanced`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WorldEvent {
    /// An entity instance entered the scene.
    EntitySpawned { instance_id: u64, kind_id: u32 },
    /// An entity instance left the scene.
    EntityDespawned { instance_id: u64, kind_id: u32 },
    /// An entity's overhead text changed.
    OverheadTextChanged {
        instance_id: u64,
        kind_id: u32,
        text: String,
    },
    /// A projectile was observed in flight. `target` is absent when the
    /// projectile has no resolvable landing tile.
    ProjectileObserved {
        projectile_id: u32,
        target: Option<Tile>,
        remaining_cycles: i32,
    },
    /// The game clock advanced by one tick.
    TickAdvanced,
}

/// Domain events produced by event classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DomainEvent {
    /// A tracked boss announced its special attack.
    SpecialAttackDetected { boss: BossKind },
    /// A hazard-causing projectile was attributed to a tracked boss.
    HazardProjectileObserved {
        boss: BossKind,
        target: Tile,
        ticks_until_impact: u64,
    },
}
