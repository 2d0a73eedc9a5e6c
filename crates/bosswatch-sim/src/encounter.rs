//! Encounter roster — which bosses are currently present.
//!
//! Both archaeologists throw the same projectile id, so a projectile on
//! its own cannot name its boss. The roster tracks spawned instances per
//! boss kind and answers the presence question during attribution.

use std::collections::{HashMap, HashSet};

use bosswatch_core::profile::BossKind;

/// Currently present boss instances, keyed by kind.
#[derive(Debug, Default)]
pub struct EncounterRoster {
    present: HashMap<BossKind, HashSet<u64>>,
}

impl EncounterRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a spawned instance.
    pub fn on_spawn(&mut self, instance_id: u64, kind: BossKind) {
        self.present.entry(kind).or_default().insert(instance_id);
    }

    /// Record a despawned instance. Despawn of an instance the roster
    /// never saw spawn is a no-op — the tracker may have been enabled
    /// mid-encounter.
    pub fn on_despawn(&mut self, instance_id: u64, kind: BossKind) {
        if let Some(instances) = self.present.get_mut(&kind) {
            instances.remove(&instance_id);
            if instances.is_empty() {
                self.present.remove(&kind);
            }
        }
    }

    /// Whether at least one instance of this boss is present.
    pub fn is_present(&self, kind: BossKind) -> bool {
        self.present.get(&kind).is_some_and(|set| !set.is_empty())
    }

    /// Bosses with at least one instance present, sorted for stable output.
    pub fn active_bosses(&self) -> Vec<BossKind> {
        let mut bosses: Vec<BossKind> = self.present.keys().copied().collect();
        bosses.sort_unstable();
        bosses
    }

    /// Drop all tracked instances.
    pub fn clear(&mut self) {
        self.present.clear();
    }
}
