//! Tracker state snapshot — the read-only view exposed to the renderer.

use serde::{Deserialize, Serialize};

use crate::profile::BossKind;
use crate::types::Tile;

/// Snapshot of the tracker's visible state. Safe to take at any time,
/// including between events within a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    /// Current game tick.
    pub tick: u64,
    /// Currently hazardous tiles, sorted for stable display output.
    pub hazard_tiles: Vec<Tile>,
    /// Bosses with at least one instance currently present.
    pub active_bosses: Vec<BossKind>,
}
