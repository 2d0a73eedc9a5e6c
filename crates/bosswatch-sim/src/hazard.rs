//! Hazard tile scheduler.
//!
//! Maps each hazardous tile to the tick at which it stops being
//! hazardous. Overlapping area insertions merge by taking the maximum
//! clear tick per tile, so a later burst never shortens the lifetime an
//! earlier burst established.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use bosswatch_core::types::Tile;

/// Tile-to-clear-tick schedule. A tile is hazardous for every tick
/// strictly less than its clear tick and is removed by the `expire` call
/// for the clear tick itself.
#[derive(Debug, Default)]
pub struct HazardScheduler {
    clear_ticks: HashMap<Tile, u64>,
}

impl HazardScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the Chebyshev neighborhood of `center` (side `2 * radius + 1`)
    /// hazardous until `clear_tick`. Tiles already marked keep the later
    /// of their existing and the proposed clear tick.
    pub fn add_area(&mut self, center: Tile, radius: u32, clear_tick: u64) {
        for tile in center.chebyshev_neighborhood(radius) {
            match self.clear_ticks.entry(tile) {
                Entry::Occupied(mut entry) => {
                    if clear_tick > *entry.get() {
                        debug!(
                            ?tile,
                            from = *entry.get(),
                            to = clear_tick,
                            "extended hazard tile"
                        );
                        entry.insert(clear_tick);
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(clear_tick);
                }
            }
        }
        debug!(?center, radius, clear_tick, "registered hazard area");
    }

    /// Remove every tile whose clear tick has been reached. The engine
    /// calls this once per tick, in tick order; out-of-order calls are a
    /// caller bug and are not defended against here.
    pub fn expire(&mut self, current_tick: u64) {
        self.clear_ticks.retain(|tile, clear_tick| {
            let keep = *clear_tick > current_tick;
            if !keep {
                debug!(?tile, current_tick, "cleared hazard tile");
            }
            keep
        });
    }

    pub fn is_empty(&self) -> bool {
        self.clear_ticks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clear_ticks.len()
    }

    /// Currently hazardous tiles, in no particular order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.clear_ticks.keys().copied()
    }

    /// Currently hazardous tiles, sorted for stable display output.
    pub fn sorted_tiles(&self) -> Vec<Tile> {
        let mut tiles: Vec<Tile> = self.tiles().collect();
        tiles.sort_unstable();
        tiles
    }

    /// The clear tick currently scheduled for a tile, if it is hazardous.
    pub fn clear_tick(&self, tile: &Tile) -> Option<u64> {
        self.clear_ticks.get(tile).copied()
    }

    /// Drop all scheduled hazards.
    pub fn clear(&mut self) {
        self.clear_ticks.clear();
    }
}
