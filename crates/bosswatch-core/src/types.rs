//! Fundamental coordinate and time types.

use serde::{Deserialize, Serialize};

use crate::constants::CLIENT_CYCLES_PER_TICK;

/// A world tile coordinate: south-west corner column, row, and plane.
/// Identity is value equality; tiles are shared keys, never owned by a
/// single hazard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
    pub plane: i32,
}

impl Tile {
    pub fn new(x: i32, y: i32, plane: i32) -> Self {
        Self { x, y, plane }
    }

    /// Tile offset east (+) or west (-) by `dx` columns, same plane.
    pub fn dx(&self, dx: i32) -> Self {
        Self::new(self.x + dx, self.y, self.plane)
    }

    /// Tile offset north (+) or south (-) by `dy` rows, same plane.
    pub fn dy(&self, dy: i32) -> Self {
        Self::new(self.x, self.y + dy, self.plane)
    }

    /// All tiles within Chebyshev distance `radius` of this tile,
    /// including the tile itself: a square of side `2 * radius + 1`.
    pub fn chebyshev_neighborhood(self, radius: u32) -> impl Iterator<Item = Tile> {
        let r = radius as i32;
        (-r..=r).flat_map(move |dx| (-r..=r).map(move |dy| self.dx(dx).dy(dy)))
    }
}

/// The discrete simulation clock. Ticks only move forward, by exactly 1
/// per advance, driven exclusively by the host's tick notification.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GameClock {
    tick: u64,
}

impl GameClock {
    /// Advance by one tick and return the new tick number.
    pub fn advance(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// The current tick number.
    pub fn current(&self) -> u64 {
        self.tick
    }
}

/// Convert a projectile's remaining client cycles to whole game ticks,
/// rounding down. One game tick is [`CLIENT_CYCLES_PER_TICK`] client
/// cycles. Negative cycle counts clamp to zero ticks.
pub fn cycles_to_ticks(cycles: i32) -> u64 {
    (cycles.max(0) / CLIENT_CYCLES_PER_TICK) as u64
}
