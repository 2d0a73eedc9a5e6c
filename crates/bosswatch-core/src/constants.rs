//! Game-client constants and per-boss identifiers.

/// Client cycles per game tick. Projectile lifetimes arrive in client
/// cycles (20 ms each); one game tick is 600 ms.
pub const CLIENT_CYCLES_PER_TICK: i32 = 30;

// --- Crazy Archaeologist ---

/// NPC kind id for the Crazy Archaeologist.
pub const CRAZY_ARCHAEOLOGIST_NPC_ID: u32 = 6618;

/// Overhead text announcing the Crazy Archaeologist's special attack.
pub const CRAZY_ARCHAEOLOGIST_SPECIAL_TEXT: &str = "Rain of knowledge!";

// --- Deranged Archaeologist ---

/// NPC kind id for the Deranged Archaeologist.
pub const DERANGED_ARCHAEOLOGIST_NPC_ID: u32 = 7806;

/// Overhead text announcing the Deranged Archaeologist's special attack.
pub const DERANGED_ARCHAEOLOGIST_SPECIAL_TEXT: &str = "Learn to Read!";

// --- Shared ---

/// Projectile kind id of the thrown explosive books. Both archaeologists
/// launch the same projectile, so attribution needs presence tracking.
pub const BOOK_PROJECTILE_ID: u32 = 1260;

/// Explosion radius in tiles (Chebyshev) around each landing point.
pub const EXPLOSION_RADIUS: u32 = 1;
