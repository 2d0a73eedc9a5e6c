//! Static descriptors for the trackable hostiles.
//!
//! Detection is data-driven: every boss-specific signal (npc id, special
//! attack phrase, projectile id, explosion radius) lives in a profile
//! table. Adding a boss is a data change, not a code change. [`PROFILES`]
//! is the stock table; the engine accepts any `'static` table.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// A trackable hostile kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BossKind {
    /// Wilderness boss south of the Ruins. Shouts "Rain of knowledge!".
    CrazyArchaeologist,
    /// Fossil Island boss. Shouts "Learn to Read!".
    DerangedArchaeologist,
}

/// Static description of one boss's detection signals. Profiles are
/// constructed once and never mutated; the live tracking toggle lives in
/// the configuration, not here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HostileProfile {
    pub kind: BossKind,
    /// Display name, used verbatim in alert text.
    pub name: &'static str,
    /// NPC kind id whose overhead text signals the special attack.
    pub npc_id: u32,
    /// Substring of overhead text announcing the special attack
    /// (case-sensitive, the game's exact phrasing). `None` for bosses
    /// whose only signal is the projectile itself.
    pub special_text: Option<&'static str>,
    /// Projectile kind id of the hazard-causing projectile.
    pub projectile_id: u32,
    /// Chebyshev radius of the explosion around each landing tile.
    pub explosion_radius: u32,
}

/// The stock profile table.
pub const PROFILES: &[HostileProfile] = &[
    HostileProfile {
        kind: BossKind::CrazyArchaeologist,
        name: "Crazy Archaeologist",
        npc_id: CRAZY_ARCHAEOLOGIST_NPC_ID,
        special_text: Some(CRAZY_ARCHAEOLOGIST_SPECIAL_TEXT),
        projectile_id: BOOK_PROJECTILE_ID,
        explosion_radius: EXPLOSION_RADIUS,
    },
    HostileProfile {
        kind: BossKind::DerangedArchaeologist,
        name: "Deranged Archaeologist",
        npc_id: DERANGED_ARCHAEOLOGIST_NPC_ID,
        special_text: Some(DERANGED_ARCHAEOLOGIST_SPECIAL_TEXT),
        projectile_id: BOOK_PROJECTILE_ID,
        explosion_radius: EXPLOSION_RADIUS,
    },
];

/// The table entry for a boss kind, if the table has one.
pub fn profile(table: &[HostileProfile], kind: BossKind) -> Option<&HostileProfile> {
    table.iter().find(|p| p.kind == kind)
}

/// The profile whose npc id matches, if any.
pub fn profile_for_npc(table: &[HostileProfile], npc_id: u32) -> Option<&HostileProfile> {
    table.iter().find(|p| p.npc_id == npc_id)
}

/// All profiles whose hazard projectile matches. More than one match
/// means the id is ambiguous and needs presence disambiguation.
pub fn profiles_for_projectile(
    table: &[HostileProfile],
    projectile_id: u32,
) -> impl Iterator<Item = &HostileProfile> {
    table.iter().filter(move |p| p.projectile_id == projectile_id)
}

/// Whether this boss's projectile id is shared with another profile.
pub fn shares_projectile_id(table: &[HostileProfile], kind: BossKind) -> bool {
    match profile(table, kind) {
        Some(p) => {
            table
                .iter()
                .filter(|other| other.projectile_id == p.projectile_id)
                .count()
                > 1
        }
        None => false,
    }
}
