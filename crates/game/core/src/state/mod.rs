//! Authoritative game state representation.
//!
//! [`World`] is an immutable value: every rule in the engine reads one world
//! and returns a fresh one, so a failed move leaves the caller's copy intact
//! and past snapshots can be compared structurally.
pub mod types;

use core::fmt;

pub use types::{
    DungeonFace, DungeonFaces, HeroKind, Noun, PartyFaces, TreasureCounts, TreasureKind,
};

/// Canonical snapshot of a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    /// Number of delves started so far.
    pub delve: u32,
    /// Dungeon rolls taken in the current delve; zero between delves.
    pub depth: u32,
    /// Score banked by retiring from earlier depths and slaying dragons.
    pub experience: u32,
    /// Current depth's unresolved dice, absent before the first descent.
    pub dungeon: Option<DungeonFaces>,
    /// Hero dice for the current delve, absent before the first delve.
    pub party: Option<PartyFaces>,
    /// Whether the hero class ability may still be used this delve.
    pub ability: bool,
    /// Treasure held by the player.
    pub treasure: TreasureCounts,
    /// Unclaimed treasure; `treasure + reserve` is constant for a game.
    pub reserve: TreasureCounts,
}

impl World {
    /// A world before any delve has started.
    pub const fn new() -> Self {
        Self {
            delve: 0,
            depth: 0,
            experience: 0,
            dungeon: None,
            party: None,
            ability: false,
            treasure: TreasureCounts::zero(),
            reserve: TreasureCounts::INITIAL_RESERVE,
        }
    }

    #[must_use]
    pub fn with_dungeon(self, dungeon: DungeonFaces) -> Self {
        Self {
            dungeon: Some(dungeon),
            ..self
        }
    }

    #[must_use]
    pub fn with_party(self, party: PartyFaces) -> Self {
        Self {
            party: Some(party),
            ..self
        }
    }

    /// Moves `count` units of `kind` out of the reserve and into held treasure.
    ///
    /// Intended for fixtures and scenario setup; the reserve saturates at zero.
    #[must_use]
    pub fn with_treasure(self, kind: TreasureKind, count: u32) -> Self {
        let held = self.treasure.get(kind);
        let pooled = self.reserve.get(kind) + held;
        Self {
            treasure: self.treasure.with(kind, count),
            reserve: self.reserve.with(kind, pooled.saturating_sub(count)),
            ..self
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Brief rendering suppressing zero and absent fields, e.g.
/// `(delve=1, depth=1, ability=true, dungeon=(goblin=1), party=(mage=2), treasure=())`.
impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<String> = Vec::new();
        if self.delve > 0 {
            fields.push(format!("delve={}", self.delve));
        }
        if self.depth > 0 {
            fields.push(format!("depth={}", self.depth));
        }
        if self.experience > 0 {
            fields.push(format!("experience={}", self.experience));
        }
        if self.ability {
            fields.push("ability=true".to_string());
        }
        if let Some(dungeon) = &self.dungeon {
            fields.push(format!("dungeon={dungeon}"));
        }
        if let Some(party) = &self.party {
            fields.push(format!("party={party}"));
        }
        fields.push(format!("treasure={}", self.treasure));
        write!(f, "({})", fields.join(", "))
    }
}
