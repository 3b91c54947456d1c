//! Hero class rule sets.
//!
//! A [`HeroRules`] value is static configuration: a dispatch table, the dice
//! rollers, the class ability, the artifact mapping, and where the class goes
//! once it has gained enough experience. Variants are plain values built from
//! [`HeroRules::base`] and never mutated afterwards.
mod table;

pub use table::{DragonRule, HeroSet, Heroic, RuleTable, Transition};

use crate::dice::{DungeonRoll, PartyRoll, roll_dungeon, roll_party};
use crate::state::{DungeonFace, HeroKind, TreasureKind, World};

/// Class ability invoked through the `ability` noun; usable once per delve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ability {
    /// Nothing happens beyond spending the ability.
    Nop,
    /// Bait the dragon without spending bait treasure.
    BaitDragon,
    /// Discard every dragon die.
    DiscardDragons,
    /// Add one hero die chosen from `choices`, `default` when none is named.
    SummonHero { choices: HeroSet, default: HeroKind },
    /// Discard every die of the current level.
    ClearDungeon,
}

/// Experience at which a class is replaced by a named successor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Advancement {
    pub threshold: u32,
    pub successor: &'static str,
}

/// Treasure kinds that stand in for an extra die of a hero kind.
pub const DEFAULT_ARTIFACTS: &[(TreasureKind, HeroKind)] = &[
    (TreasureKind::Sword, HeroKind::Fighter),
    (TreasureKind::Talisman, HeroKind::Cleric),
    (TreasureKind::Sceptre, HeroKind::Mage),
    (TreasureKind::Tools, HeroKind::Thief),
    (TreasureKind::Scroll, HeroKind::Scroll),
];

#[derive(Clone, Copy, Debug)]
pub struct HeroRules {
    pub name: &'static str,
    pub table: RuleTable,
    pub roll_party: PartyRoll,
    pub roll_dungeon: DungeonRoll,
    pub ability: Ability,
    pub advancement: Option<Advancement>,
    pub artifacts: &'static [(TreasureKind, HeroKind)],
}

impl HeroRules {
    /// The unmodified rules under a new name.
    pub const fn base(name: &'static str) -> Self {
        Self {
            name,
            table: RuleTable::BASE,
            roll_party,
            roll_dungeon,
            ability: Ability::Nop,
            advancement: None,
            artifacts: DEFAULT_ARTIFACTS,
        }
    }

    pub const fn transition(&self, hero: HeroKind, face: DungeonFace) -> Transition {
        self.table.get(hero, face)
    }

    /// Hero kind a held artifact of `kind` counts as, if any.
    pub fn artifact_hero(&self, kind: TreasureKind) -> Option<HeroKind> {
        self.artifacts
            .iter()
            .find(|(treasure, _)| *treasure == kind)
            .map(|(_, hero)| *hero)
    }

    /// Name of the class that replaces this one in `world`, if it has earned
    /// a promotion.
    pub fn promotion(&self, world: &World) -> Option<&'static str> {
        self.advancement
            .filter(|advancement| world.experience >= advancement.threshold)
            .map(|advancement| advancement.successor)
    }
}

impl Default for HeroRules {
    fn default() -> Self {
        Self::base("Default")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_artifacts_map_to_heroes() {
        let rules = HeroRules::default();
        assert_eq!(rules.artifact_hero(TreasureKind::Sword), Some(HeroKind::Fighter));
        assert_eq!(rules.artifact_hero(TreasureKind::Scroll), Some(HeroKind::Scroll));
        assert_eq!(rules.artifact_hero(TreasureKind::Ring), None);
    }

    #[test]
    fn promotion_waits_for_threshold() {
        let rules = HeroRules {
            advancement: Some(Advancement {
                threshold: 5,
                successor: "Veteran",
            }),
            ..HeroRules::base("Recruit")
        };
        let novice = World::new();
        let seasoned = World {
            experience: 5,
            ..World::new()
        };
        assert_eq!(rules.promotion(&novice), None);
        assert_eq!(rules.promotion(&seasoned), Some("Veteran"));
        assert_eq!(HeroRules::default().promotion(&seasoned), None);
    }
}
