//! The hero-versus-face dispatch table.
//!
//! Each cell names a [`Transition`] rather than holding a function pointer,
//! so tables compare structurally and variants are built by overwriting
//! individual cells of [`RuleTable::BASE`].

use bitflags::bitflags;
use strum::{EnumCount, IntoEnumIterator};

use crate::state::{DungeonFace, HeroKind};

bitflags! {
    /// A set of hero kinds, used for interchangeable dragon slots and
    /// ability choices.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct HeroSet: u8 {
        const FIGHTER  = 1 << 0;
        const CLERIC   = 1 << 1;
        const MAGE     = 1 << 2;
        const THIEF    = 1 << 3;
        const CHAMPION = 1 << 4;
        const SCROLL   = 1 << 5;
    }
}

impl HeroSet {
    pub const fn of(hero: HeroKind) -> Self {
        match hero {
            HeroKind::Fighter => Self::FIGHTER,
            HeroKind::Cleric => Self::CLERIC,
            HeroKind::Mage => Self::MAGE,
            HeroKind::Thief => Self::THIEF,
            HeroKind::Champion => Self::CHAMPION,
            HeroKind::Scroll => Self::SCROLL,
        }
    }

    pub const fn has(self, hero: HeroKind) -> bool {
        self.contains(Self::of(hero))
    }

    /// Members in [`HeroKind`] order.
    pub fn heroes(self) -> impl Iterator<Item = HeroKind> {
        HeroKind::iter().filter(move |hero| self.has(*hero))
    }
}

/// How the heroes sent against a dragon must differ from one another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heroic {
    /// Every hero must be a different kind.
    Distinct,
    /// Kinds in the set stand in for one another, but the set as a whole
    /// fills at most as many slots as it has members.
    Interchangeable(HeroSet),
}

/// Requirements for slaying a dragon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragonRule {
    /// Exact number of heroes that must be named.
    pub heroes: u32,
    /// Dragon dice needed before the dragon can be fought.
    pub min_dragons: u32,
    pub heroic: Heroic,
    /// Kinds that may never take part.
    pub forbidden: HeroSet,
}

impl DragonRule {
    pub const BASE: Self = Self {
        heroes: 3,
        min_dragons: 3,
        heroic: Heroic::Distinct,
        forbidden: HeroSet::SCROLL,
    };

    #[must_use]
    pub const fn with_heroes(self, heroes: u32) -> Self {
        Self { heroes, ..self }
    }

    #[must_use]
    pub const fn interchangeable(self, set: HeroSet) -> Self {
        Self {
            heroic: Heroic::Interchangeable(set),
            ..self
        }
    }
}

/// What happens when a hero is applied to a face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    /// Spend the hero to remove one die of the face.
    DefeatOne,
    /// Spend the hero to remove every die of the face.
    DefeatAll,
    /// As [`Transition::DefeatAll`], then remove one more monster named as an
    /// extra argument if any remain.
    DefeatAllPlusOne,
    /// Open one chest for one treasure.
    OpenOne,
    /// Open every chest, one treasure each.
    OpenAll,
    /// Drink every potion, reviving exactly that many named heroes.
    Quaff,
    /// Return the named dice to the pool and roll them again.
    Reroll,
    DefeatDragon(DragonRule),
    CannotFightDragon,
}

/// A fully materialised `hero x face` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuleTable([[Transition; DungeonFace::COUNT]; HeroKind::COUNT]);

impl RuleTable {
    pub const BASE: Self = {
        use Transition::*;
        const D: Transition = DefeatDragon(DragonRule::BASE);
        Self([
            // goblin     skeleton   ooze       chest    potion dragon
            [DefeatAll, DefeatOne, DefeatOne, OpenOne, Quaff, D], // fighter
            [DefeatOne, DefeatAll, DefeatOne, OpenOne, Quaff, D], // cleric
            [DefeatOne, DefeatOne, DefeatAll, OpenOne, Quaff, D], // mage
            [DefeatOne, DefeatOne, DefeatOne, OpenAll, Quaff, D], // thief
            [DefeatAll, DefeatAll, DefeatAll, OpenAll, Quaff, D], // champion
            [Reroll, Reroll, Reroll, Reroll, Quaff, CannotFightDragon], // scroll
        ])
    };

    pub const fn get(&self, hero: HeroKind, face: DungeonFace) -> Transition {
        self.0[hero as usize][face as usize]
    }

    /// Returns a copy with a single cell replaced.
    #[must_use]
    pub const fn with(mut self, hero: HeroKind, face: DungeonFace, transition: Transition) -> Self {
        self.0[hero as usize][face as usize] = transition;
        self
    }

    /// Returns a copy where every hero able to fight dragons uses `rule`.
    #[must_use]
    pub fn with_dragon_rule(mut self, rule: DragonRule) -> Self {
        for row in self.0.iter_mut() {
            let cell = &mut row[DungeonFace::Dragon as usize];
            if matches!(cell, Transition::DefeatDragon(_)) {
                *cell = Transition::DefeatDragon(rule);
            }
        }
        self
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::BASE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_table_matches_hero_specialties() {
        let table = RuleTable::BASE;
        assert_eq!(table.get(HeroKind::Fighter, DungeonFace::Goblin), Transition::DefeatAll);
        assert_eq!(table.get(HeroKind::Cleric, DungeonFace::Skeleton), Transition::DefeatAll);
        assert_eq!(table.get(HeroKind::Mage, DungeonFace::Ooze), Transition::DefeatAll);
        assert_eq!(table.get(HeroKind::Thief, DungeonFace::Chest), Transition::OpenAll);
        assert_eq!(table.get(HeroKind::Fighter, DungeonFace::Ooze), Transition::DefeatOne);
        assert_eq!(table.get(HeroKind::Scroll, DungeonFace::Chest), Transition::Reroll);
        assert_eq!(
            table.get(HeroKind::Scroll, DungeonFace::Dragon),
            Transition::CannotFightDragon
        );
        for hero in HeroKind::iter() {
            assert_eq!(table.get(hero, DungeonFace::Potion), Transition::Quaff);
        }
    }

    #[test]
    fn overrides_touch_only_their_cell() {
        let table = RuleTable::BASE.with(HeroKind::Mage, DungeonFace::Chest, Transition::OpenAll);
        assert_eq!(table.get(HeroKind::Mage, DungeonFace::Chest), Transition::OpenAll);
        assert_eq!(table.get(HeroKind::Cleric, DungeonFace::Chest), Transition::OpenOne);
        assert_ne!(table, RuleTable::BASE);
    }

    #[test]
    fn dragon_rule_skips_heroes_that_cannot_fight() {
        let rule = DragonRule::BASE.with_heroes(2);
        let table = RuleTable::BASE.with_dragon_rule(rule);
        assert_eq!(
            table.get(HeroKind::Thief, DungeonFace::Dragon),
            Transition::DefeatDragon(rule)
        );
        assert_eq!(
            table.get(HeroKind::Scroll, DungeonFace::Dragon),
            Transition::CannotFightDragon
        );
    }

    #[test]
    fn hero_sets_list_members_in_order() {
        let set = HeroSet::MAGE | HeroSet::FIGHTER;
        assert!(set.has(HeroKind::Fighter));
        assert!(!set.has(HeroKind::Thief));
        assert_eq!(
            set.heroes().collect::<Vec<_>>(),
            vec![HeroKind::Fighter, HeroKind::Mage]
        );
    }
}
