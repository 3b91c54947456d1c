//! Spellsword, promoted to Battlemage.
use droll_core::{
    Ability, Advancement, DragonRule, DungeonFace, HeroKind, HeroRules, HeroSet, RuleTable,
    Transition,
};

use super::PROMOTION_EXPERIENCE;

const BLADES: HeroSet = HeroSet::FIGHTER.union(HeroSet::MAGE);

fn spellsword_table() -> RuleTable {
    RuleTable::BASE
        .with(HeroKind::Fighter, DungeonFace::Ooze, Transition::DefeatAll)
        .with(HeroKind::Mage, DungeonFace::Goblin, Transition::DefeatAll)
        .with_dragon_rule(DragonRule::BASE.interchangeable(BLADES))
}

pub fn spellsword() -> HeroRules {
    HeroRules {
        table: spellsword_table(),
        ability: Ability::SummonHero {
            choices: BLADES,
            default: HeroKind::Fighter,
        },
        advancement: Some(Advancement {
            threshold: PROMOTION_EXPERIENCE,
            successor: "Battlemage",
        }),
        ..HeroRules::base("Spellsword")
    }
}

pub fn battlemage() -> HeroRules {
    HeroRules {
        table: spellsword_table(),
        ability: Ability::ClearDungeon,
        ..HeroRules::base("Battlemage")
    }
}
