//! Minstrel, promoted to Bard.
use droll_core::{
    Ability, Advancement, DragonRule, DungeonFace, HeroKind, HeroRules, HeroSet, RuleTable,
    Transition,
};

use super::PROMOTION_EXPERIENCE;

/// Mages open chests like thieves and thieves melt ooze like mages, so the
/// two may stand in for each other against the dragon.
fn minstrel_table() -> RuleTable {
    RuleTable::BASE
        .with(HeroKind::Mage, DungeonFace::Chest, Transition::OpenAll)
        .with(HeroKind::Thief, DungeonFace::Ooze, Transition::DefeatAll)
        .with_dragon_rule(DragonRule::BASE.interchangeable(HeroSet::MAGE.union(HeroSet::THIEF)))
}

pub fn minstrel() -> HeroRules {
    HeroRules {
        table: minstrel_table(),
        ability: Ability::DiscardDragons,
        advancement: Some(Advancement {
            threshold: PROMOTION_EXPERIENCE,
            successor: "Bard",
        }),
        ..HeroRules::base("Minstrel")
    }
}

pub fn bard() -> HeroRules {
    let table = DungeonFace::MONSTERS.iter().fold(minstrel_table(), |table, monster| {
        table.with(HeroKind::Champion, *monster, Transition::DefeatAllPlusOne)
    });
    HeroRules {
        table,
        ability: Ability::DiscardDragons,
        ..HeroRules::base("Bard")
    }
}
