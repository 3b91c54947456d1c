//! Knight, promoted to DragonSlayer.
//!
//! Knights never roll scrolls: every scroll face comes up as a champion. Their
//! ability lures every monster into the dragon without spending bait.
//! DragonSlayers additionally need only two heroes to slay the dragon.
use droll_core::{
    Ability, Advancement, DragonRule, HeroKind, HeroRules, PartyFaces, RandRange, roll_party,
};

use super::PROMOTION_EXPERIENCE;

/// Rolls a party, turning every scroll into a champion.
pub fn knight_roll_party(dice: u32, rng: &mut dyn RandRange) -> PartyFaces {
    let party = roll_party(dice, rng);
    party
        .with(HeroKind::Scroll, 0)
        .with(HeroKind::Champion, party.champion + party.scroll)
}

pub fn knight() -> HeroRules {
    HeroRules {
        roll_party: knight_roll_party,
        ability: Ability::BaitDragon,
        advancement: Some(Advancement {
            threshold: PROMOTION_EXPERIENCE,
            successor: "DragonSlayer",
        }),
        ..HeroRules::base("Knight")
    }
}

pub fn dragon_slayer() -> HeroRules {
    let base = HeroRules::base("DragonSlayer");
    HeroRules {
        table: base.table.with_dragon_rule(DragonRule::BASE.with_heroes(2)),
        roll_party: knight_roll_party,
        ability: Ability::BaitDragon,
        ..base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use droll_core::{
        DrollError, DungeonFace, DungeonFaces, Noun, ScriptedRange, World, apply,
    };

    #[test]
    fn scrolls_come_up_as_champions() {
        // Faces 5 are scrolls, 4 champions.
        let mut rng = ScriptedRange::new([5, 4, 0, 5, 1, 5, 2]);
        let party = knight_roll_party(7, &mut rng);
        assert_eq!(party.scroll, 0);
        assert_eq!(party.champion, 4);
        assert_eq!(party.total(), 7);
    }

    #[test]
    fn knight_baits_for_free_once_per_delve() {
        let world = World {
            ability: true,
            ..World::new()
        }
        .with_dungeon(DungeonFaces::from_counts([1, 1, 2, 0, 0, 1]))
        .with_party(PartyFaces::zero());

        let rules = knight();
        let baited = apply(&rules, world, &mut ScriptedRange::default(), Noun::Ability, &[]).unwrap();
        assert_eq!(baited.dungeon.unwrap().dragon, 5);
        assert_eq!(baited.treasure.total(), 0);

        let restocked = baited.with_dungeon(DungeonFaces::zero().with(DungeonFace::Goblin, 2));
        assert_eq!(
            apply(&rules, restocked, &mut ScriptedRange::default(), Noun::Ability, &[]),
            Err(DrollError::AbilityUnavailable)
        );
    }

    #[test]
    fn dragon_slayer_needs_two_heroes() {
        let world = World::new()
            .with_dungeon(DungeonFaces::zero().with(DungeonFace::Dragon, 3))
            .with_party(PartyFaces::from_counts([1, 1, 0, 0, 0, 0]));
        let args = [Noun::Face(DungeonFace::Dragon), Noun::Hero(HeroKind::Cleric)];

        let slain = apply(
            &dragon_slayer(),
            world,
            &mut ScriptedRange::default(),
            Noun::Hero(HeroKind::Fighter),
            &args,
        )
        .unwrap();
        assert_eq!(slain.experience, 1);
        assert_eq!(slain.dungeon.unwrap().dragon, 0);

        assert_eq!(
            apply(
                &knight(),
                world,
                &mut ScriptedRange::default(),
                Noun::Hero(HeroKind::Fighter),
                &args
            ),
            Err(DrollError::WrongHeroCount {
                required: 3,
                given: 2
            })
        );
    }
}
