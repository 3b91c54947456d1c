//! Dragon fights: several heroes spent together for one treasure and one
//! experience point.
use crate::engine::draw_treasure;
use crate::env::RandRange;
use crate::error::{DrollError, DrollResult};
use crate::rules::{DragonRule, HeroSet, Heroic};
use crate::state::{DungeonFace, HeroKind, Noun, World};

use super::transition::{decrement_hero, eliminate_targets, expect_hero};

pub(crate) fn defeat_dragon(
    world: World,
    rng: &mut dyn RandRange,
    rule: &DragonRule,
    hero: HeroKind,
    face: DungeonFace,
    others: &[Noun],
) -> DrollResult<World> {
    let dungeon = world.dungeon.ok_or(DrollError::NoDungeonActive)?;
    if dungeon.get(face) < rule.min_dragons {
        return Err(DrollError::DragonTooSmall {
            required: rule.min_dragons,
        });
    }
    if !dungeon.defeated_monsters() {
        return Err(DrollError::MonstersRemain);
    }

    let mut heroes = Vec::with_capacity(others.len() + 1);
    heroes.push(hero);
    for other in others {
        heroes.push(expect_hero(Noun::Hero(hero), *other)?);
    }

    let mut party = world.party;
    for fighter in &heroes {
        party = Some(decrement_hero(party, *fighter)?);
    }
    validate_heroes(rule, &heroes)?;

    let dungeon = eliminate_targets(world.dungeon, face)?;
    let world = draw_treasure(world, rng)?;
    Ok(World {
        experience: world.experience + 1,
        party,
        dungeon: Some(dungeon),
        ..world
    })
}

/// Checks that `heroes` satisfy the distinctness rule for a dragon fight.
pub fn validate_heroes(rule: &DragonRule, heroes: &[HeroKind]) -> DrollResult<()> {
    if let Some(hero) = heroes.iter().find(|hero| rule.forbidden.has(**hero)) {
        return Err(DrollError::ForbiddenDragonHero { hero: *hero });
    }
    if heroes.len() != rule.heroes as usize {
        return Err(DrollError::WrongHeroCount {
            required: rule.heroes,
            given: heroes.len(),
        });
    }
    if distinct_slots(rule.heroic, heroes) != rule.heroes {
        return Err(DrollError::HeroesNotDistinct {
            required: rule.heroes,
        });
    }
    Ok(())
}

/// Number of dragon slots `heroes` fill.
///
/// Kinds outside an interchangeable group fill one slot per distinct kind.
/// Group members fill one slot each, up to the size of the group, whatever
/// kind they are; `fighter fighter` covers both halves of a fighter/mage group
/// but `fighter fighter fighter` still covers only two.
fn distinct_slots(heroic: Heroic, heroes: &[HeroKind]) -> u32 {
    let group = match heroic {
        Heroic::Distinct => HeroSet::empty(),
        Heroic::Interchangeable(group) => group,
    };

    let mut seen = HeroSet::empty();
    let mut grouped = 0u32;
    for hero in heroes {
        if group.has(*hero) {
            grouped += 1;
        } else {
            seen |= HeroSet::of(*hero);
        }
    }
    seen.bits().count_ones() + grouped.min(group.bits().count_ones())
}
