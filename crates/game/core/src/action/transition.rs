//! Transitions reachable from the hero-versus-face table.
use crate::dice::roll_dungeon;
use crate::engine::draw_treasure;
use crate::env::RandRange;
use crate::error::{DrollError, DrollResult};
use crate::rules::Transition;
use crate::state::{DungeonFace, DungeonFaces, HeroKind, Noun, PartyFaces, World};

use super::dragon::defeat_dragon;

impl Transition {
    /// Runs this cell for `hero` against `face`, with any further command
    /// arguments in `extra`.
    pub fn invoke(
        self,
        world: World,
        rng: &mut dyn RandRange,
        hero: HeroKind,
        face: DungeonFace,
        extra: &[Noun],
    ) -> DrollResult<World> {
        match self {
            Transition::DefeatOne => {
                no_extra(hero, extra)?;
                defeat_one(world, hero, face)
            }
            Transition::DefeatAll => {
                no_extra(hero, extra)?;
                defeat_all(world, hero, face)
            }
            Transition::DefeatAllPlusOne => defeat_all_plus_one(world, hero, face, extra),
            Transition::OpenOne => {
                no_extra(hero, extra)?;
                open_one(world, rng, hero, face)
            }
            Transition::OpenAll => {
                no_extra(hero, extra)?;
                open_all(world, rng, hero, face)
            }
            Transition::Quaff => quaff(world, hero, face, extra),
            Transition::Reroll => reroll(world, rng, hero, face, extra),
            Transition::DefeatDragon(rule) => defeat_dragon(world, rng, &rule, hero, face, extra),
            Transition::CannotFightDragon => Err(DrollError::HeroCannotFightDragon { hero }),
        }
    }
}

fn no_extra(hero: HeroKind, extra: &[Noun]) -> DrollResult<()> {
    if extra.is_empty() {
        Ok(())
    } else {
        Err(DrollError::UnexpectedArguments {
            noun: Noun::Hero(hero),
            given: extra.len(),
        })
    }
}

pub(crate) fn decrement_hero(party: Option<PartyFaces>, hero: HeroKind) -> DrollResult<PartyFaces> {
    let party = party.ok_or(DrollError::NoPartyActive)?;
    match party.get(hero) {
        0 => Err(DrollError::HeroUnavailable { hero }),
        count => Ok(party.with(hero, count - 1)),
    }
}

pub(crate) fn increment_hero(party: Option<PartyFaces>, hero: HeroKind) -> DrollResult<PartyFaces> {
    let party = party.ok_or(DrollError::NoPartyActive)?;
    Ok(party.with(hero, party.get(hero) + 1))
}

fn decrement_target(dungeon: Option<DungeonFaces>, face: DungeonFace) -> DrollResult<DungeonFaces> {
    let dungeon = dungeon.ok_or(DrollError::NoDungeonActive)?;
    match dungeon.get(face) {
        0 => Err(DrollError::TargetUnavailable { target: face }),
        count => Ok(dungeon.with(face, count - 1)),
    }
}

pub(crate) fn eliminate_targets(
    dungeon: Option<DungeonFaces>,
    face: DungeonFace,
) -> DrollResult<DungeonFaces> {
    let dungeon = dungeon.ok_or(DrollError::NoDungeonActive)?;
    match dungeon.get(face) {
        0 => Err(DrollError::TargetUnavailable { target: face }),
        _ => Ok(dungeon.with(face, 0)),
    }
}

fn require_defeated_monsters(world: &World) -> DrollResult<()> {
    match world.dungeon {
        Some(dungeon) if !dungeon.defeated_monsters() => Err(DrollError::MonstersRemain),
        _ => Ok(()),
    }
}

fn expect_face(hero: HeroKind, noun: Noun) -> DrollResult<DungeonFace> {
    noun.as_face().ok_or(DrollError::InvalidTarget {
        noun: Noun::Hero(hero),
        target: noun,
    })
}

pub(crate) fn expect_hero(noun: Noun, target: Noun) -> DrollResult<HeroKind> {
    target
        .as_hero()
        .ok_or(DrollError::InvalidTarget { noun, target })
}

fn defeat_one(world: World, hero: HeroKind, face: DungeonFace) -> DrollResult<World> {
    Ok(World {
        party: Some(decrement_hero(world.party, hero)?),
        dungeon: Some(decrement_target(world.dungeon, face)?),
        ..world
    })
}

fn defeat_all(world: World, hero: HeroKind, face: DungeonFace) -> DrollResult<World> {
    Ok(World {
        party: Some(decrement_hero(world.party, hero)?),
        dungeon: Some(eliminate_targets(world.dungeon, face)?),
        ..world
    })
}

fn defeat_all_plus_one(
    world: World,
    hero: HeroKind,
    face: DungeonFace,
    extra: &[Noun],
) -> DrollResult<World> {
    let world = defeat_all(world, hero, face)?;

    if world.dungeon.is_some_and(|dungeon| dungeon.defeated_monsters()) {
        no_extra(hero, extra)?;
        return Ok(world);
    }

    let [additional] = extra else {
        return Err(DrollError::WrongExtraTargetCount { given: extra.len() });
    };
    let additional = expect_face(hero, *additional)?;
    if !additional.is_monster() {
        return Err(DrollError::InvalidTarget {
            noun: Noun::Hero(hero),
            target: Noun::Face(additional),
        });
    }

    // The same die strikes again.
    let world = World {
        party: Some(increment_hero(world.party, hero)?),
        ..world
    };
    defeat_one(world, hero, additional)
}

fn open_one(
    world: World,
    rng: &mut dyn RandRange,
    hero: HeroKind,
    face: DungeonFace,
) -> DrollResult<World> {
    require_defeated_monsters(&world)?;
    let party = decrement_hero(world.party, hero)?;
    let dungeon = decrement_target(world.dungeon, face)?;
    let world = draw_treasure(world, rng)?;
    Ok(World {
        party: Some(party),
        dungeon: Some(dungeon),
        ..world
    })
}

fn open_all(
    world: World,
    rng: &mut dyn RandRange,
    hero: HeroKind,
    face: DungeonFace,
) -> DrollResult<World> {
    require_defeated_monsters(&world)?;
    let party = decrement_hero(world.party, hero)?;
    let dungeon = eliminate_targets(world.dungeon, face)?;

    let chests = world.dungeon.map_or(0, |dungeon| dungeon.get(face));
    let mut world = world;
    for _ in 0..chests {
        world = draw_treasure(world, rng)?;
    }
    Ok(World {
        party: Some(party),
        dungeon: Some(dungeon),
        ..world
    })
}

fn quaff(world: World, hero: HeroKind, face: DungeonFace, revive: &[Noun]) -> DrollResult<World> {
    let potions = world.dungeon.map_or(0, |dungeon| dungeon.get(face));
    if potions == 0 {
        return Err(DrollError::TargetUnavailable { target: face });
    }
    if revive.len() != potions as usize {
        return Err(DrollError::WrongRevivalCount {
            required: potions,
            given: revive.len(),
        });
    }
    require_defeated_monsters(&world)?;

    let mut party = decrement_hero(world.party, hero)?;
    for noun in revive {
        let revived = expect_hero(Noun::Hero(hero), *noun)?;
        party = increment_hero(Some(party), revived)?;
    }
    Ok(World {
        party: Some(party),
        dungeon: Some(eliminate_targets(world.dungeon, face)?),
        ..world
    })
}

fn reroll(
    world: World,
    rng: &mut dyn RandRange,
    hero: HeroKind,
    face: DungeonFace,
    extra: &[Noun],
) -> DrollResult<World> {
    let mut reduced = world.dungeon;
    let mut rerolled = 0;
    for target in core::iter::once(face).chain(
        extra
            .iter()
            .map(|noun| expect_face(hero, *noun))
            .collect::<DrollResult<Vec<_>>>()?,
    ) {
        if !target.is_rerollable() {
            return Err(DrollError::CannotReroll { face: target });
        }
        reduced = Some(decrement_target(reduced, target)?);
        rerolled += 1;
    }

    let party = decrement_hero(world.party, hero)?;
    let increased = roll_dungeon(rerolled, rng);
    Ok(World {
        party: Some(party),
        dungeon: reduced.map(|dungeon| dungeon + increased),
        ..world
    })
}
