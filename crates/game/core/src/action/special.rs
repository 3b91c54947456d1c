//! Treasure and ability actions that bypass the hero-versus-face table.
use crate::engine::{apply_portal, apply_ring, replace_treasure};
use crate::error::{DrollError, DrollResult};
use crate::rules::Ability;
use crate::state::{DungeonFace, DungeonFaces, Noun, TreasureKind, World};

use super::transition::{eliminate_targets, expect_hero, increment_hero};

/// Actions keyed by the acting noun alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Special {
    Bait,
    Elixir,
    Ring,
    Portal,
    Ability,
}

impl Special {
    pub(crate) fn of(noun: Noun) -> Option<Self> {
        match noun {
            Noun::Treasure(TreasureKind::Bait) => Some(Self::Bait),
            Noun::Treasure(TreasureKind::Elixir) => Some(Self::Elixir),
            Noun::Treasure(TreasureKind::Ring) => Some(Self::Ring),
            Noun::Treasure(TreasureKind::Portal) => Some(Self::Portal),
            Noun::Ability => Some(Self::Ability),
            _ => None,
        }
    }

    pub(crate) fn invoke(
        self,
        ability: Ability,
        world: World,
        noun: Noun,
        args: &[Noun],
    ) -> DrollResult<World> {
        let target = at_most_one(noun, args)?;
        match self {
            Special::Bait => bait_dragon(world, noun, target, true),
            Special::Elixir => {
                let target = target.ok_or(DrollError::UnknownAction { noun, target: None })?;
                elixir(world, noun, target)
            }
            Special::Ring => {
                dragon_or_default(noun, target)?;
                apply_ring(world)
            }
            Special::Portal => {
                no_target(noun, target)?;
                apply_portal(world)
            }
            Special::Ability => use_ability(ability, world, target),
        }
    }
}

fn at_most_one(noun: Noun, args: &[Noun]) -> DrollResult<Option<Noun>> {
    match args {
        [] => Ok(None),
        [target] => Ok(Some(*target)),
        _ => Err(DrollError::UnexpectedArguments {
            noun,
            given: args.len(),
        }),
    }
}

fn no_target(noun: Noun, target: Option<Noun>) -> DrollResult<()> {
    match target {
        None => Ok(()),
        Some(_) => Err(DrollError::NoTargetsAccepted { noun }),
    }
}

/// Only the dragon may be named; naming nothing means the dragon.
fn dragon_or_default(noun: Noun, target: Option<Noun>) -> DrollResult<DungeonFace> {
    match target {
        None | Some(Noun::Face(DungeonFace::Dragon)) => Ok(DungeonFace::Dragon),
        Some(target) => Err(DrollError::InvalidTarget { noun, target }),
    }
}

/// Turns every goblin, skeleton, and ooze into a dragon die.
pub fn bait_dragon(
    world: World,
    noun: Noun,
    target: Option<Noun>,
    require_treasure: bool,
) -> DrollResult<World> {
    let face = dragon_or_default(noun, target)?;
    let world = if require_treasure {
        replace_treasure(world, TreasureKind::Bait)?
    } else {
        world
    };

    let dungeon = world.dungeon.unwrap_or_default();
    let baited = dungeon.monsters();
    if baited == 0 {
        return Err(DrollError::NoEnemiesToBait);
    }
    let dungeon = DungeonFace::MONSTERS
        .iter()
        .fold(dungeon, |dungeon, monster| dungeon.with(*monster, 0));
    Ok(world.with_dungeon(dungeon.with(face, dungeon.get(face) + baited)))
}

/// Spends an elixir to add one die of the named hero.
pub fn elixir(world: World, noun: Noun, target: Noun) -> DrollResult<World> {
    let hero = expect_hero(noun, target)?;
    let world = replace_treasure(world, TreasureKind::Elixir)?;
    Ok(World {
        party: Some(increment_hero(world.party, hero)?),
        ..world
    })
}

/// Marks the class ability as spent for this delve.
pub fn consume_ability(world: World) -> DrollResult<World> {
    if !world.ability {
        return Err(DrollError::AbilityUnavailable);
    }
    Ok(World {
        ability: false,
        ..world
    })
}

fn use_ability(ability: Ability, world: World, target: Option<Noun>) -> DrollResult<World> {
    let noun = Noun::Ability;
    let world = match ability {
        Ability::Nop => {
            no_target(noun, target)?;
            world
        }
        Ability::BaitDragon => bait_dragon(world, noun, target, false)?,
        Ability::DiscardDragons => {
            let face = dragon_or_default(noun, target)?;
            world.with_dungeon(eliminate_targets(world.dungeon, face)?)
        }
        Ability::SummonHero { choices, default } => {
            let hero = match target {
                None => default,
                Some(target) => expect_hero(noun, target)
                    .ok()
                    .filter(|hero| choices.has(*hero))
                    .ok_or(DrollError::InvalidTarget { noun, target })?,
            };
            World {
                party: Some(increment_hero(world.party, hero)?),
                ..world
            }
        }
        Ability::ClearDungeon => {
            no_target(noun, target)?;
            if world.dungeon.is_none() {
                return Err(DrollError::NoDungeonActive);
            }
            world.with_dungeon(DungeonFaces::zero())
        }
    };
    consume_ability(world)
}
