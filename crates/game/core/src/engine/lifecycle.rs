use crate::config::GameConfig;
use crate::dice::{DungeonRoll, PartyRoll};
use crate::env::RandRange;
use crate::error::{DrollError, DrollResult};
use crate::state::{DungeonFace, DungeonFaces, TreasureKind, World};

use super::treasure::replace_treasure;

/// A world before any delve has started.
pub fn new_game() -> World {
    World::new()
}

/// Starts the next delve with a freshly rolled party.
pub fn next_delve(
    world: World,
    config: &GameConfig,
    roll_party: PartyRoll,
    rng: &mut dyn RandRange,
) -> DrollResult<World> {
    if world.delve >= config.max_delves {
        return Err(DrollError::DelveLimit {
            limit: config.max_delves,
        });
    }
    if world.depth != 0 {
        return Err(DrollError::DelveInProgress);
    }
    Ok(World {
        delve: world.delve + 1,
        depth: 0,
        ability: true,
        dungeon: None,
        party: Some(roll_party(config.party_dice, rng)),
        ..world
    })
}

/// Descends one level, rolling fresh dungeon dice alongside any dragons
/// carried over from the level above.
///
/// A blocking dragon is snuck past with a held ring; portals only lead out.
pub fn next_dungeon(
    world: World,
    config: &GameConfig,
    roll_dungeon: DungeonRoll,
    rng: &mut dyn RandRange,
) -> DrollResult<World> {
    if world.party.is_none() {
        return Err(DrollError::NotStarted);
    }

    let mut world = world;
    let dungeon = world.dungeon.unwrap_or_default();
    if !dungeon.defeated_monsters() {
        return Err(DrollError::MonstersRemain);
    }
    if dungeon.dragon_blocking() {
        world = apply_ring(world).map_err(|_| DrollError::DragonBlocks)?;
    }

    let depth = world.depth + 1;
    if depth > config.max_depth {
        return Err(DrollError::MaxDepth {
            max: config.max_depth,
        });
    }

    let dragons = world.dungeon.map_or(0, |dungeon| dungeon.dragon);
    let rolled = roll_dungeon(config.dungeon_dice(depth, dragons), rng);
    let carried = DungeonFaces::zero().with(DungeonFace::Dragon, dragons);
    Ok(World {
        depth,
        dungeon: Some(carried + rolled),
        ..world
    })
}

/// Leaves the dungeon, banking the current depth as experience.
///
/// Remaining monsters require a portal. A blocking dragon is passed with a
/// ring when held and otherwise with a portal.
pub fn retire(world: World) -> DrollResult<World> {
    if world.depth == 0 {
        return Err(DrollError::NotStarted);
    }

    let dungeon = world.dungeon.unwrap_or_default();
    let world = if !dungeon.defeated_monsters() {
        apply_portal(world).map_err(|_| DrollError::MonstersRemain)?
    } else if dungeon.dragon_blocking() {
        apply_ring(world)
            .or_else(|_| apply_portal(world))
            .map_err(|_| DrollError::DragonBlocks)?
    } else {
        world
    };

    Ok(World {
        experience: world.experience + world.depth,
        depth: 0,
        dungeon: None,
        ..world
    })
}

/// Abandons a dungeon that cannot be won; no experience is gained.
pub fn retreat(world: World) -> DrollResult<World> {
    if world.depth == 0 {
        return Err(DrollError::NotStarted);
    }
    if world.dungeon.unwrap_or_default().defeated() {
        return Err(DrollError::ShouldRetireInstead);
    }
    Ok(World {
        depth: 0,
        dungeon: None,
        ..world
    })
}

/// Sneaks past a blocking dragon by spending a ring; grants no experience.
pub fn apply_ring(world: World) -> DrollResult<World> {
    let dungeon = match world.dungeon {
        Some(dungeon) if dungeon.dragon_blocking() => dungeon,
        _ => return Err(DrollError::NoDragonPresent),
    };
    let world = replace_treasure(world, TreasureKind::Ring).map_err(|_| DrollError::NoRingHeld)?;
    Ok(world.with_dungeon(dungeon.with(DungeonFace::Dragon, 0)))
}

/// Flees the current level by spending a portal, discarding every face.
pub fn apply_portal(world: World) -> DrollResult<World> {
    match world.dungeon {
        Some(dungeon) if !dungeon.defeated() => {}
        _ => return Err(DrollError::DungeonAlreadyClear),
    }
    let world = replace_treasure(world, TreasureKind::Portal)?;
    Ok(world.with_dungeon(DungeonFaces::zero()))
}

/// Final score: experience, one point per held token, a bonus point per
/// portal, and two points per pair of dragon scales.
pub fn score(world: &World) -> u32 {
    let treasure = &world.treasure;
    world.experience + treasure.total() + treasure.portal + 2 * (treasure.scale / 2)
}
