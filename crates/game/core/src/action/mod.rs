//! Applying a command to the world.
//!
//! [`apply`] is the single entry point for hero and treasure commands. It
//! works in three explicit phases so each can be tested on its own:
//!
//! 1. [`augment`] counts every held artifact as an extra die of the hero it
//!    stands for,
//! 2. the table cell for `hero x face` runs against that phantom party,
//! 3. [`reconcile`] removes the phantom dice again, paying for any that were
//!    actually spent with the matching artifact.
//!
//! Bait, elixir, ring, portal, and the class ability skip the table entirely.
mod dragon;
mod special;
mod transition;

pub use dragon::validate_heroes;
pub use special::{bait_dragon, consume_ability, elixir};

use strum::IntoEnumIterator;

use crate::env::RandRange;
use crate::error::{DrollError, DrollResult};
use crate::rules::HeroRules;
use crate::state::{HeroKind, Noun, PartyFaces, World};

use special::Special;

/// Applies `noun` with its arguments under `rules`.
///
/// For hero commands the first argument is the face acted upon and any
/// further arguments belong to that cell (revived heroes, extra dragon
/// fighters, more dice to reroll).
pub fn apply(
    rules: &HeroRules,
    world: World,
    rng: &mut dyn RandRange,
    noun: Noun,
    args: &[Noun],
) -> DrollResult<World> {
    let noun = rewrite_artifact(rules, noun);
    let args: Vec<Noun> = args.iter().map(|arg| rewrite_artifact(rules, *arg)).collect();

    if let Some(special) = Special::of(noun) {
        return special.invoke(rules.ability, world, noun, &args);
    }

    let (hero, face) = match (noun, args.first()) {
        (Noun::Hero(hero), Some(Noun::Face(face))) => (hero, *face),
        (noun, target) => {
            return Err(DrollError::UnknownAction {
                noun,
                target: target.copied(),
            });
        }
    };

    let (phantom, increments) = augment(rules, world);
    let acted = rules
        .transition(hero, face)
        .invoke(phantom, rng, hero, face, &args[1..])?;
    Ok(reconcile(rules, acted, increments))
}

/// Replaces an artifact noun with the hero kind it stands for.
pub fn rewrite_artifact(rules: &HeroRules, noun: Noun) -> Noun {
    match noun {
        Noun::Treasure(kind) => rules.artifact_hero(kind).map_or(noun, Noun::Hero),
        _ => noun,
    }
}

/// Adds one phantom die per held artifact, returning the augmented world and
/// the increments applied.
pub fn augment(rules: &HeroRules, world: World) -> (World, PartyFaces) {
    let Some(party) = world.party else {
        return (world, PartyFaces::zero());
    };
    let increments = rules
        .artifacts
        .iter()
        .fold(PartyFaces::zero(), |acc, (kind, hero)| {
            acc.with(*hero, acc.get(*hero) + world.treasure.get(*kind))
        });
    (world.with_party(party + increments), increments)
}

/// Removes phantom dice after an action; every phantom that was spent costs
/// one matching artifact, returned to the reserve.
pub fn reconcile(rules: &HeroRules, world: World, increments: PartyFaces) -> World {
    let Some(mut party) = world.party else {
        return world;
    };
    let mut world = world;

    for hero in HeroKind::iter() {
        let added = increments.get(hero);
        let remaining = party.get(hero);
        if remaining >= added {
            party = party.with(hero, remaining - added);
            continue;
        }

        let mut deficit = added - remaining;
        party = party.with(hero, 0);
        for (kind, _) in rules.artifacts.iter().filter(|(_, owner)| *owner == hero) {
            let held = world.treasure.get(*kind);
            let spent = deficit.min(held);
            world.treasure = world.treasure.with(*kind, held - spent);
            world.reserve = world.reserve.with(*kind, world.reserve.get(*kind) + spent);
            deficit -= spent;
        }
    }

    world.with_party(party)
}
