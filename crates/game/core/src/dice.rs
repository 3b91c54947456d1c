//! Dice rolling into face-count histograms.
use strum::EnumCount;

use crate::env::RandRange;
use crate::state::{DungeonFace, DungeonFaces, HeroKind, PartyFaces};

/// Rolls a party of `dice` hero dice. Hero classes may substitute their own.
pub type PartyRoll = fn(u32, &mut dyn RandRange) -> PartyFaces;

/// Rolls `dice` dungeon dice.
pub type DungeonRoll = fn(u32, &mut dyn RandRange) -> DungeonFaces;

/// Rolls `dice` independent `N`-sided dice and counts how often each face
/// came up. Out-of-range answers from the source wrap around.
pub fn roll_faces<const N: usize>(dice: u32, rng: &mut dyn RandRange) -> [u32; N] {
    let mut counts = [0u32; N];
    if N == 0 {
        return counts;
    }
    for _ in 0..dice {
        let face = rng.range(0, N as u32) as usize % N;
        counts[face] += 1;
    }
    counts
}

pub fn roll_dungeon(dice: u32, rng: &mut dyn RandRange) -> DungeonFaces {
    DungeonFaces::from_counts(roll_faces::<{ DungeonFace::COUNT }>(dice, rng))
}

pub fn roll_party(dice: u32, rng: &mut dyn RandRange) -> PartyFaces {
    PartyFaces::from_counts(roll_faces::<{ HeroKind::COUNT }>(dice, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{FixedRange, ScriptedRange};

    #[test]
    fn histogram_total_matches_dice_count() {
        let mut rng = ScriptedRange::new([5, 3, 1, 4, 0, 2, 2, 5]);
        for dice in 0..=12 {
            let counts = roll_faces::<6>(dice, &mut rng);
            assert_eq!(counts.iter().sum::<u32>(), dice);
        }
    }

    #[test]
    fn fixed_source_lands_every_die_on_first_face() {
        let party = roll_party(7, &mut FixedRange);
        assert_eq!(party.fighter, 7);
        assert_eq!(party.total(), 7);
    }

    #[test]
    fn scripted_rolls_are_exact() {
        let mut rng = ScriptedRange::new([0, 1, 5, 5]);
        let dungeon = roll_dungeon(4, &mut rng);
        assert_eq!(dungeon, DungeonFaces::from_counts([1, 1, 0, 0, 0, 2]));
    }

    #[test]
    fn out_of_range_draws_wrap() {
        let mut source = |_low: u32, _high: u32| 8;
        let counts = roll_faces::<6>(1, &mut source);
        assert_eq!(counts, [0, 0, 1, 0, 0, 0]);
    }
}
