//! Treasure reserve bookkeeping.
//!
//! The reserve and the player's held treasure always sum to
//! [`TreasureCounts::INITIAL_RESERVE`]. Drawing and replacing are the only
//! two operations that move tokens between them.

use strum::IntoEnumIterator;

use crate::env::RandRange;
use crate::error::{DrollError, DrollResult};
use crate::state::{TreasureCounts, TreasureKind, World};

/// Picks one token uniformly from `reserve` without replacement.
///
/// Tokens are laid out in [`TreasureKind`] order, each kind repeated by its
/// remaining count, and a single index into that sequence is drawn.
///
/// Refuses with [`DrollError::EmptyReserve`] while one token or fewer remains,
/// so the final token of the reserve is never handed out.
pub fn draw(
    reserve: TreasureCounts,
    rng: &mut dyn RandRange,
) -> DrollResult<(TreasureKind, TreasureCounts)> {
    let total = reserve.total();
    if total <= 1 {
        return Err(DrollError::EmptyReserve);
    }

    let mut index = rng.range(0, total) % total;
    for kind in TreasureKind::iter() {
        let available = reserve.get(kind);
        if index < available {
            return Ok((kind, reserve.with(kind, available - 1)));
        }
        index -= available;
    }
    Err(DrollError::EmptyReserve)
}

/// Moves one randomly drawn token from the reserve into held treasure.
pub fn draw_treasure(world: World, rng: &mut dyn RandRange) -> DrollResult<World> {
    let (kind, reserve) = draw(world.reserve, rng)?;
    let held = world.treasure.get(kind);
    Ok(World {
        treasure: world.treasure.with(kind, held + 1),
        reserve,
        ..world
    })
}

/// Spends one held token of `kind`, returning it to the reserve.
pub fn replace_treasure(world: World, kind: TreasureKind) -> DrollResult<World> {
    let held = world.treasure.get(kind);
    if held == 0 {
        return Err(DrollError::TreasureNotHeld { treasure: kind });
    }
    let pooled = world.reserve.get(kind);
    Ok(World {
        treasure: world.treasure.with(kind, held - 1),
        reserve: world.reserve.with(kind, pooled + 1),
        ..world
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{FixedRange, ScriptedRange};

    #[test]
    fn draw_moves_exactly_one_token() {
        let pre = World::new();
        let post = draw_treasure(pre, &mut ScriptedRange::new([17])).unwrap();
        assert_eq!(pre.treasure.total(), 0);
        assert_eq!(post.treasure.total(), 1);
        assert_eq!(pre.reserve.total() - post.reserve.total(), 1);
    }

    #[test]
    fn draw_walks_kinds_in_fixed_order() {
        // 3 swords, 3 talismans, 3 sceptres precede index 9.
        let (kind, _) = draw(TreasureCounts::INITIAL_RESERVE, &mut ScriptedRange::new([9])).unwrap();
        assert_eq!(kind, TreasureKind::Tools);

        let (kind, _) = draw(TreasureCounts::INITIAL_RESERVE, &mut FixedRange).unwrap();
        assert_eq!(kind, TreasureKind::Sword);

        let (kind, _) = draw(TreasureCounts::INITIAL_RESERVE, &mut ScriptedRange::new([35])).unwrap();
        assert_eq!(kind, TreasureKind::Scale);
    }

    #[test]
    fn draw_skips_exhausted_kinds() {
        let reserve = TreasureCounts::zero()
            .with(TreasureKind::Portal, 1)
            .with(TreasureKind::Scale, 2);
        let (kind, rest) = draw(reserve, &mut ScriptedRange::new([1])).unwrap();
        assert_eq!(kind, TreasureKind::Scale);
        assert_eq!(rest.portal, 1);
        assert_eq!(rest.scale, 1);
    }

    // The final token in the reserve is never drawn; with two left, one draw
    // succeeds and the next is refused.
    #[test]
    fn draw_refuses_the_last_remaining_token() {
        let two = TreasureCounts::zero().with(TreasureKind::Ring, 2);
        let (kind, one) = draw(two, &mut FixedRange).unwrap();
        assert_eq!(kind, TreasureKind::Ring);
        assert_eq!(one.total(), 1);
        assert_eq!(draw(one, &mut FixedRange), Err(DrollError::EmptyReserve));
        assert_eq!(
            draw(TreasureCounts::zero(), &mut FixedRange),
            Err(DrollError::EmptyReserve)
        );
    }

    #[test]
    fn replace_inverts_draw() {
        let mut rng = ScriptedRange::new([4, 30, 12, 21]);
        let mut world = World::new();
        for _ in 0..4 {
            let pre = world;
            let drawn = draw_treasure(pre, &mut rng).unwrap();
            let kind = TreasureKind::iter()
                .find(|kind| drawn.treasure.get(*kind) > pre.treasure.get(*kind))
                .unwrap();
            let restored = replace_treasure(drawn, kind).unwrap();
            assert_eq!(restored.treasure, pre.treasure);
            assert_eq!(restored.reserve, pre.reserve);
            world = drawn;
        }
    }

    #[test]
    fn replace_requires_held_treasure() {
        let world = World::new().with_treasure(TreasureKind::Elixir, 1);
        let spent = replace_treasure(world, TreasureKind::Elixir).unwrap();
        assert_eq!(spent.treasure.elixir, 0);
        assert_eq!(spent.reserve.elixir, 3);
        assert_eq!(
            replace_treasure(spent, TreasureKind::Elixir),
            Err(DrollError::TreasureNotHeld {
                treasure: TreasureKind::Elixir
            })
        );
    }
}
