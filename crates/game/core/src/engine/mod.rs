//! Delve and depth lifecycle plus treasure bookkeeping.
//!
//! These are the entry points a shell calls directly, outside of hero
//! actions: start a delve, descend, retire, retreat, and score. Each takes a
//! [`World`](crate::World) by value and returns a new one, leaving the input
//! untouched on failure.
mod lifecycle;
mod treasure;

pub use lifecycle::{
    apply_portal, apply_ring, new_game, next_delve, next_dungeon, retire, retreat, score,
};
pub use treasure::{draw, draw_treasure, replace_treasure};
