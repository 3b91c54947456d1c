//! Session orchestration for droll games.
//!
//! This crate wires the pure rules of `droll-core` to the hero classes of
//! `droll-content`, owning the mutable pieces a real game needs: the current
//! world, the active class, and a seeded random source. Consumers embed
//! [`Game`] and feed it whitespace-separated commands.
//!
//! Modules are organized by responsibility:
//! - [`game`] hosts the session and its command surface
//! - [`rng`] adapts a seeded `rand` generator to the engine's random source
//! - [`error`] unifies rule violations with session failures
pub mod error;
pub mod game;
pub mod rng;

pub use error::{Result, RuntimeError};
pub use game::{Command, Game, GameState};
pub use rng::SeededRange;
