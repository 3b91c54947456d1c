//! Deterministic rules engine for droll, a push-your-luck dungeon dice game.
//!
//! `droll-core` defines the canonical rules (world state, dice, treasure,
//! lifecycle, and the hero-versus-face rule table) as pure functions from one
//! [`World`] to the next. Randomness enters only through a caller-supplied
//! [`RandRange`], so a game replays exactly given the same draws.
pub mod action;
pub mod config;
pub mod dice;
pub mod engine;
pub mod env;
pub mod error;
pub mod rules;
pub mod state;

pub use action::{apply, augment, reconcile, rewrite_artifact, validate_heroes};
pub use config::GameConfig;
pub use dice::{DungeonRoll, PartyRoll, roll_dungeon, roll_faces, roll_party};
pub use engine::{
    apply_portal, apply_ring, draw, draw_treasure, new_game, next_delve, next_dungeon,
    replace_treasure, retire, retreat, score,
};
pub use env::{FixedRange, RandRange, ScriptedRange};
pub use error::{DrollError, DrollResult, ErrorSeverity, GameError};
pub use rules::{
    Ability, Advancement, DEFAULT_ARTIFACTS, DragonRule, HeroRules, HeroSet, Heroic, RuleTable,
    Transition,
};
pub use state::{
    DungeonFace, DungeonFaces, HeroKind, Noun, PartyFaces, TreasureCounts, TreasureKind, World,
};
