//! Error taxonomy for droll-core.
//!
//! Every illegal move surfaces as a [`DrollError`]. Because rules never mutate
//! their input, an error simply means no new world was produced; the caller's
//! previous [`World`](crate::World) remains valid.
//!
//! # Design Principles
//!
//! - **One family**: all rule violations share a single enum so the shell can
//!   print and continue without matching on call sites
//! - **Severity Classification**: malformed commands are told apart from moves
//!   the current state forbids, and both from contract violations
//! - **Stable codes**: [`GameError::error_code`] gives a string usable in tests
//!   and logs independent of the message wording

use crate::state::{DungeonFace, HeroKind, Noun, TreasureKind};

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The move is illegal in the current state; another move may succeed.
    ///
    /// Examples: monsters remain, no ring held, dragon too small
    Recoverable,

    /// The command itself is malformed and fails regardless of state.
    ///
    /// Examples: unknown token, wrong number of revival names
    Validation,

    /// A caller broke an engine contract rather than a game rule.
    ///
    /// Examples: acting on a world that has no party or dungeon yet
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for classifying errors raised by the engine.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Rule violations raised by lifecycle functions and actions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrollError {
    // ===== lifecycle =====
    #[error("All {limit} delves have already been undertaken.")]
    DelveLimit { limit: u32 },

    #[error("The current delve must end before another begins.")]
    DelveInProgress,

    #[error("Monsters must be defeated first.")]
    MonstersRemain,

    #[error("The dragon blocks the way and no ring is held.")]
    DragonBlocks,

    #[error("Cannot descend below depth {max}.")]
    MaxDepth { max: u32 },

    #[error("No delve in progress.")]
    NotStarted,

    #[error("Dungeon already defeated; retire instead.")]
    ShouldRetireInstead,

    // ===== dragon and artifacts =====
    #[error("No blocking dragon present.")]
    NoDragonPresent,

    #[error("No ring held.")]
    NoRingHeld,

    #[error("Dungeon already clear; no need to flee.")]
    DungeonAlreadyClear,

    #[error("Cannot {noun} a {target}.")]
    InvalidTarget { noun: Noun, target: Noun },

    #[error("At least one goblin, skeleton, or ooze required to bait the dragon.")]
    NoEnemiesToBait,

    #[error("The dragon only comes at length {required}.")]
    DragonTooSmall { required: u32 },

    #[error("Require exactly {required} to revive, {given} given.")]
    WrongRevivalCount { required: u32, given: usize },

    #[error("{face} cannot be re-rolled.")]
    CannotReroll { face: DungeonFace },

    #[error("A {hero} cannot fight the dragon.")]
    HeroCannotFightDragon { hero: HeroKind },

    #[error("Exactly {required} heroes must be specified, {given} given.")]
    WrongHeroCount { required: u32, given: usize },

    #[error("The {required} heroes are not sufficiently distinct.")]
    HeroesNotDistinct { required: u32 },

    #[error("Heroes of kind {hero} cannot defeat a dragon.")]
    ForbiddenDragonHero { hero: HeroKind },

    // ===== dispatch =====
    #[error("No action for {noun} {}.", describe_target(.target))]
    UnknownAction { noun: Noun, target: Option<Noun> },

    #[error("One additional target okay but {given} provided.")]
    WrongExtraTargetCount { given: usize },

    #[error("{noun} accepts no further arguments ({given} given).")]
    UnexpectedArguments { noun: Noun, given: usize },

    #[error("No targets accepted for {noun}.")]
    NoTargetsAccepted { noun: Noun },

    #[error("Ability not available for use.")]
    AbilityUnavailable,

    #[error("Unknown command word '{token}'.")]
    UnknownNoun { token: String },

    // ===== bookkeeping =====
    #[error("No party currently active.")]
    NoPartyActive,

    #[error("No dungeon currently active.")]
    NoDungeonActive,

    #[error("Require at least one hero {hero}.")]
    HeroUnavailable { hero: HeroKind },

    #[error("Require at least one target {target}.")]
    TargetUnavailable { target: DungeonFace },

    #[error("No {treasure} held.")]
    TreasureNotHeld { treasure: TreasureKind },

    #[error("The treasure reserve is exhausted.")]
    EmptyReserve,
}

fn describe_target(target: &Option<Noun>) -> String {
    match target {
        Some(target) => format!("upon {target}"),
        None => "without a target".to_string(),
    }
}

impl GameError for DrollError {
    fn severity(&self) -> ErrorSeverity {
        use DrollError::*;
        match self {
            InvalidTarget { .. }
            | WrongRevivalCount { .. }
            | WrongHeroCount { .. }
            | HeroesNotDistinct { .. }
            | ForbiddenDragonHero { .. }
            | CannotReroll { .. }
            | HeroCannotFightDragon { .. }
            | UnknownAction { .. }
            | WrongExtraTargetCount { .. }
            | UnexpectedArguments { .. }
            | NoTargetsAccepted { .. }
            | UnknownNoun { .. } => ErrorSeverity::Validation,
            NoPartyActive | NoDungeonActive => ErrorSeverity::Internal,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use DrollError::*;
        match self {
            DelveLimit { .. } => "RULE_DELVE_LIMIT",
            DelveInProgress => "RULE_DELVE_IN_PROGRESS",
            MonstersRemain => "RULE_MONSTERS_REMAIN",
            DragonBlocks => "RULE_DRAGON_BLOCKS",
            MaxDepth { .. } => "RULE_MAX_DEPTH",
            NotStarted => "RULE_NOT_STARTED",
            ShouldRetireInstead => "RULE_SHOULD_RETIRE_INSTEAD",
            NoDragonPresent => "RULE_NO_DRAGON_PRESENT",
            NoRingHeld => "RULE_NO_RING_HELD",
            DungeonAlreadyClear => "RULE_DUNGEON_ALREADY_CLEAR",
            InvalidTarget { .. } => "RULE_INVALID_TARGET",
            NoEnemiesToBait => "RULE_NO_ENEMIES_TO_BAIT",
            DragonTooSmall { .. } => "RULE_DRAGON_TOO_SMALL",
            WrongRevivalCount { .. } => "RULE_WRONG_REVIVAL_COUNT",
            CannotReroll { .. } => "RULE_CANNOT_REROLL",
            HeroCannotFightDragon { .. } => "RULE_HERO_CANNOT_FIGHT_DRAGON",
            WrongHeroCount { .. } => "RULE_WRONG_HERO_COUNT",
            HeroesNotDistinct { .. } => "RULE_HEROES_NOT_DISTINCT",
            ForbiddenDragonHero { .. } => "RULE_FORBIDDEN_DRAGON_HERO",
            UnknownAction { .. } => "RULE_UNKNOWN_ACTION",
            WrongExtraTargetCount { .. } => "RULE_WRONG_EXTRA_TARGET_COUNT",
            UnexpectedArguments { .. } => "RULE_UNEXPECTED_ARGUMENTS",
            NoTargetsAccepted { .. } => "RULE_NO_TARGETS_ACCEPTED",
            AbilityUnavailable => "RULE_ABILITY_UNAVAILABLE",
            UnknownNoun { .. } => "RULE_UNKNOWN_NOUN",
            NoPartyActive => "CONTRACT_NO_PARTY_ACTIVE",
            NoDungeonActive => "CONTRACT_NO_DUNGEON_ACTIVE",
            HeroUnavailable { .. } => "RULE_HERO_UNAVAILABLE",
            TargetUnavailable { .. } => "RULE_TARGET_UNAVAILABLE",
            TreasureNotHeld { .. } => "RULE_TREASURE_NOT_HELD",
            EmptyReserve => "RULE_EMPTY_RESERVE",
        }
    }
}

pub type DrollResult<T> = Result<T, DrollError>;
