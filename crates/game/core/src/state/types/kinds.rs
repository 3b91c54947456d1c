//! Names of every die face, hero, and treasure token in the game.
//!
//! All kinds parse case-insensitively from their snake_case names so the
//! shell layer can hand raw tokens straight to [`Noun::from_str`].

use core::fmt;
use core::str::FromStr;

use strum::IntoEnumIterator;

use crate::error::DrollError;

/// Faces of a dungeon die.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DungeonFace {
    Goblin,
    Skeleton,
    Ooze,
    Chest,
    Potion,
    Dragon,
}

impl DungeonFace {
    /// Ordinary monsters; all three must be gone before chests, potions, or
    /// the dragon can be dealt with.
    pub const MONSTERS: [DungeonFace; 3] =
        [DungeonFace::Goblin, DungeonFace::Skeleton, DungeonFace::Ooze];

    pub const fn is_monster(self) -> bool {
        matches!(
            self,
            DungeonFace::Goblin | DungeonFace::Skeleton | DungeonFace::Ooze
        )
    }

    /// Potions and dragons are never returned to the dice pool by a reroll.
    pub const fn is_rerollable(self) -> bool {
        !matches!(self, DungeonFace::Potion | DungeonFace::Dragon)
    }
}

/// Faces of a party die.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum HeroKind {
    Fighter,
    Cleric,
    Mage,
    Thief,
    Champion,
    Scroll,
}

/// Treasure tokens, listed in the fixed order used when drawing from the
/// reserve.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TreasureKind {
    Sword,
    Talisman,
    Sceptre,
    Tools,
    Scroll,
    Elixir,
    Bait,
    Portal,
    Ring,
    Scale,
}

/// A single command token after parsing.
///
/// `scroll` is both a hero and a treasure; parsing prefers the hero, and the
/// artifact table of the active rules lets a held scroll token stand in for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Noun {
    Hero(HeroKind),
    Face(DungeonFace),
    Treasure(TreasureKind),
    Ability,
}

impl Noun {
    pub const ABILITY: &'static str = "ability";

    pub fn as_hero(self) -> Option<HeroKind> {
        match self {
            Noun::Hero(hero) => Some(hero),
            _ => None,
        }
    }

    pub fn as_face(self) -> Option<DungeonFace> {
        match self {
            Noun::Face(face) => Some(face),
            _ => None,
        }
    }

    /// Every token the parser accepts, in a stable order.
    pub fn all() -> impl Iterator<Item = Noun> {
        HeroKind::iter()
            .map(Noun::Hero)
            .chain(DungeonFace::iter().map(Noun::Face))
            .chain(
                TreasureKind::iter()
                    .filter(|kind| *kind != TreasureKind::Scroll)
                    .map(Noun::Treasure),
            )
            .chain(core::iter::once(Noun::Ability))
    }
}

impl fmt::Display for Noun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Noun::Hero(hero) => write!(f, "{hero}"),
            Noun::Face(face) => write!(f, "{face}"),
            Noun::Treasure(treasure) => write!(f, "{treasure}"),
            Noun::Ability => f.write_str(Self::ABILITY),
        }
    }
}

impl FromStr for Noun {
    type Err = DrollError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if let Ok(hero) = HeroKind::from_str(token) {
            return Ok(Noun::Hero(hero));
        }
        if let Ok(face) = DungeonFace::from_str(token) {
            return Ok(Noun::Face(face));
        }
        if let Ok(treasure) = TreasureKind::from_str(token) {
            return Ok(Noun::Treasure(treasure));
        }
        if token.eq_ignore_ascii_case(Self::ABILITY) {
            return Ok(Noun::Ability);
        }
        Err(DrollError::UnknownNoun {
            token: token.to_string(),
        })
    }
}

impl From<HeroKind> for Noun {
    fn from(hero: HeroKind) -> Self {
        Noun::Hero(hero)
    }
}

impl From<DungeonFace> for Noun {
    fn from(face: DungeonFace) -> Self {
        Noun::Face(face)
    }
}

impl From<TreasureKind> for Noun {
    fn from(treasure: TreasureKind) -> Self {
        Noun::Treasure(treasure)
    }
}
