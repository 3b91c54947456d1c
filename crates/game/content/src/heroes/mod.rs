//! Hero classes and the registry that names them.
//!
//! Every class is a complete [`HeroRules`] value built once at first use.
//! Specialised classes start from the base rules and overwrite a handful of
//! table cells, their dice rollers, or their ability. Promotion is a small
//! state machine: a class names its successor and the experience needed, and
//! terminal classes name nothing.

mod knight;
mod minstrel;
mod spellsword;

use std::sync::OnceLock;

use droll_core::{HeroRules, World};

pub use knight::{dragon_slayer, knight, knight_roll_party};
pub use minstrel::{bard, minstrel};
pub use spellsword::{battlemage, spellsword};

/// Experience at which every starting class is promoted.
pub const PROMOTION_EXPERIENCE: u32 = 5;

/// Name of the class used when none is chosen.
pub const DEFAULT_HERO: &str = "Default";

/// Immutable lookup table of hero classes by name.
#[derive(Debug)]
pub struct HeroRegistry {
    classes: Vec<HeroRules>,
}

impl HeroRegistry {
    /// Builds the registry of every known class.
    pub fn new() -> Self {
        Self {
            classes: vec![
                HeroRules::base(DEFAULT_HERO),
                knight(),
                dragon_slayer(),
                minstrel(),
                bard(),
                spellsword(),
                battlemage(),
            ],
        }
    }

    /// Looks a class up by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&HeroRules> {
        self.classes
            .iter()
            .find(|rules| rules.name.eq_ignore_ascii_case(name))
    }

    /// Class names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.classes.iter().map(|rules| rules.name)
    }

    /// Class that `rules` becomes in `world`: its successor once promotion is
    /// earned, otherwise the same class.
    pub fn advance<'a>(&'a self, rules: &'a HeroRules, world: &World) -> &'a HeroRules {
        rules
            .promotion(world)
            .and_then(|successor| self.get(successor))
            .unwrap_or(rules)
    }
}

impl Default for HeroRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static REGISTRY: OnceLock<HeroRegistry> = OnceLock::new();

/// The process-wide registry, built on first use.
pub fn registry() -> &'static HeroRegistry {
    REGISTRY.get_or_init(HeroRegistry::new)
}

/// Looks a class up in the process-wide registry.
pub fn lookup(name: &str) -> Option<&'static HeroRules> {
    registry().get(name)
}

/// Promotes `rules` through the process-wide registry.
pub fn advance(rules: &'static HeroRules, world: &World) -> &'static HeroRules {
    registry().advance(rules, world)
}
