//! Count histograms over dungeon faces, party faces, and treasure kinds.
//!
//! Each record is a plain `Copy` value. Updates go through [`with`] style
//! builders that hand back a new record, so callers never observe partially
//! updated histograms.
//!
//! [`with`]: DungeonFaces::with

use core::fmt;
use core::ops::Add;

use strum::{EnumCount, IntoEnumIterator};

use super::kinds::{DungeonFace, HeroKind, TreasureKind};

macro_rules! face_record {
    (
        $(#[$meta:meta])*
        $name:ident over $kind:ident {
            $($field:ident => $variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            $(pub $field: u32,)+
        }

        impl $name {
            /// Number of distinct kinds tracked by this record.
            pub const KINDS: usize = <$kind as EnumCount>::COUNT;

            pub const fn zero() -> Self {
                Self { $($field: 0,)+ }
            }

            /// Builds a record from counts listed in declaration order.
            pub const fn from_counts(counts: [u32; <$kind as EnumCount>::COUNT]) -> Self {
                let [$($field),+] = counts;
                Self { $($field,)+ }
            }

            pub const fn to_counts(&self) -> [u32; <$kind as EnumCount>::COUNT] {
                [$(self.$field),+]
            }

            pub const fn get(&self, kind: $kind) -> u32 {
                match kind {
                    $($kind::$variant => self.$field,)+
                }
            }

            /// Returns a copy with `kind` set to `count`.
            #[must_use]
            pub const fn with(mut self, kind: $kind, count: u32) -> Self {
                match kind {
                    $($kind::$variant => self.$field = count,)+
                }
                self
            }

            pub const fn total(&self) -> u32 {
                0 $(+ self.$field)+
            }

            pub const fn is_empty(&self) -> bool {
                self.total() == 0
            }

            pub fn iter(&self) -> impl Iterator<Item = ($kind, u32)> + '_ {
                $kind::iter().map(move |kind| (kind, self.get(kind)))
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field,)+ }
            }
        }

        /// Brief rendering that omits zero counts, e.g. `(goblin=1, chest=2)`.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("(")?;
                let mut first = true;
                for (kind, count) in self.iter().filter(|(_, count)| *count > 0) {
                    if !first {
                        f.write_str(", ")?;
                    }
                    write!(f, "{kind}={count}")?;
                    first = false;
                }
                f.write_str(")")
            }
        }
    };
}

face_record! {
    /// Unresolved dungeon dice at the current depth.
    DungeonFaces over DungeonFace {
        goblin => Goblin,
        skeleton => Skeleton,
        ooze => Ooze,
        chest => Chest,
        potion => Potion,
        dragon => Dragon,
    }
}

face_record! {
    /// Hero dice still available during the current delve.
    PartyFaces over HeroKind {
        fighter => Fighter,
        cleric => Cleric,
        mage => Mage,
        thief => Thief,
        champion => Champion,
        scroll => Scroll,
    }
}

face_record! {
    /// Treasure token counts; used both for held treasure and the reserve.
    TreasureCounts over TreasureKind {
        sword => Sword,
        talisman => Talisman,
        sceptre => Sceptre,
        tools => Tools,
        scroll => Scroll,
        elixir => Elixir,
        bait => Bait,
        portal => Portal,
        ring => Ring,
        scale => Scale,
    }
}

impl DungeonFaces {
    /// Dragon dice needed before the dragon wakes and must be dealt with.
    pub const DRAGON_THRESHOLD: u32 = 3;

    pub const fn monsters(&self) -> u32 {
        self.goblin + self.skeleton + self.ooze
    }

    /// Goblins, skeletons, and oozes are all gone.
    pub const fn defeated_monsters(&self) -> bool {
        self.monsters() == 0
    }

    /// Monsters are gone and the dragon is not (yet) awake.
    pub const fn defeated(&self) -> bool {
        self.defeated_monsters() && self.dragon < Self::DRAGON_THRESHOLD
    }

    /// Monsters are gone but an awake dragon still guards the level.
    pub const fn dragon_blocking(&self) -> bool {
        self.defeated_monsters() && !self.defeated()
    }
}

impl TreasureCounts {
    /// Unclaimed treasure at the start of every game.
    pub const INITIAL_RESERVE: Self = Self::from_counts([3, 3, 3, 3, 3, 3, 4, 4, 4, 6]);
}
